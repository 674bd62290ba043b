//! Cake consultation client.
//!
//! Asks a Gemini model for a recommendation in the voice of Chef Morris.
//! The surface is deliberately infallible: any failure (no API key, network
//! error, unexpected response shape) falls back to the house recommendation
//! so the consultation form always answers.

use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::ConsultConfig;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const SYSTEM_INSTRUCTION: &str = "You are Chef Morris, the Master Baker of Morris Cakes & \
    Confectionery UG. You provide expert, friendly, and professional cake consultations. \
    Never mention being an AI or a language model.";

/// Served whenever the model cannot be reached.
const FALLBACK_RECOMMENDATION: &str = "Based on my years in the kitchen, I highly recommend \
    our signature Midnight Cocoa Forest Cake - it's a masterpiece that never fails to delight!";

/// Errors from the consultation call. Internal only - callers always get a
/// recommendation string.
#[derive(Debug, Error)]
enum ConsultError {
    #[error("no API key configured")]
    NoApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: status {0}")]
    Api(u16),

    #[error("empty response")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for cake consultations.
#[derive(Debug, Clone)]
pub struct ConsultClient {
    client: reqwest::Client,
    config: ConsultConfig,
}

impl ConsultClient {
    #[must_use]
    pub fn new(config: ConsultConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Recommend a cake or treat for an occasion and set of preferences.
    ///
    /// Always returns a recommendation; failures are logged and answered
    /// with the house fallback.
    #[instrument(skip(self))]
    pub async fn recommend(&self, occasion: &str, preferences: &str) -> String {
        match self.generate(occasion, preferences).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "consultation failed, serving fallback");
                FALLBACK_RECOMMENDATION.to_string()
            }
        }
    }

    async fn generate(&self, occasion: &str, preferences: &str) -> Result<String, ConsultError> {
        let api_key = self.config.api_key.as_ref().ok_or(ConsultError::NoApiKey)?;

        let prompt = format!(
            "As Chef Morris, suggest the perfect cake or treat from my menu for this \
             occasion: \"{occasion}\" with these specific preferences: \"{preferences}\". \
             Focus on flavors like Ugandan vanilla, premium dark chocolate, seasonal \
             fruits, or red velvet. Respond as if you are the Master Baker himself, \
             giving a warm, expert recommendation. Keep it appetizing and concise."
        );

        let url = format!("{API_BASE_URL}/{}:generateContent", self.config.model);
        let body = serde_json::json!({
            "system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsultError::Api(status.as_u16()));
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ConsultError::EmptyResponse);
        }
        Ok(text)
    }
}
