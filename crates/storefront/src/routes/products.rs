//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query},
};
use morris_cakes_core::{Category, Product};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog;
use crate::error::{AppError, Result};

/// Catalog browse filters.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    /// Category label; absent or `All` means no filter.
    pub category: Option<String>,
    /// Case-insensitive name search.
    #[serde(default)]
    pub q: String,
}

fn parse_category(raw: Option<&str>) -> Result<Option<Category>> {
    match raw {
        None => Ok(None),
        Some(label) if label.is_empty() || label.eq_ignore_ascii_case("All") => Ok(None),
        Some(label) => label
            .parse::<Category>()
            .map(Some)
            .map_err(|e| AppError::BadRequest(e.to_string())),
    }
}

/// List catalog products, optionally filtered.
#[instrument]
pub async fn index(Query(query): Query<BrowseQuery>) -> Result<Json<Vec<Product>>> {
    let category = parse_category(query.category.as_deref())?;
    let products = catalog::browse(category, &query.q)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(products))
}

/// Show a single product.
#[instrument]
pub async fn show(Path(id): Path<String>) -> Result<Json<Product>> {
    catalog::find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_treats_all_as_no_filter() {
        assert!(parse_category(None).unwrap().is_none());
        assert!(parse_category(Some("All")).unwrap().is_none());
        assert!(parse_category(Some("all")).unwrap().is_none());
        assert!(parse_category(Some("")).unwrap().is_none());
    }

    #[test]
    fn test_parse_category_labels() {
        assert_eq!(
            parse_category(Some("Fast Food")).unwrap(),
            Some(Category::FastFood)
        );
        assert!(parse_category(Some("Sushi")).is_err());
    }
}
