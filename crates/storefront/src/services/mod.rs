//! External service clients.

pub mod consult;
pub mod intake;
pub mod whatsapp;

pub use consult::ConsultClient;
pub use intake::{IntakeClient, IntakeError, OrderSubmission};
