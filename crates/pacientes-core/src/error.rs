//! Core domain errors.

use thiserror::Error;

/// Core domain errors for the pacientes client.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cedula is empty or whitespace-only.
    #[error("Invalid cedula: {0:?}")]
    InvalidCedula(String),
}
