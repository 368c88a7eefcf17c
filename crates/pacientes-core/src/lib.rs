//! Pacientes Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Runtime specifics
//!
//! All types here represent the core domain of the patient-records client:
//! the `Paciente` record with its `Cedula` natural key, and the closed
//! failure-classification model used to turn backend outcomes into
//! user-presentable messages.

pub mod cedula;
pub mod error;
pub mod failure;
pub mod paciente;

// Re-export commonly used types
pub use cedula::Cedula;
pub use error::CoreError;
pub use failure::FailureKind;
pub use paciente::{Estado, Paciente};
