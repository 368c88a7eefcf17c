//! Data-access layer for the pacientes backend.
//!
//! This crate turns the patient domain operations into HTTP requests and
//! turns HTTP/network outcomes back into a uniform, user-presentable
//! failure model. Failures are classified centrally, logged, surfaced once
//! through the [`Notificador`] port and then propagated unchanged to the
//! caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pacientes_client::{ApiClient, PacienteService, StderrNotificador};
//!
//! async fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://localhost:3000/api", Arc::new(StderrNotificador))?;
//!     let service = PacienteService::new(client);
//!
//!     for paciente in service.list().await? {
//!         println!("{}", paciente.cedula);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod normalize;
pub mod notify;
pub mod service;

// Re-export main types
pub use error::ApiError;
pub use http::ApiClient;
pub use normalize::NormalizedFailure;
pub use notify::{BufferNotificador, Notificador, SilencioNotificador, StderrNotificador};
pub use service::PacienteService;
