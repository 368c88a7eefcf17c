//! Patient operations facade.

use pacientes_core::{Cedula, Paciente};
use reqwest::Method;
use serde_json::Value;
use tracing::error;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Domain operations over patient records.
///
/// Each method performs exactly one backend call. Failures have already
/// been classified, logged and shown to the user by the time they surface
/// here; the facade adds one diagnostic line naming the operation and
/// passes the original error on; it never notifies a second time.
pub struct PacienteService {
    client: ApiClient,
}

impl PacienteService {
    /// Wrap a transport client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all patient records.
    pub async fn list(&self) -> Result<Vec<Paciente>, ApiError> {
        self.client
            .send(Method::GET, "/pacientes")
            .await
            .map_err(|e| {
                error!(error = %e, "error fetching pacientes");
                e
            })
    }

    /// Fetch a single patient by cedula.
    pub async fn get_by_cedula(&self, cedula: &Cedula) -> Result<Paciente, ApiError> {
        self.client
            .send(Method::GET, &format!("/pacientes/{cedula}"))
            .await
            .map_err(|e| {
                error!(cedula = %cedula, error = %e, "error fetching paciente");
                e
            })
    }

    /// Create a new patient record.
    ///
    /// No uniqueness pre-check on the cedula; a duplicate surfaces as the
    /// backend's 409.
    pub async fn create(&self, paciente: &Paciente) -> Result<Paciente, ApiError> {
        self.client
            .send_json(Method::POST, "/pacientes", paciente)
            .await
            .map_err(|e| {
                error!(cedula = %paciente.cedula, error = %e, "error creating paciente");
                e
            })
    }

    /// Update an existing patient record.
    pub async fn update(&self, cedula: &Cedula, paciente: &Paciente) -> Result<Paciente, ApiError> {
        self.client
            .send_json(Method::PUT, &format!("/pacientes/{cedula}"), paciente)
            .await
            .map_err(|e| {
                error!(cedula = %cedula, error = %e, "error updating paciente");
                e
            })
    }

    /// Soft-delete a patient record.
    ///
    /// The backend flips the record's status instead of purging it; the
    /// returned confirmation is server-defined and passed through as-is.
    pub async fn delete(&self, cedula: &Cedula) -> Result<Value, ApiError> {
        self.client
            .send(Method::DELETE, &format!("/pacientes/{cedula}"))
            .await
            .map_err(|e| {
                error!(cedula = %cedula, error = %e, "error deleting paciente");
                e
            })
    }

    /// Mark a patient active.
    pub async fn activate(&self, cedula: &Cedula) -> Result<Value, ApiError> {
        self.client
            .send(Method::PUT, &format!("/pacientes/{cedula}/activar"))
            .await
            .map_err(|e| {
                error!(cedula = %cedula, error = %e, "error activating paciente");
                e
            })
    }

    /// Mark a patient inactive.
    pub async fn deactivate(&self, cedula: &Cedula) -> Result<Value, ApiError> {
        self.client
            .send(Method::PUT, &format!("/pacientes/{cedula}/desactivar"))
            .await
            .map_err(|e| {
                error!(cedula = %cedula, error = %e, "error deactivating paciente");
                e
            })
    }
}
