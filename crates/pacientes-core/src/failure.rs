//! Failure classification and user-facing messages for backend calls.
//!
//! The status-to-message mapping is a closed table: every failure a call can
//! produce lands in exactly one [`FailureKind`], and the text shown to the
//! user for each kind is decided here and nowhere else.

use serde_json::Value;

/// Fallback when the backend rejects the submitted data (400).
pub const MSG_DATOS_INVALIDOS: &str = "Datos inválidos. Por favor verifica la información.";

/// Fallback when the addressed resource does not exist (404).
pub const MSG_NO_ENCONTRADO: &str = "Recurso no encontrado.";

/// Fallback for a unique-key conflict (409).
pub const MSG_CEDULA_DUPLICADA: &str = "La cédula ya está registrada.";

/// Fixed text for backend-side faults (500); backend detail is never shown.
pub const MSG_ERROR_SERVIDOR: &str = "Error del servidor. Por favor intenta más tarde.";

/// Fixed text when the request got no response at all.
pub const MSG_SIN_CONEXION: &str =
    "No se pudo conectar con el servidor. Verifica tu conexión o que el backend esté ejecutándose.";

/// Classification of a failed backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// 400: the backend rejected the submitted data.
    InvalidInput,
    /// 404: the addressed resource does not exist.
    NotFound,
    /// 409: unique-key conflict (duplicate cedula).
    Conflict,
    /// 500: backend-side fault.
    ServerError,
    /// Any other HTTP status.
    UnexpectedStatus,
    /// The request went out but no response came back.
    Connectivity,
    /// Anything else (request construction, body decoding).
    Unknown,
}

impl FailureKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidInput,
            404 => Self::NotFound,
            409 => Self::Conflict,
            500 => Self::ServerError,
            _ => Self::UnexpectedStatus,
        }
    }
}

/// Select the user-facing message for an HTTP failure.
///
/// 400/404/409 prefer the backend's own message; 500 always uses the fixed
/// server-error text; any other status embeds the numeric code.
pub fn http_user_message(status: u16, backend_message: Option<&str>) -> String {
    let backend = backend_message.filter(|m| !m.is_empty());
    match FailureKind::from_status(status) {
        FailureKind::InvalidInput => backend.unwrap_or(MSG_DATOS_INVALIDOS).to_string(),
        FailureKind::NotFound => backend.unwrap_or(MSG_NO_ENCONTRADO).to_string(),
        FailureKind::Conflict => backend.unwrap_or(MSG_CEDULA_DUPLICADA).to_string(),
        FailureKind::ServerError => MSG_ERROR_SERVIDOR.to_string(),
        // from_status never yields the non-HTTP kinds
        FailureKind::UnexpectedStatus | FailureKind::Connectivity | FailureKind::Unknown => backend
            .map(str::to_string)
            .unwrap_or_else(|| format!("Error inesperado ({status})")),
    }
}

/// Message for failures that carry neither a response nor a request.
pub fn unknown_message(detail: &str) -> String {
    format!("Error desconocido: {detail}")
}

/// Probe a raw error body for the backend's own message.
///
/// Accepts a JSON object with a string `error` field, else a string
/// `message` field, else a bare JSON string; otherwise the non-empty raw
/// body text stands in.
pub fn backend_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => {
            for key in ["error", "message"] {
                if let Some(Value::String(msg)) = fields.get(key) {
                    if !msg.is_empty() {
                        return Some(msg.clone());
                    }
                }
            }
        }
        Ok(Value::String(msg)) if !msg.is_empty() => return Some(msg),
        _ => {}
    }

    let raw = body.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
