//! Failure classification and the notification choke point.
//!
//! Classification is a side effect: the normalizer logs the raw failure and
//! delivers a user-facing message, then the ORIGINAL error keeps
//! propagating. It never substitutes its own classification object for the
//! error the caller sees.

use pacientes_core::failure::{self, FailureKind};
use tracing::error;

use crate::error::ApiError;
use crate::notify::Notificador;

/// Classification computed for a failed call.
///
/// Carries the tag, the user-facing message and a borrow of the original
/// failure. Lives only for the duration of the failing call; what
/// propagates to the caller is the [`ApiError`] itself.
#[derive(Debug)]
pub struct NormalizedFailure<'e> {
    /// Classification tag.
    pub kind: FailureKind,
    /// Message fit for showing to an end user.
    pub user_message: String,
    /// The failure as the transport produced it.
    pub error: &'e ApiError,
}

impl<'e> NormalizedFailure<'e> {
    /// Classify a transport failure.
    ///
    /// Precedence: a server response with a status outranks everything,
    /// then no-response connectivity failures, then everything else.
    pub fn from_error(error: &'e ApiError) -> Self {
        match error {
            ApiError::Http { status, body } => {
                let backend = failure::backend_message(body);
                Self {
                    kind: FailureKind::from_status(*status),
                    user_message: failure::http_user_message(*status, backend.as_deref()),
                    error,
                }
            }
            ApiError::Connect(_) => Self {
                kind: FailureKind::Connectivity,
                user_message: failure::MSG_SIN_CONEXION.to_string(),
                error,
            },
            ApiError::Decode(_) | ApiError::Request(_) => Self {
                kind: FailureKind::Unknown,
                user_message: failure::unknown_message(&error.to_string()),
                error,
            },
        }
    }
}

/// Log a failure and deliver its user message through the notification port.
///
/// The notifier is awaited: a blocking implementation suspends the failing
/// call until the user has seen the message. Runs exactly once per failing
/// call, before the original error is returned.
pub(crate) async fn report(error: &ApiError, notifier: &dyn Notificador) {
    match error {
        ApiError::Http { status, body } => {
            error!(status = %status, body = %body, "API error");
        }
        other => {
            error!(error = %other, "API error");
        }
    }

    let falla = NormalizedFailure::from_error(error);
    if !falla.user_message.is_empty() {
        notifier.notificar(&falla).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::BufferNotificador;
    use pacientes_core::failure::{
        MSG_CEDULA_DUPLICADA, MSG_ERROR_SERVIDOR, MSG_NO_ENCONTRADO,
    };

    fn http_error(status: u16, body: &str) -> ApiError {
        ApiError::Http {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_http_failure_uses_backend_message() {
        let err = http_error(404, r#"{"message":"paciente no encontrado"}"#);
        let falla = NormalizedFailure::from_error(&err);
        assert_eq!(falla.kind, FailureKind::NotFound);
        assert_eq!(falla.user_message, "paciente no encontrado");
    }

    #[test]
    fn test_http_failure_fallback_message() {
        let err = http_error(404, "");
        let falla = NormalizedFailure::from_error(&err);
        assert_eq!(falla.user_message, MSG_NO_ENCONTRADO);
    }

    #[test]
    fn test_server_error_hides_backend_detail() {
        let err = http_error(500, r#"{"error":"NullPointerException"}"#);
        let falla = NormalizedFailure::from_error(&err);
        assert_eq!(falla.kind, FailureKind::ServerError);
        assert_eq!(falla.user_message, MSG_ERROR_SERVIDOR);
    }

    #[test]
    fn test_decode_failure_is_unknown() {
        let cause = serde_json::from_str::<serde_json::Value>("no es json").unwrap_err();
        let err = ApiError::Decode(cause);
        let falla = NormalizedFailure::from_error(&err);
        assert_eq!(falla.kind, FailureKind::Unknown);
        assert!(falla.user_message.starts_with("Error desconocido: "));
    }

    #[tokio::test]
    async fn test_report_delivers_message_once() {
        let (notifier, mut rx) = BufferNotificador::new();
        let err = http_error(409, "");

        report(&err, &notifier).await;

        assert_eq!(rx.try_recv().unwrap(), MSG_CEDULA_DUPLICADA);
        assert!(rx.try_recv().is_err());
    }
}
