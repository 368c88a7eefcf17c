//! Newtype wrapper for the patient natural key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// National identity number; the natural key of a [`Paciente`](crate::Paciente).
///
/// A `Cedula` is guaranteed non-empty. Single-resource endpoints are
/// addressed as `/pacientes/{cedula}`, and an empty key would silently hit
/// the collection route instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cedula(String);

impl Cedula {
    /// Create a new Cedula, rejecting empty or whitespace-only input.
    pub fn new(cedula: impl Into<String>) -> Result<Self, CoreError> {
        let cedula = cedula.into();
        if cedula.trim().is_empty() {
            return Err(CoreError::InvalidCedula(cedula));
        }
        Ok(Self(cedula))
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Cedula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Cedula {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Cedula {
    type Error = CoreError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Cedula> for String {
    fn from(cedula: Cedula) -> Self {
        cedula.0
    }
}
