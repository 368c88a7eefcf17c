//! Patient record and status types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cedula::Cedula;

/// Status of a patient record.
///
/// Flipped only by the dedicated activate/deactivate endpoints; the generic
/// update operation never touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estado {
    Activo,
    Inactivo,
}

impl Estado {
    /// Returns true if the record is active.
    pub fn is_activo(&self) -> bool {
        matches!(self, Self::Activo)
    }
}

/// A patient record.
///
/// Only the `cedula` key is typed; every other attribute is backend-defined
/// and passes through this layer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paciente {
    /// Natural key of the record. Immutable once assigned.
    pub cedula: Cedula,

    /// Backend-defined attributes, carried as-is.
    #[serde(flatten)]
    pub datos: Map<String, Value>,
}

impl Paciente {
    /// Create a record with no extra attributes.
    pub fn new(cedula: Cedula) -> Self {
        Self {
            cedula,
            datos: Map::new(),
        }
    }

    /// Builder method to attach a backend-defined attribute.
    pub fn with_dato(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.datos.insert(key.into(), value.into());
        self
    }

    /// Look up a backend-defined attribute.
    pub fn dato(&self, key: &str) -> Option<&Value> {
        self.datos.get(key)
    }

    /// Read the conventional `estado` attribute, if the backend sent one.
    pub fn estado(&self) -> Option<Estado> {
        match self.datos.get("estado")? {
            Value::String(s) => match s.to_lowercase().as_str() {
                "activo" => Some(Estado::Activo),
                "inactivo" => Some(Estado::Inactivo),
                _ => None,
            },
            _ => None,
        }
    }
}
