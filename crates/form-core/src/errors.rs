//! Errores del pipeline de formularios.
//!
//! Conjunto cerrado de variantes; el caller decide con un `match` exhaustivo
//! cómo presentar cada una.

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum FormError {
    /// Nombre de campo con sintaxis bracket/dot inválida. Error local: nunca
    /// llega a la red.
    #[error("malformed field name \"{key}\": {reason}")]
    MalformedKey { key: String, reason: String },
    /// Fallo de red o respuesta no exitosa.
    #[error("transport: {0}")]
    Transport(String),
    /// Errores de validación reportados por el servidor.
    #[error("constraint violation ({} error(s))", .0.len())]
    ConstraintViolation(Vec<ValidationError>),
}

impl FormError {
    pub(crate) fn malformed(key: &str, reason: &str) -> Self {
        FormError::MalformedKey { key: key.to_string(),
                                  reason: reason.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_key_display_names_the_key() {
        let err = FormError::malformed("a..b", "consecutive dots");
        assert_eq!(err.to_string(), "malformed field name \"a..b\": consecutive dots");
    }

    #[test]
    fn constraint_violation_display_counts_errors() {
        let err = FormError::ConstraintViolation(vec![ValidationError::general("x"), ValidationError::general("y")]);
        assert_eq!(err.to_string(), "constraint violation (2 error(s))");
    }
}
