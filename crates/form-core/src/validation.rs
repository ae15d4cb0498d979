//! ValidationErrorMapper: traduce los errores del servidor a errores por campo.
//!
//! El servidor identifica el input culpable con notación dot
//! (`input.email`); los campos del formulario se declaran en notación bracket
//! (`input[email]`). Tras `extract_constraint_errors` los errores quedan en
//! notación bracket y pueden compararse directamente con un `FieldName`.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::CONSTRAINT_VALIDATION_CODE;
use crate::notation::encode;

/// Error estructurado tal como lo devuelve un servidor GraphQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ErrorExtensions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorExtensions {
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationError {
    /// Error general (sin código ni campo), usado para fallos locales o de red.
    pub fn general(message: impl Into<String>) -> Self {
        Self { message: message.into(),
               extensions: None }
    }

    /// Error de restricción, opcionalmente ligado a un campo.
    pub fn constraint(message: impl Into<String>, field: Option<&str>) -> Self {
        Self { message: message.into(),
               extensions: Some(ErrorExtensions { code: CONSTRAINT_VALIDATION_CODE.to_string(),
                                                  field: field.map(str::to_string) }) }
    }

    pub fn is_constraint(&self) -> bool {
        self.extensions.as_ref().is_some_and(|e| e.code == CONSTRAINT_VALIDATION_CODE)
    }

    pub fn field(&self) -> Option<&str> {
        self.extensions.as_ref().and_then(|e| e.field.as_deref())
    }
}

/// Filtra los errores de restricción y reescribe su `field` a notación bracket.
///
/// Los errores sin `field` se conservan tal cual (errores a nivel formulario).
/// Un `field` que no es notación dot válida se conserva sin traducir: no
/// coincidirá con ningún input pero sigue contando para el indicador global.
pub fn extract_constraint_errors(errors: &[ValidationError]) -> Vec<ValidationError> {
    errors.iter()
          .filter(|e| e.is_constraint())
          .map(|e| {
              let mut mapped = e.clone();
              if let Some(ext) = mapped.extensions.as_mut() {
                  if let Some(field) = ext.field.as_mut() {
                      match encode(field) {
                          Ok(bracket) => *field = bracket,
                          Err(err) => warn!("extract_constraint_errors: keeping raw field: {err}"),
                      }
                  }
              }
              mapped
          })
          .collect()
}

/// `true` si algún error de restricción afecta a `field_name`.
///
/// - `Some(name)`: cuenta un error sin campo (general) o con campo igual a `name`.
/// - `None`: cuenta cualquier error de restricción (indicador de formulario).
pub fn has_field_error(errors: &[ValidationError], field_name: Option<&str>) -> bool {
    errors.iter().filter(|e| e.is_constraint()).any(|e| match (field_name, e.field()) {
                                                         (None, _) => true,
                                                         (Some(_), None) => true,
                                                         (Some(name), Some(field)) => field == name,
                                                     })
}
