//! Constantes compartidas del pipeline de formularios.
//!
//! `CONSTRAINT_VALIDATION_CODE` es el contrato con el backend: cualquier error
//! GraphQL cuyo `extensions.code` coincida se considera una violación de
//! restricción atribuible a un input concreto.

/// Código que el servidor usa para marcar errores de validación por campo.
pub const CONSTRAINT_VALIDATION_CODE: &str = "ERR_GRAPHQL_CONSTRAINT_VALIDATION";

/// Valor que recibe la prop `error` de un input marcado como inválido.
pub const INVALID_FLAG: &str = "invalid";

/// Mensaje genérico para fallos de transporte (red caída, status no 2xx).
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data";

/// Mensaje genérico para fallos locales (p.ej. nombres de campo mal formados).
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Documento GraphQL de la mutación de contacto expuesta por el backend.
pub const CONTACT_MUTATION: &str = "mutation Contact($input: ContactInput!) { contact(input: $input) }";
