//! FormFlow Rust Library
//!
//! Este crate actúa como la capa de aplicación del formulario de contacto:
//! - Expone `config` para leer el entorno y construir el `FormConfig`.
//! - Expone `errors` para los errores de aplicación.
//! - Reexporta `form_core` y `form_submit` para clientes externos.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;

pub use form_core;
pub use form_submit;
