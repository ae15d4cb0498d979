//! KeyNotationCodec: conversión entre nombres de campo planos y rutas anidadas.
//!
//! Dos notaciones conviven en el pipeline:
//! - bracket (`input[address][city]`): la que declaran los inputs del
//!   formulario y la que se usa para construir el payload.
//! - dot (`input.address.city`): la que devuelve el servidor en
//!   `extensions.field` de los errores de validación.
//!
//! Todas las funciones son puras.

mod bracket;
mod dot;

pub use bracket::{decode, parse_path};
pub use dot::{encode, to_dot_notation};

/// `true` si el nombre contiene algún corchete (balanceado o no).
pub(crate) fn has_brackets(name: &str) -> bool {
    name.contains('[') || name.contains(']')
}
