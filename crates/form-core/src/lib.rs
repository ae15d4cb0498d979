//! form-core: pipeline puro de formularios (codec de nombres, payload,
//! errores de validación y árbol de campos). Sin I/O ni async.
pub mod constants;
pub mod errors;
pub mod form;
pub mod notation;
pub mod payload;
pub mod tree;
pub mod validation;

pub use errors::FormError;
pub use form::{Form, FormValues};
pub use notation::{decode, encode, parse_path, to_dot_notation};
pub use payload::{build_payload, merge_payload};
pub use tree::{inject_tree, CompositeInjector, ErrorFlagInjector, FieldNode, InputNode, LayoutNode, PropInjector, SubmittingInjector};
pub use validation::{extract_constraint_errors, has_field_error, ErrorExtensions, ValidationError};
