//! Árbol de nodos declarados del formulario e inyección de props.
//!
//! El árbol es una unión etiquetada `Layout | Input`: la variante es el
//! marcador que decide qué nodos reciben props calculadas, sin inspeccionar
//! tipos concretos. Un nuevo tipo de campo sólo necesita declararse como
//! `InputNode` con su propio `kind`.

mod composite;
mod injector;
mod node;

pub use composite::CompositeInjector;
pub use injector::{inject_tree, ErrorFlagInjector, PropInjector, SubmittingInjector};
pub use node::{walk_inputs, walk_inputs_mut, FieldNode, InputNode, LayoutNode, Props};
