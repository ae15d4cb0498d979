//! Construcción del payload que se envía al servidor.

mod build;
mod merge;

pub use build::build_payload;
pub use merge::merge_payload;
