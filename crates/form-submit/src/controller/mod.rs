//! SubmissionController: máquina de estados del envío del formulario.
//!
//! - `state`: estados y resultados observables.
//! - `core`: la guarda de un único envío en vuelo, la llamada de red y la
//!   secuencia errores -> notificación -> debounce.
//! - `builder`: ensamblado con transporte y event store configurables.

mod builder;
mod core;
mod state;

pub use builder::ControllerBuilder;
pub use self::core::SubmissionController;
pub use state::{SubmissionOutcome, SubmissionState};
