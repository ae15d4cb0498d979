//! form-submit: envío asíncrono de formularios.
//!
//! Orquesta el pipeline puro de `form-core` con la red (`Transport`), la
//! máquina de estados del envío y la notificación transitoria.
pub mod config;
pub mod controller;
pub mod event;
pub mod notification;
pub mod transport;

pub use config::{FormConfig, RequestMode};
pub use controller::{ControllerBuilder, SubmissionController, SubmissionOutcome, SubmissionState};
pub use event::{EventStore, InMemoryEventStore, SubmissionEvent, SubmissionEventKind};
pub use notification::{Notification, NotificationKind, NotificationScheduler};
pub use transport::{HttpTransport, Transport, TransportError};
