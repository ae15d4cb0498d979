//! Definiciones de eventos de envío y trait EventStore.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{SubmissionEvent, SubmissionEventKind};
