use chrono::Utc;
use uuid::Uuid;

use super::{SubmissionEvent, SubmissionEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, submission_id: Uuid, kind: SubmissionEventKind) -> SubmissionEvent;
    /// Lista todos los eventos (orden ascendente por seq).
    fn list(&self) -> Vec<SubmissionEvent>;
    /// Eventos de un envío concreto.
    fn list_for(&self, submission_id: Uuid) -> Vec<SubmissionEvent> {
        self.list().into_iter().filter(|e| e.submission_id == submission_id).collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    pub inner: Vec<SubmissionEvent>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, submission_id: Uuid, kind: SubmissionEventKind) -> SubmissionEvent {
        let seq = self.inner.len() as u64;
        let ev = SubmissionEvent { seq, submission_id, kind, ts: Utc::now() };
        self.inner.push(ev.clone());
        ev
    }
    fn list(&self) -> Vec<SubmissionEvent> { self.inner.clone() }
}
