//! Tipos de evento del ciclo de envío y estructura `SubmissionEvent`.
//!
//! Rol en el flujo:
//! - El `SubmissionController` emite un evento por cada transición.
//! - El orden de `seq` es el contrato observable: todo el procesamiento del
//!   envío N (resultado, errores, notificación) precede a cualquier evento de
//!   un envío N+1 iniciado tras liberarse la guarda.
use chrono::{DateTime, Utc};
use form_core::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionEventKind {
    /// Se tomó la guarda y se leyeron `field_count` valores del formulario.
    SubmissionStarted { field_count: usize },
    /// Intento re-entrante descartado; `submission_id` es el envío en curso.
    SubmissionRejected,
    SubmissionSucceeded,
    /// Errores ya traducidos a notación bracket.
    SubmissionFailed { errors: Vec<ValidationError> },
    /// Pasó el debounce y el formulario vuelve a aceptar envíos.
    SubmittingCleared,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub submission_id: Uuid,
    pub kind: SubmissionEventKind,
    pub ts: DateTime<Utc>,
}
