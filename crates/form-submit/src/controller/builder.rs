//! Builder para `SubmissionController`.
//!
//! Por defecto usa `HttpTransport` e `InMemoryEventStore`; los tests
//! sustituyen el transporte por uno guionizado.

use std::sync::Arc;

use super::core::SubmissionController;
use crate::config::FormConfig;
use crate::event::{EventStore, InMemoryEventStore};
use crate::transport::{HttpTransport, Transport};

pub struct ControllerBuilder {
    config: FormConfig,
    transport: Option<Arc<dyn Transport>>,
    event_store: Option<Box<dyn EventStore + Send>>,
}

impl ControllerBuilder {
    pub(crate) fn new(config: FormConfig) -> Self {
        Self { config,
               transport: None,
               event_store: None }
    }

    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    /// Transporte compartido (el caller conserva otra referencia).
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn event_store(mut self, store: impl EventStore + Send + 'static) -> Self {
        self.event_store = Some(Box::new(store));
        self
    }

    pub fn build(self) -> SubmissionController {
        let transport = self.transport.unwrap_or_else(|| Arc::new(HttpTransport::new()));
        let event_store = self.event_store.unwrap_or_else(|| Box::new(InMemoryEventStore::default()));
        SubmissionController::from_parts(self.config, transport, event_store)
    }
}
