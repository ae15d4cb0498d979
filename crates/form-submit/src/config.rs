//! Configuración de un formulario concreto.
//!
//! Este crate no lee variables de entorno: la URL y los mensajes los provee
//! la capa de aplicación (ver `formflow_rust::config`).

use std::time::Duration;

use form_core::constants::CONTACT_MUTATION;
use serde_json::{json, Value};

/// Tiempo que el flag de envío permanece activo tras cada resultado.
pub const DEFAULT_SUBMIT_DEBOUNCE: Duration = Duration::from_millis(750);
/// Vida de una notificación antes del auto-dismiss.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(10);

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch shortly.";
pub const DEFAULT_ERROR_MESSAGE: &str = "Please check the highlighted fields.";

/// Forma del cuerpo de la petición.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMode {
    /// `{"query": <query>, "variables": <payload>}`
    GraphQl { query: String },
    /// El payload tal cual.
    Rest,
}

impl RequestMode {
    pub fn graphql(query: impl Into<String>) -> Self {
        RequestMode::GraphQl { query: query.into() }
    }

    pub fn request_body(&self, payload: Value) -> Value {
        match self {
            RequestMode::GraphQl { query } => json!({ "query": query, "variables": payload }),
            RequestMode::Rest => payload,
        }
    }
}

impl Default for RequestMode {
    fn default() -> Self {
        RequestMode::graphql(CONTACT_MUTATION)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// URL absoluta (o relativa al host) a la que se hace el POST.
    pub endpoint: String,
    pub mode: RequestMode,
    pub success_message: String,
    /// Mensaje mostrado cuando el servidor rechaza campos.
    pub error_message: String,
    pub submit_debounce: Duration,
    pub notification_ttl: Duration,
}

impl FormConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(),
               mode: RequestMode::default(),
               success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
               error_message: DEFAULT_ERROR_MESSAGE.to_string(),
               submit_debounce: DEFAULT_SUBMIT_DEBOUNCE,
               notification_ttl: DEFAULT_NOTIFICATION_TTL }
    }

    /// Une host y ruta evitando barras duplicadas (`HOST + uri`).
    pub fn endpoint_for(host: &str, uri: &str) -> String {
        match (host.ends_with('/'), uri.starts_with('/')) {
            (true, true) => format!("{}{}", host.trim_end_matches('/'), uri),
            (false, false) if !host.is_empty() && !uri.is_empty() => format!("{host}/{uri}"),
            _ => format!("{host}{uri}"),
        }
    }

    pub fn with_mode(mut self, mode: RequestMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_messages(mut self, success: impl Into<String>, error: impl Into<String>) -> Self {
        self.success_message = success.into();
        self.error_message = error.into();
        self
    }

    pub fn with_timings(mut self, submit_debounce: Duration, notification_ttl: Duration) -> Self {
        self.submit_debounce = submit_debounce;
        self.notification_ttl = notification_ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_body_wraps_payload_in_variables() {
        let body = RequestMode::graphql("mutation { ping }").request_body(json!({"input": {"name": "Ada"}}));
        assert_eq!(body, json!({"query": "mutation { ping }", "variables": {"input": {"name": "Ada"}}}));
    }

    #[test]
    fn rest_body_is_the_payload() {
        assert_eq!(RequestMode::Rest.request_body(json!({"a": "1"})), json!({"a": "1"}));
    }

    #[test]
    fn endpoint_join_handles_slashes() {
        assert_eq!(FormConfig::endpoint_for("", "/api/graphql"), "/api/graphql");
        assert_eq!(FormConfig::endpoint_for("https://site.dev/", "/api/graphql"), "https://site.dev/api/graphql");
        assert_eq!(FormConfig::endpoint_for("https://site.dev", "api"), "https://site.dev/api");
        assert_eq!(FormConfig::endpoint_for("https://site.dev", "/api"), "https://site.dev/api");
    }
}
