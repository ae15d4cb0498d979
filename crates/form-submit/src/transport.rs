//! Transporte HTTP del formulario.
//!
//! `Transport` es la costura entre el controlador y la red; `HttpTransport`
//! la implementa con `reqwest`. Un status no 2xx se trata igual que un fallo
//! de red, sin mirar el cuerpo.

use std::fmt::Debug;

use async_trait::async_trait;
use form_core::FormError;
use log::error;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<TransportError> for FormError {
    fn from(err: TransportError) -> Self {
        FormError::Transport(err.to_string())
    }
}

#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Envía `body` como JSON por POST y devuelve el cuerpo JSON de la respuesta.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        let response = self.client
                           .post(url)
                           .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                           .json(body)
                           .send()
                           .await
                           .map_err(|e| {
                               error!("post_json:send error url={url} err={e}");
                               TransportError::Network(e.to_string())
                           })?;

        let status = response.status();
        if !status.is_success() {
            error!("post_json:status url={url} status={status}");
            return Err(TransportError::Status(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| TransportError::Decode(e.to_string()))
    }
}
