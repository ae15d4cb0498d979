//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y produce el `FormConfig` del formulario
//! de contacto. Los crates `form-*` no leen el entorno; sólo esta capa.
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;
use form_submit::config::{DEFAULT_NOTIFICATION_TTL, DEFAULT_SUBMIT_DEBOUNCE};
use form_submit::{FormConfig, RequestMode};
use log::info;
use once_cell::sync::Lazy;

use crate::errors::core_error::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

pub const DEFAULT_URI: &str = "/api/graphql";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefijo de host (`FORMFLOW_HOST`); vacío => URL relativa.
    pub host: String,
    /// Ruta del endpoint (`FORMFLOW_URI`).
    pub uri: String,
    pub mode: RequestMode,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
    pub submit_debounce: Duration,
    pub notification_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let mode = match lookup("FORMFLOW_MODE").as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("graphql") => RequestMode::default(),
            Some("rest") => RequestMode::Rest,
            Some(other) => return Err(CoreError::Config(format!("FORMFLOW_MODE inválido: {other}"))),
        };
        let submit_debounce = match lookup("FORMFLOW_SUBMIT_DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(parse("FORMFLOW_SUBMIT_DEBOUNCE_MS", &raw)?),
            None => DEFAULT_SUBMIT_DEBOUNCE,
        };
        let notification_ttl = match lookup("FORMFLOW_NOTIFICATION_TTL_SECS") {
            Some(raw) => Duration::from_secs(parse("FORMFLOW_NOTIFICATION_TTL_SECS", &raw)?),
            None => DEFAULT_NOTIFICATION_TTL,
        };
        let uri = lookup("FORMFLOW_URI").unwrap_or_else(|| {
                                             info!("FORMFLOW_URI not set, using default: {DEFAULT_URI}");
                                             DEFAULT_URI.to_string()
                                         });

        Ok(Self { host: lookup("FORMFLOW_HOST").unwrap_or_default(),
                  uri,
                  mode,
                  success_message: lookup("FORMFLOW_SUCCESS_MESSAGE"),
                  error_message: lookup("FORMFLOW_ERROR_MESSAGE"),
                  submit_debounce,
                  notification_ttl })
    }

    pub fn endpoint(&self) -> String {
        FormConfig::endpoint_for(&self.host, &self.uri)
    }

    pub fn form_config(&self) -> FormConfig {
        let mut config = FormConfig::new(self.endpoint()).with_mode(self.mode.clone())
                                                         .with_timings(self.submit_debounce, self.notification_ttl);
        if let Some(message) = &self.success_message {
            config.success_message = message.clone();
        }
        if let Some(message) = &self.error_message {
            config.error_message = message.clone();
        }
        config
    }
}

fn parse<T: FromStr>(key: &str, raw: &str) -> Result<T, CoreError>
    where T::Err: Display
{
    raw.trim().parse().map_err(|e| CoreError::Config(format!("{key}={raw}: {e}")))
}
