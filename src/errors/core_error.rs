use form_core::FormError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de formulario: {0}")]
    Form(#[from] FormError),
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_io_variant_from() {
        let io_err = std::io::Error::other("falló IO");
        let err: CoreError = io_err.into();
        assert_eq!(err.to_string(), "Error en IO: falló IO");
    }

    #[test]
    fn test_config_variant_format() {
        let err = CoreError::Config("FORMFLOW_MODE inválido".into());
        assert_eq!(err.to_string(), "Error de configuración: FORMFLOW_MODE inválido");
    }

    #[test]
    fn test_form_variant_from() {
        let err: CoreError = FormError::Transport("unexpected status 500".into()).into();
        assert_eq!(err.to_string(), "Error de formulario: transport: unexpected status 500");
    }
}
