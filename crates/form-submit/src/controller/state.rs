use form_core::ValidationError;

/// Estado del controlador de envío.
///
/// Las transiciones válidas son:
/// - `Idle` -> `Submitting`
/// - `Submitting` -> `Succeeded` | `Failed`
/// - `Succeeded` | `Failed` -> `Idle` (al expirar el debounce)
///
/// `Succeeded` y `Failed` son señales transitorias: duran lo que dura el
/// debounce del flag de envío.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Errores ya traducidos a notación bracket.
    Failed(Vec<ValidationError>),
}

/// Resultado de una llamada a `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(Vec<ValidationError>),
    /// Ya había un envío en curso; no se hizo nada.
    Rejected,
}

impl SubmissionOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, SubmissionOutcome::Failed(_))
    }
}
