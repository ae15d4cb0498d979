//! Núcleo del `SubmissionController`.
//!
//! Invariantes:
//! - A lo sumo un envío en vuelo por instancia: mientras el flag de envío
//!   está activo (llamada de red o debounce pendiente) `submit` devuelve
//!   `Rejected` sin tocar la red ni el estado.
//! - El lock interno nunca se mantiene a través de un `.await`.
//! - El resultado (estado, errores, notificación) se publica antes de
//!   programar el debounce, así que el envío N se procesa por completo antes
//!   de que pueda empezar el N+1.
//! - Si el futuro de `submit` se descarta a mitad de envío (timeout,
//!   `select!`, tarea abortada) el envío queda como fallido y el debounce se
//!   programa igualmente.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use form_core::constants::{FETCH_ERROR_MESSAGE, GENERIC_ERROR_MESSAGE};
use form_core::{build_payload, extract_constraint_errors, has_field_error, inject_tree, CompositeInjector, ErrorFlagInjector,
                FieldNode, Form, FormError, FormValues, SubmittingInjector, ValidationError};
use log::{debug, warn};
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::builder::ControllerBuilder;
use super::state::{SubmissionOutcome, SubmissionState};
use crate::config::FormConfig;
use crate::event::{EventStore, SubmissionEvent, SubmissionEventKind};
use crate::notification::{Notification, NotificationScheduler};
use crate::transport::Transport;

struct ControllerState {
    state: SubmissionState,
    submitting: bool,
    /// Errores del último envío fallido; sobreviven a la vuelta a `Idle`.
    errors: Vec<ValidationError>,
    current_submission: Option<Uuid>,
    clear_task: Option<JoinHandle<()>>,
    events: Box<dyn EventStore + Send>,
}

pub struct SubmissionController {
    config: FormConfig,
    transport: Arc<dyn Transport>,
    state: Arc<Mutex<ControllerState>>,
    notifications: NotificationScheduler,
}

fn lock(state: &Mutex<ControllerState>) -> MutexGuard<'_, ControllerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SubmissionController {
    pub fn builder(config: FormConfig) -> ControllerBuilder {
        ControllerBuilder::new(config)
    }

    pub(crate) fn from_parts(config: FormConfig, transport: Arc<dyn Transport>, events: Box<dyn EventStore + Send>) -> Self {
        let notifications = NotificationScheduler::new(config.notification_ttl);
        let state = ControllerState { state: SubmissionState::Idle,
                                      submitting: false,
                                      errors: vec![],
                                      current_submission: None,
                                      clear_task: None,
                                      events };
        Self { config,
               transport,
               state: Arc::new(Mutex::new(state)),
               notifications }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Envía el formulario. Ver invariantes del módulo.
    ///
    /// En caso de éxito los valores de `form` vuelven a sus defaults.
    pub async fn submit(&self, form: &mut Form) -> SubmissionOutcome {
        let values = form.values();
        let Some(submission_id) = self.try_begin(&values) else {
            return SubmissionOutcome::Rejected;
        };
        let in_flight = InFlight { controller: self,
                                   submission_id,
                                   done: false };

        let outcome = match self.perform(&values).await {
            Ok(()) => {
                form.reset();
                SubmissionOutcome::Succeeded
            }
            Err(err) => SubmissionOutcome::Failed(self.failure_errors(err)),
        };

        in_flight.complete(&outcome);
        outcome
    }

    /// Toma la guarda o registra el rechazo.
    fn try_begin(&self, values: &FormValues) -> Option<Uuid> {
        let mut state = lock(&self.state);
        if state.submitting {
            let in_flight = state.current_submission.unwrap_or_else(Uuid::nil);
            debug!("submit:rejected in_flight={in_flight}");
            state.events.append_kind(in_flight, SubmissionEventKind::SubmissionRejected);
            return None;
        }

        let submission_id = Uuid::new_v4();
        debug!("submit:start id={submission_id} fields={}", values.len());
        state.submitting = true;
        state.state = SubmissionState::Submitting;
        state.current_submission = Some(submission_id);
        state.events.append_kind(submission_id, SubmissionEventKind::SubmissionStarted { field_count: values.len() });
        Some(submission_id)
    }

    async fn perform(&self, values: &FormValues) -> Result<(), FormError> {
        let payload = build_payload(values)?;
        let body = self.config.mode.request_body(payload);
        let response = self.transport.post_json(&self.config.endpoint, &body).await?;

        let server_errors = response_errors(&response)?;
        if !server_errors.is_empty() {
            return Err(FormError::ConstraintViolation(server_errors));
        }
        Ok(())
    }

    /// Traduce el error a la representación almacenada y muestra la notificación.
    fn failure_errors(&self, err: FormError) -> Vec<ValidationError> {
        match err {
            FormError::MalformedKey { .. } => {
                warn!("submit:aborted before network: {err}");
                self.notifications.show(Notification::error(GENERIC_ERROR_MESSAGE));
                vec![ValidationError::general(GENERIC_ERROR_MESSAGE)]
            }
            FormError::Transport(reason) => {
                warn!("submit:transport failure: {reason}");
                self.notifications.show(Notification::error(FETCH_ERROR_MESSAGE));
                vec![ValidationError::general(FETCH_ERROR_MESSAGE)]
            }
            FormError::ConstraintViolation(server_errors) => {
                let mapped = extract_constraint_errors(&server_errors);
                debug!("submit:server errors total={} constraint={}", server_errors.len(), mapped.len());
                self.notifications.show(Notification::error(self.config.error_message.as_str()));
                if mapped.is_empty() {
                    let message = server_errors.first()
                                               .map(|e| e.message.clone())
                                               .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
                    vec![ValidationError::general(message)]
                } else {
                    mapped
                }
            }
        }
    }

    fn finish(&self, submission_id: Uuid, outcome: &SubmissionOutcome) {
        if matches!(outcome, SubmissionOutcome::Succeeded) {
            self.notifications.show(Notification::success(self.config.success_message.as_str()));
        }
        self.record(submission_id, outcome);
    }

    /// Publica el resultado y programa la limpieza del flag de envío.
    fn record(&self, submission_id: Uuid, outcome: &SubmissionOutcome) {
        let mut state = lock(&self.state);
        match outcome {
            SubmissionOutcome::Succeeded => {
                state.state = SubmissionState::Succeeded;
                state.errors.clear();
                state.events.append_kind(submission_id, SubmissionEventKind::SubmissionSucceeded);
            }
            SubmissionOutcome::Failed(errors) => {
                state.state = SubmissionState::Failed(errors.clone());
                state.errors = errors.clone();
                state.events
                     .append_kind(submission_id, SubmissionEventKind::SubmissionFailed { errors: errors.clone() });
            }
            SubmissionOutcome::Rejected => return,
        }

        match Handle::try_current() {
            Ok(handle) => {
                let task = handle.spawn(clear_submitting(Arc::clone(&self.state), self.config.submit_debounce, submission_id));
                if let Some(previous) = state.clear_task.replace(task) {
                    previous.abort();
                }
            }
            // Sin runtime no hay timer posible: se libera en el acto.
            Err(_) => clear_now(&mut state, submission_id),
        }
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.state).state.clone()
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.state).submitting
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        lock(&self.state).errors.clone()
    }

    /// `None` consulta el indicador a nivel formulario.
    pub fn has_field_error(&self, field_name: Option<&str>) -> bool {
        has_field_error(&lock(&self.state).errors, field_name)
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    pub fn dismiss_notification(&self) {
        self.notifications.dismiss();
    }

    /// Árbol listo para renderizar: cada input recibe `error` e `is_submitting`.
    pub fn render(&self, form: &Form) -> Vec<FieldNode> {
        let state = lock(&self.state);
        let injector = CompositeInjector::new().push(ErrorFlagInjector { errors: &state.errors })
                                               .push(SubmittingInjector { submitting: state.submitting });
        inject_tree(form.nodes(), &injector)
    }

    pub fn events(&self) -> Vec<SubmissionEvent> {
        lock(&self.state).events.list()
    }

    /// Cancela el debounce y el auto-dismiss pendientes. Tras esto la
    /// instancia no debe volver a usarse.
    pub fn shutdown(&self) {
        if let Some(task) = lock(&self.state).clear_task.take() {
            task.abort();
        }
        self.notifications.shutdown();
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Envío en curso. Si se descarta sin `complete`, registra el envío como
/// fallido para que la guarda se libere tras el debounce.
struct InFlight<'c> {
    controller: &'c SubmissionController,
    submission_id: Uuid,
    done: bool,
}

impl InFlight<'_> {
    fn complete(mut self, outcome: &SubmissionOutcome) {
        self.done = true;
        self.controller.finish(self.submission_id, outcome);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        warn!("submit:cancelled id={}", self.submission_id);
        let errors = vec![ValidationError::general(GENERIC_ERROR_MESSAGE)];
        self.controller.record(self.submission_id, &SubmissionOutcome::Failed(errors));
    }
}

async fn clear_submitting(state: Arc<Mutex<ControllerState>>, delay: Duration, submission_id: Uuid) {
    tokio::time::sleep(delay).await;
    clear_now(&mut lock(&state), submission_id);
}

fn clear_now(state: &mut ControllerState, submission_id: Uuid) {
    if state.current_submission != Some(submission_id) {
        return;
    }
    debug!("submit:cleared id={submission_id}");
    state.submitting = false;
    state.state = SubmissionState::Idle;
    state.clear_task = None;
    state.events.append_kind(submission_id, SubmissionEventKind::SubmittingCleared);
}

/// Extrae el array `errors` de una respuesta GraphQL. Ausente o `null` => vacío.
fn response_errors(response: &Value) -> Result<Vec<ValidationError>, FormError> {
    match response.get("errors") {
        None | Some(Value::Null) => Ok(vec![]),
        Some(errors) => serde_json::from_value(errors.clone()).map_err(|e| FormError::Transport(format!("invalid errors array: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_or_null_errors_mean_success() {
        let errors = tokio_test::assert_ok!(response_errors(&json!({"data": {"contact": true}})));
        assert!(errors.is_empty());
        assert!(response_errors(&json!({"data": null, "errors": null})).unwrap().is_empty());
        assert!(response_errors(&json!(true)).unwrap().is_empty());
    }

    #[test]
    fn unparseable_errors_are_a_transport_failure() {
        assert!(matches!(response_errors(&json!({"errors": "boom"})), Err(FormError::Transport(_))));
    }
}
