//! NotificationScheduler: una única notificación transitoria con auto-dismiss.
//!
//! Mostrar una notificación nueva reemplaza a la actual y cancela su timer;
//! nunca se encolan. Los timers son tareas `tokio` propiedad del scheduler y
//! se abortan en `dismiss`, `shutdown` y `Drop`. `show` debe llamarse dentro
//! de un runtime de Tokio.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: DateTime<Utc>, // metadato, no participa en el reemplazo
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self { message: message.into(),
               kind,
               shown_at: Utc::now() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }
}

#[derive(Debug, Default)]
struct SchedulerState {
    current: Option<Notification>,
    // Se incrementa en cada show/dismiss; un timer sólo limpia si su
    // generación sigue siendo la vigente.
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

#[derive(Debug)]
pub struct NotificationScheduler {
    ttl: Duration,
    state: Arc<Mutex<SchedulerState>>,
}

fn lock(state: &Mutex<SchedulerState>) -> MutexGuard<'_, SchedulerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl NotificationScheduler {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl,
               state: Arc::new(Mutex::new(SchedulerState::default())) }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Reemplaza la notificación actual y arranca un nuevo timer de `ttl`.
    pub fn show(&self, notification: Notification) {
        let mut state = lock(&self.state);
        state.generation += 1;
        let generation = state.generation;
        debug!("notification:show kind={:?} generation={generation}", notification.kind);
        state.current = Some(notification);

        let shared = Arc::clone(&self.state);
        let ttl = self.ttl;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut state = lock(&shared);
            if state.generation == generation {
                debug!("notification:auto_dismiss generation={generation}");
                state.current = None;
                state.timer = None;
            }
        });
        if let Some(previous) = state.timer.replace(timer) {
            previous.abort();
        }
    }

    /// Limpia la notificación actual y cancela su timer. Idempotente.
    pub fn dismiss(&self) {
        let mut state = lock(&self.state);
        state.generation += 1;
        state.current = None;
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
    }

    pub fn current(&self) -> Option<Notification> {
        lock(&self.state).current.clone()
    }

    /// Cancela el timer pendiente sin tocar la notificación visible.
    pub fn shutdown(&self) {
        if let Some(timer) = lock(&self.state).timer.take() {
            timer.abort();
        }
    }
}

impl Default for NotificationScheduler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_NOTIFICATION_TTL)
    }
}

impl Drop for NotificationScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn auto_dismisses_after_ttl() {
        let scheduler = NotificationScheduler::default();
        assert_eq!(scheduler.ttl(), Duration::from_secs(10));
        scheduler.show(Notification::success("sent"));

        tokio::time::sleep(Duration::from_millis(9_999)).await;
        assert_eq!(scheduler.current().map(|n| n.message), Some("sent".to_string()));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(scheduler.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn new_notification_supersedes_previous_timer() {
        let scheduler = NotificationScheduler::new(Duration::from_secs(10));
        scheduler.show(Notification::error("first"));
        tokio::time::sleep(Duration::from_secs(6)).await;

        scheduler.show(Notification::info("second"));
        tokio::time::sleep(Duration::from_secs(6)).await;
        // El timer de "first" (t=10s) ya no puede borrar "second".
        let current = scheduler.current().expect("second still visible");
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Info);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(scheduler.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_is_idempotent() {
        let scheduler = NotificationScheduler::new(Duration::from_secs(10));
        scheduler.show(Notification::success("sent"));
        scheduler.dismiss();
        scheduler.dismiss();
        assert_eq!(scheduler.current(), None);
        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(scheduler.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_pending_timer() {
        let scheduler = NotificationScheduler::new(Duration::from_secs(10));
        scheduler.show(Notification::success("sent"));
        scheduler.shutdown();
        tokio::time::sleep(Duration::from_secs(11)).await;
        assert!(scheduler.current().is_some());
    }
}
