//! Escenarios completos del formulario de contacto: valores -> red ->
//! errores por campo -> árbol renderizado -> notificación -> debounce.


use std::sync::Arc;
use std::time::Duration;

use form_core::{FieldNode, ValidationError};
use form_submit::{NotificationKind, SubmissionOutcome, SubmissionState};
use serde_json::json;
use test_support::{constraint_response, contact_form, controller, MockTransport};

#[tokio::test(start_paused = true)]
async fn empty_company_is_marked_inline_and_flag_clears_after_debounce() {
    let mock = Arc::new(MockTransport::new().respond(Ok(constraint_response("input.company", "Must be at least 2 characters in length"))));
    let controller = controller(mock.clone());
    let mut form = contact_form("", "ada@example.com");

    let outcome = controller.submit(&mut form).await;
    let expected = vec![ValidationError::constraint("Must be at least 2 characters in length", Some("input[company]"))];
    assert_eq!(outcome, SubmissionOutcome::Failed(expected.clone()));
    assert_eq!(controller.state(), SubmissionState::Failed(expected.clone()));
    assert_eq!(mock.last_body().unwrap()["variables"]["input"]["company"], json!(""));

    let rendered = controller.render(&form);
    let company = FieldNode::find_input(&rendered, "input[company]").unwrap();
    let email = FieldNode::find_input(&rendered, "input[email]").unwrap();
    assert_eq!(company.props["error"], json!("invalid"));
    assert_eq!(email.props["error"], json!(false));
    assert_eq!(company.props["is_submitting"], json!(true));
    // El botón refleja el indicador a nivel formulario.
    assert_eq!(rendered[2].props()["error"], json!("invalid"));

    let notification = controller.notification().expect("error notification");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Please fix the highlighted fields");

    tokio::time::sleep(Duration::from_millis(749)).await;
    assert!(controller.is_submitting());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!controller.is_submitting());
    assert_eq!(controller.state(), SubmissionState::Idle);
    // Los errores siguen visibles hasta el próximo envío.
    assert_eq!(controller.errors(), expected);
    let rendered = controller.render(&form);
    let company = FieldNode::find_input(&rendered, "input[company]").unwrap();
    assert_eq!(company.props["error"], json!("invalid"));
    assert_eq!(company.props["is_submitting"], json!(false));
}

#[tokio::test(start_paused = true)]
async fn success_clears_values_and_auto_dismisses_notification() {
    let mock = Arc::new(MockTransport::new().respond(Ok(json!({"data": {"contact": true}}))));
    let controller = controller(mock.clone());
    let mut form = contact_form("ACME", "ada@example.com");

    assert_eq!(controller.submit(&mut form).await, SubmissionOutcome::Succeeded);
    assert_eq!(controller.state(), SubmissionState::Succeeded);
    assert!(controller.errors().is_empty());
    for name in ["input[company]", "input[name]", "input[email]", "input[timeframe]"] {
        assert_eq!(form.value(name), Some(""), "{name} should be cleared");
    }

    let notification = controller.notification().expect("success notification");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Message sent");

    tokio::time::sleep(Duration::from_millis(9_999)).await;
    assert!(controller.notification().is_some());
    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(controller.notification().is_none());
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_beats_auto_dismiss() {
    let controller = controller(Arc::new(MockTransport::new()));
    let mut form = contact_form("ACME", "ada@example.com");

    controller.submit(&mut form).await;
    tokio::time::sleep(Duration::from_secs(3)).await;
    controller.dismiss_notification();
    assert!(controller.notification().is_none());
    controller.dismiss_notification();
    assert!(controller.notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn successful_retry_clears_previous_field_errors() {
    let mock = Arc::new(MockTransport::new().respond(Ok(constraint_response("input.email", "Must be in email format"))));
    let controller = controller(mock.clone());
    let mut form = contact_form("ACME", "not-an-email");

    controller.submit(&mut form).await;
    assert!(controller.has_field_error(Some("input[email]")));
    assert!(!controller.has_field_error(Some("input[company]")));

    tokio::time::sleep(Duration::from_millis(751)).await;
    form.set_value("input[email]", "ada@example.com");
    assert_eq!(controller.submit(&mut form).await, SubmissionOutcome::Succeeded);
    assert!(!controller.has_field_error(None));
}
