use form_core::{build_payload, extract_constraint_errors, inject_tree, ErrorFlagInjector, FieldNode, Form, ValidationError};
use form_submit::{SubmissionController, SubmissionOutcome};
use formflow_rust::config::AppConfig;
use formflow_rust::errors::core_error::CoreError;
use serde_json::{json, to_string_pretty};
use tracing_subscriber::{fmt, EnvFilter};

/// Formulario de contacto tal como lo declara la página.
fn contact_form() -> Form {
    Form::new(vec![FieldNode::layout("fieldset").with_child(FieldNode::input("input", "input[company]").with_prop("label", "Company")
                                                                                                      .with_prop("required", true))
                                               .with_child(FieldNode::input("input", "input[name]").with_prop("label", "Name")
                                                                                                   .with_prop("required", true))
                                               .with_child(FieldNode::input("email", "input[email]").with_prop("label", "Email")
                                                                                                    .with_prop("required", true)),
                   FieldNode::input("select", "input[timeframe]").with_prop("label", "Timeframe")
                                                                 .with_prop("options", json!(["ASAP", "1-3 months", "3+ months"]))
                                                                 .with_prop("default_value", "ASAP")
                                                                 .with_prop("value", "ASAP"),
                   FieldNode::button().with_prop("label", "Send")])
}

/// Demo local: payload y marcado de errores sin tocar la red.
fn run_offline_demo() -> Result<(), CoreError> {
    let mut form = contact_form();
    form.set_value("input[company]", "A");
    form.set_value("input[name]", "Ada Lovelace");
    form.set_value("input[email]", "ada@example.com");

    let payload = build_payload(&form.values())?;
    println!("[payload] {}", to_string_pretty(&payload).unwrap_or_default());

    // Respuesta típica del backend ante una empresa demasiado corta.
    let server = vec![ValidationError::constraint("Must be at least 2 characters in length", Some("input.company"))];
    let errors = extract_constraint_errors(&server);
    let rendered = inject_tree(form.nodes(), &ErrorFlagInjector { errors: &errors });
    for name in ["input[company]", "input[name]", "input[email]", "input[timeframe]"] {
        let flag = FieldNode::find_input(&rendered, name).and_then(|n| n.props.get("error")).cloned().unwrap_or_default();
        println!("[errors] {name}: {flag}");
    }
    Ok(())
}

async fn run_live_submit(config: &AppConfig) -> Result<(), CoreError> {
    let controller = SubmissionController::builder(config.form_config()).build();
    let mut form = contact_form();
    form.set_value("input[company]", "Analytical Engines Ltd");
    form.set_value("input[name]", "Ada Lovelace");
    form.set_value("input[email]", "ada@example.com");

    println!("[live] POST {}", controller.config().endpoint);
    match controller.submit(&mut form).await {
        SubmissionOutcome::Succeeded => println!("[live] enviado"),
        SubmissionOutcome::Failed(errors) => {
            for e in errors.iter() {
                println!("[live] error field={:?} message={}", e.field(), e.message);
            }
        }
        SubmissionOutcome::Rejected => println!("[live] envío en curso, ignorado"),
    }
    if let Some(n) = controller.notification() {
        println!("[live] notificación {:?}: {}", n.kind, n.message);
    }
    controller.shutdown();
    Ok(())
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[config] {e}");
            std::process::exit(1);
        }
    };

    println!("--- Demo offline ---");
    if let Err(e) = run_offline_demo() {
        eprintln!("[offline] Error: {e}");
    }

    // Envío real opt-in: requiere un backend escuchando en el endpoint.
    if std::env::var("FORMFLOW_RUN_LIVE").ok().as_deref() == Some("1") {
        println!("--- Envío real ---");
        if let Err(e) = run_live_submit(&config).await {
            eprintln!("[live] Error: {e}");
        }
    } else {
        eprintln!("[live] Skipping (set FORMFLOW_RUN_LIVE=1 to enable)");
    }
}
