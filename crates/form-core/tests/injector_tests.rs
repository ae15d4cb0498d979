use form_core::tree::Props;
use form_core::{inject_tree, CompositeInjector, ErrorFlagInjector, FieldNode, InputNode, PropInjector, SubmittingInjector,
                ValidationError};
use serde_json::json;

fn tree() -> Vec<FieldNode> {
    vec![FieldNode::layout("section").with_prop("class", "grid")
                                     .with_child(FieldNode::input("input", "input[company]").with_prop("label", "Company"))
                                     .with_child(FieldNode::layout("row").with_child(FieldNode::input("textarea", "input[message]"))),
         FieldNode::button().with_prop("label", "Send")]
}

#[test]
fn injection_reaches_nested_inputs_and_skips_layout() {
    let stamp = |node: &InputNode| -> Props {
        let mut p = Props::new();
        p.insert("seen".into(), json!(node.kind.clone()));
        p
    };
    let out = inject_tree(&tree(), &stamp);

    assert!(out[0].props().get("seen").is_none(), "layout nodes keep their props");
    assert_eq!(out[0].props()["class"], json!("grid"));
    assert_eq!(FieldNode::find_input(&out, "input[company]").unwrap().props["seen"], json!("input"));
    assert_eq!(FieldNode::find_input(&out, "input[message]").unwrap().props["seen"], json!("textarea"));
    assert_eq!(out[1].props()["seen"], json!("button"));
    assert_eq!(out[1].props()["label"], json!("Send"));
}

#[test]
fn injection_is_pure_and_deterministic() {
    let original = tree();
    let injector = SubmittingInjector { submitting: true };
    let first = inject_tree(&original, &injector);
    let second = inject_tree(&original, &injector);
    assert_eq!(first, second);
    assert_eq!(original, tree());
    assert_ne!(first, original);
}

#[test]
fn composite_injector_merge_is_deterministic() {
    let errors = vec![ValidationError::constraint("too short", Some("input[company]"))];
    let override_error = |_node: &InputNode| -> Props {
        let mut p = Props::new();
        p.insert("error".into(), json!("overridden"));
        p
    };
    let composite = CompositeInjector::new().push(ErrorFlagInjector { errors: &errors })
                                            .push(SubmittingInjector { submitting: false });
    let out = inject_tree(&tree(), &composite);
    let company = FieldNode::find_input(&out, "input[company]").unwrap();
    assert_eq!(company.props["error"], json!("invalid"));
    assert_eq!(company.props["is_submitting"], json!(false));
    assert_eq!(FieldNode::find_input(&out, "input[message]").unwrap().props["error"], json!(false));

    // El último inyector gana ante claves repetidas.
    let injectors: Vec<Box<dyn PropInjector + '_>> = vec![Box::new(ErrorFlagInjector { errors: &errors }), Box::new(override_error)];
    let composite = CompositeInjector::with_injectors(injectors);
    let out = inject_tree(&tree(), &composite);
    assert_eq!(FieldNode::find_input(&out, "input[company]").unwrap().props["error"], json!("overridden"));
}
