//! Contrato para inyectores de props y recorrido del árbol.
//!
//! Un `PropInjector` recibe un `InputNode` y devuelve un mapa de props que se
//! mezcla (shallow, las claves calculadas ganan) sobre las props del nodo.
//! Los inyectores deben ser deterministas y sin efectos secundarios.

use serde_json::Value;

use super::node::{FieldNode, InputNode, LayoutNode, Props};
use crate::constants::INVALID_FLAG;
use crate::validation::{has_field_error, ValidationError};

/// Trait para inyectores de props.
pub trait PropInjector {
    fn inject(&self, node: &InputNode) -> Props;
}

impl<F> PropInjector for F where F: Fn(&InputNode) -> Props
{
    fn inject(&self, node: &InputNode) -> Props {
        self(node)
    }
}

/// Produce un árbol nuevo, estructuralmente idéntico a `tree`, con las props
/// calculadas aplicadas a cada input. Los hijos se procesan antes de
/// devolver el nodo; `tree` no se modifica.
pub fn inject_tree(tree: &[FieldNode], injector: &dyn PropInjector) -> Vec<FieldNode> {
    tree.iter().map(|node| inject_node(node, injector)).collect()
}

fn inject_node(node: &FieldNode, injector: &dyn PropInjector) -> FieldNode {
    match node {
        FieldNode::Layout(layout) => FieldNode::Layout(LayoutNode { tag: layout.tag.clone(),
                                                                    props: layout.props.clone(),
                                                                    children: inject_tree(&layout.children, injector) }),
        FieldNode::Input(input) => {
            let children = inject_tree(&input.children, injector);
            let mut props = input.props.clone();
            for (k, v) in injector.inject(input) {
                props.insert(k, v);
            }
            FieldNode::Input(InputNode { kind: input.kind.clone(),
                                         name: input.name.clone(),
                                         props,
                                         children })
        }
    }
}

/// Marca `error: "invalid"` en los inputs afectados y `error: false` en el resto.
///
/// Un input sin nombre (p.ej. el botón) se marca si existe cualquier error de
/// restricción en el formulario.
#[derive(Debug, Clone, Copy)]
pub struct ErrorFlagInjector<'a> {
    pub errors: &'a [ValidationError],
}

impl PropInjector for ErrorFlagInjector<'_> {
    fn inject(&self, node: &InputNode) -> Props {
        let flag = if has_field_error(self.errors, node.name.as_deref()) {
            Value::from(INVALID_FLAG)
        } else {
            Value::Bool(false)
        };
        let mut props = Props::new();
        props.insert("error".to_string(), flag);
        props
    }
}

/// Propaga el flag de envío en curso (`is_submitting`) a cada input.
#[derive(Debug, Clone, Copy)]
pub struct SubmittingInjector {
    pub submitting: bool,
}

impl PropInjector for SubmittingInjector {
    fn inject(&self, _node: &InputNode) -> Props {
        let mut props = Props::new();
        props.insert("is_submitting".to_string(), Value::Bool(self.submitting));
        props
    }
}
