//! Formulario declarado: dueño del árbol de nodos y de los valores actuales.
//!
//! El valor de cada input vive en su prop `value`; `default_value` (opcional)
//! es el valor al que vuelve tras `reset`.

use indexmap::IndexMap;
use serde_json::Value;

use crate::tree::{walk_inputs, walk_inputs_mut, FieldNode, InputNode};

/// Pares (nombre, valor) en orden de iteración del formulario.
///
/// Sólo campos escalares: si dos inputs comparten nombre, el último valor
/// gana y conserva la posición del primero.
pub type FormValues = IndexMap<String, String>;

pub const VALUE_PROP: &str = "value";
pub const DEFAULT_VALUE_PROP: &str = "default_value";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form {
    nodes: Vec<FieldNode>,
}

impl Form {
    pub fn new(nodes: Vec<FieldNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[FieldNode] {
        &self.nodes
    }

    /// Asigna el valor actual de todos los inputs llamados `name`.
    /// Devuelve `false` si no existe ninguno.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let mut found = false;
        walk_inputs_mut(&mut self.nodes, &mut |input: &mut InputNode| {
            if input.name.as_deref() == Some(name) {
                input.props.insert(VALUE_PROP.to_string(), Value::String(value.clone()));
                found = true;
            }
        });
        found
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        FieldNode::find_input(&self.nodes, name).and_then(|input| input.props.get(VALUE_PROP))
                                                .and_then(Value::as_str)
    }

    /// Lee los valores de todos los inputs con nombre, en profundidad primero.
    /// Un input sin `value` aporta cadena vacía; los que no tienen nombre
    /// (botones) no aportan nada.
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::new();
        walk_inputs(&self.nodes, &mut |input: &InputNode| {
            let Some(name) = input.name.as_ref() else { return };
            let value = input.props.get(VALUE_PROP).and_then(Value::as_str).unwrap_or_default();
            values.insert(name.clone(), value.to_string());
        });
        values
    }

    /// Devuelve cada input con nombre a su `default_value` (o cadena vacía).
    pub fn reset(&mut self) {
        walk_inputs_mut(&mut self.nodes, &mut |input: &mut InputNode| {
            if input.name.is_none() {
                return;
            }
            let default = input.props
                               .get(DEFAULT_VALUE_PROP)
                               .and_then(Value::as_str)
                               .unwrap_or_default()
                               .to_string();
            input.props.insert(VALUE_PROP.to_string(), Value::String(default));
        });
    }
}
