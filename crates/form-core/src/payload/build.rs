use log::debug;
use serde_json::{Map, Value};

use super::merge::merge_payload;
use crate::errors::FormError;
use crate::form::FormValues;
use crate::notation::decode;

/// Pliega todos los pares (nombre, valor) en un único payload, en el orden
/// de iteración del formulario. Un nombre mal formado aborta la construcción.
pub fn build_payload(values: &FormValues) -> Result<Value, FormError> {
    let mut payload = Value::Object(Map::new());
    for (name, value) in values.iter() {
        let single = decode(name, value)?;
        payload = merge_payload(&payload, &single);
    }
    debug!("build_payload: fields={} top_level_keys={}",
           values.len(),
           payload.as_object().map(|o| o.len()).unwrap_or_default());
    Ok(payload)
}
