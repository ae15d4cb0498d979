//! Utilidades para fusionar payloads JSON de forma determinista.
//!
//! Deep-merge: cuando ambos lados tienen un objeto bajo la misma clave se
//! fusionan recursivamente; en cualquier otro caso el valor de `source`
//! reemplaza al de `target`. Las claves hermanas siempre se acumulan.

use serde_json::Value;

/// Deep merge: keys from `source` override keys from `target` at leaf level.
/// Ninguno de los dos argumentos se modifica; el resultado es un valor nuevo.
pub fn merge_payload(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(mt), Value::Object(ms)) => {
            let mut out = mt.clone();
            for (k, v) in ms.iter() {
                let merged = match out.get(k) {
                    Some(existing) => merge_payload(existing, v),
                    None => v.clone(),
                };
                out.insert(k.clone(), merged);
            }
            Value::Object(out)
        }
        // Non-objects: override
        (_, other) => other.clone(),
    }
}
