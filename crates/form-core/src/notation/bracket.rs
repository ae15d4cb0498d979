//! Notación bracket -> ruta de segmentos y payload anidado.

use serde_json::{Map, Value};

use super::has_brackets;
use crate::errors::FormError;

/// Descompone un nombre en notación bracket en sus segmentos.
///
/// El primer segmento es la clave raíz (texto previo al primer `[`); los
/// siguientes son el contenido de cada par de corchetes en orden.
/// Un nombre sin corchetes produce un único segmento.
pub fn parse_path(name: &str) -> Result<Vec<String>, FormError> {
    if !has_brackets(name) {
        return Ok(vec![name.to_string()]);
    }
    if name.matches('[').count() != name.matches(']').count() {
        return Err(FormError::malformed(name, "unbalanced brackets"));
    }

    // Con corchetes balanceados y al menos uno presente, siempre hay un `[`.
    let open = name.find('[').unwrap_or(name.len());
    let (base, mut rest) = name.split_at(open);
    if base.is_empty() {
        return Err(FormError::malformed(name, "missing root key"));
    }
    if base.contains(']') {
        return Err(FormError::malformed(name, "closing bracket before opening one"));
    }

    let mut segments = vec![base.to_string()];
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')
                        .ok_or_else(|| FormError::malformed(name, "unexpected text after segment"))?;
        let end = inner.find(']')
                       .ok_or_else(|| FormError::malformed(name, "unterminated segment"))?;
        let segment = &inner[..end];
        if segment.is_empty() {
            return Err(FormError::malformed(name, "empty segment"));
        }
        if segment.contains('[') {
            return Err(FormError::malformed(name, "nested brackets"));
        }
        segments.push(segment.to_string());
        rest = &inner[end + 1..];
    }
    Ok(segments)
}

/// Convierte un par (nombre, valor) en un payload de un solo campo.
///
/// `decode("input[a][b]", "x")` produce `{"input": {"a": {"b": "x"}}}`; el
/// segmento más interno envuelve directamente al valor.
pub fn decode(name: &str, value: &str) -> Result<Value, FormError> {
    let segments = parse_path(name)?;
    let nested = segments.iter().rev().fold(Value::String(value.to_string()), |inner, segment| {
                                          let mut object = Map::new();
                                          object.insert(segment.clone(), inner);
                                          Value::Object(object)
                                      });
    Ok(nested)
}
