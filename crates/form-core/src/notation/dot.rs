//! Notación dot <-> notación bracket.

use super::bracket::parse_path;
use crate::errors::FormError;

/// Convierte un nombre en notación dot a notación bracket.
///
/// `encode("input.a.b") == "input[a][b]"`. Un nombre sin puntos se devuelve
/// tal cual.
pub fn encode(name: &str) -> Result<String, FormError> {
    if !name.contains('.') {
        return Ok(name.to_string());
    }
    if name.starts_with('.') || name.ends_with('.') {
        return Err(FormError::malformed(name, "leading or trailing dot"));
    }
    if name.contains("..") {
        return Err(FormError::malformed(name, "consecutive dots"));
    }

    let mut segments = name.split('.');
    let mut bracket = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        bracket.push('[');
        bracket.push_str(segment);
        bracket.push(']');
    }
    Ok(bracket)
}

/// Inverso de [`encode`]: notación bracket a notación dot.
pub fn to_dot_notation(name: &str) -> Result<String, FormError> {
    let segments = parse_path(name)?;
    if segments.iter().any(|s| s.contains('.')) {
        return Err(FormError::malformed(name, "segment contains a dot"));
    }
    Ok(segments.join("."))
}
