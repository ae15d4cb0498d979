//! Pruebas del codec de notación bracket/dot.

use form_core::{decode, encode, parse_path, to_dot_notation, FormError};
use serde_json::json;

#[test]
fn decode_nests_segments_innermost_last() {
    assert_eq!(decode("input[a][b]", "x").unwrap(), json!({"input": {"a": {"b": "x"}}}));
    assert_eq!(decode("input", "x").unwrap(), json!({"input": "x"}));
}

#[test]
fn decode_rejects_unbalanced_brackets() {
    let err = decode("input[a][b", "x").unwrap_err();
    assert!(matches!(err, FormError::MalformedKey { ref key, .. } if key == "input[a][b"));
}

#[test]
fn encode_converts_dot_to_bracket() {
    assert_eq!(encode("input.a.b").unwrap(), "input[a][b]");
    assert_eq!(encode("input.email").unwrap(), "input[email]");
}

#[test]
fn encode_rejects_malformed_dot_names() {
    for bad in [".a.b", "a..b", "a.b."] {
        assert!(matches!(encode(bad), Err(FormError::MalformedKey { .. })), "{bad} should be rejected");
    }
}

#[test]
fn bracket_names_round_trip_through_dot_form() {
    for name in ["input", "input[email]", "input[address][city]", "a[b][c][d][e]"] {
        let dot = to_dot_notation(name).unwrap();
        assert_eq!(encode(&dot).unwrap(), name);
    }
}

#[test]
fn generated_names_round_trip_through_dot_form() {
    let pool = ["input", "email", "código", "ciudad", "x1", "名前", "a_b", "Zürich"];
    for depth in 1..=6 {
        for offset in 0..pool.len() {
            let segments: Vec<&str> = (0..depth).map(|i| pool[(offset + i * 3) % pool.len()]).collect();
            let name = segments.iter()
                               .skip(1)
                               .fold(segments[0].to_string(), |acc, s| format!("{acc}[{s}]"));

            let dot = to_dot_notation(&name).unwrap();
            assert_eq!(dot, segments.join("."));
            assert_eq!(encode(&dot).unwrap(), name);
            assert_eq!(parse_path(&name).unwrap(), segments);
        }
    }
}
