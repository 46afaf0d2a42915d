//! Parameter streams: the trained model as the circuit hands it over.
//!
//! Two shapes arrive in practice. The canonical one is a plain text file
//! with one field element per line (class-major, weights then bias per
//! class). Upstream of that sits the raw prover output, where each value
//! is wrapped as `Quantized { x: ... }`; `extract_quantized` pulls the
//! values out so they can be written to a canonical parameter file.

use super::codec::FixedCodec;
use crate::diagnostic::Diagnostic;

/// Decode a line-oriented parameter file into floats.
///
/// Whitespace-only lines are skipped (trailing-newline tolerance) and do
/// not count as entries. Any malformed or out-of-range line fails the
/// whole stream with the 1-based line number attached.
pub fn decode_params(source: &str, codec: &FixedCodec) -> Result<Vec<f64>, Diagnostic> {
    let mut values = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match codec.decode_text(line) {
            Ok(v) => values.push(v),
            Err(diag) => return Err(diag.at_line(idx + 1)),
        }
    }
    Ok(values)
}

/// Extract `Quantized { x: <value> }` occurrences from raw prover output.
///
/// Returns the value texts in order of appearance, untouched, so they can
/// be decoded or re-emitted verbatim. Fails with a format diagnostic when
/// the output contains none.
pub fn extract_quantized(output: &str) -> Result<Vec<String>, Diagnostic> {
    let mut values = Vec::new();
    let mut rest = output;

    while let Some(pos) = rest.find("Quantized") {
        rest = &rest[pos + "Quantized".len()..];
        let body = match braced_body(rest) {
            Some((body, after)) => {
                rest = after;
                body
            }
            None => break,
        };
        // Body reads "x: <value>".
        let mut parts = body.splitn(2, ':');
        let key = parts.next().unwrap_or("").trim();
        let value = parts.next().unwrap_or("").trim();
        if key == "x" && !value.is_empty() {
            values.push(value.to_string());
        }
    }

    if values.is_empty() {
        return Err(Diagnostic::format(
            "no Quantized values found in prover output".to_string(),
        )
        .with_help("expected occurrences of `Quantized { x: ... }`".to_string()));
    }
    Ok(values)
}

/// Split `rest` at its leading `{ ... }` group: returns the body between
/// the braces and the text after the closing brace.
fn braced_body(rest: &str) -> Option<(&str, &str)> {
    let open = rest.find('{')?;
    let close = rest[open..].find('}')?;
    let body = &rest[open + 1..open + close];
    let after = &rest[open + close + 1..];
    Some((body, after))
}
