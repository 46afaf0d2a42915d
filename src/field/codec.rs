//! Conversion between field residues and host floating point.
//!
//! Decoding is the hot direction: the circuit emits trained parameters as
//! unsigned residues (hex or decimal text), and the evaluator needs the
//! signed fixed-point values they stand for. Encoding goes the other way
//! when circuit input files are generated from float data.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::{FieldConfig, SignDetection};
use crate::diagnostic::Diagnostic;

/// Fixed-point codec for one field/scale configuration.
#[derive(Clone, Debug)]
pub struct FixedCodec {
    config: FieldConfig,
    sign: SignDetection,
}

impl FixedCodec {
    /// Codec with the deployment sign policy (high-byte heuristic).
    pub fn new(config: FieldConfig) -> Self {
        Self::with_sign_detection(config, SignDetection::HighBytes)
    }

    pub fn with_sign_detection(config: FieldConfig, sign: SignDetection) -> Self {
        Self { config, sign }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn sign_detection(&self) -> SignDetection {
        self.sign
    }

    /// Decode one field element from text.
    ///
    /// Accepts `0x`-prefixed hex, bare hex, or decimal. A bare numeral
    /// with only `0-9` digits reads as decimal; any `a-f` digit selects
    /// hex. The circuit tooling emits `0x`-prefixed hex, so the bare
    /// decimal path only sees hand-written inputs.
    pub fn decode_text(&self, text: &str) -> Result<f64, Diagnostic> {
        let raw = parse_field_text(text).ok_or_else(|| {
            Diagnostic::parse(format!("'{}' is not a hex or decimal field element", text.trim()))
        })?;
        self.decode(&raw)
    }

    /// Decode a field element into the float it encodes.
    ///
    /// Residues flagged negative by the sign policy decode as
    /// `-(modulus - raw) / 2^scale`, the rest as `raw / 2^scale`.
    pub fn decode(&self, raw: &BigUint) -> Result<f64, Diagnostic> {
        if *raw >= self.config.modulus {
            return Err(Diagnostic::range(format!(
                "field element {} is not below the modulus",
                raw
            ))
            .with_note(format!("modulus is {}", self.config.modulus)));
        }
        let scale = self.config.scale_factor();
        let value = if self.sign.is_negative(raw, &self.config) {
            let magnitude = &self.config.modulus - raw;
            -(magnitude.to_f64().unwrap_or(f64::INFINITY))
        } else {
            raw.to_f64().unwrap_or(f64::INFINITY)
        };
        Ok(value / scale)
    }

    /// Encode a float as a scaled signed integer: `round(value * 2^scale)`.
    ///
    /// No field wrapping; encoded values go into circuit input files as
    /// decimal text and the circuit maps them into the field itself.
    pub fn encode(&self, value: f64) -> i128 {
        (value * self.config.scale_factor()).round() as i128
    }

    /// Encode a float as a field element, the full inverse of [`decode`]:
    /// negative values land at `modulus - |raw|`.
    ///
    /// [`decode`]: FixedCodec::decode
    pub fn encode_field(&self, value: f64) -> BigUint {
        let raw = self.encode(value);
        if raw >= 0 {
            BigUint::from(raw as u128)
        } else {
            &self.config.modulus - BigUint::from(raw.unsigned_abs())
        }
    }
}

/// Parse a field element from trimmed text, auto-detecting the radix.
fn parse_field_text(text: &str) -> Option<BigUint> {
    let t = text.trim();
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        BigUint::parse_bytes(hex.as_bytes(), 16)
    } else if t.bytes().all(|b| b.is_ascii_digit()) {
        BigUint::parse_bytes(t.as_bytes(), 10)
    } else {
        BigUint::parse_bytes(t.as_bytes(), 16)
    }
}
