//! Field-side representation of fixed-point numbers.
//!
//! The arithmetic circuit computes over a prime field with no native
//! signed type: a real value `v` travels as the residue `round(v * 2^k)`
//! when non-negative, or `modulus - round(|v| * 2^k)` when negative. This
//! module holds the deployment parameters (`FieldConfig`), the policy for
//! deciding which residues are negative (`SignDetection`), and the codec
//! that moves values between the two worlds (`codec::FixedCodec`).
//!
//! The deployment field is the BN254 scalar field (254-bit prime) with
//! scale 2^16, but nothing below hard-codes either: both arrive through a
//! `FieldConfig` built at the start of a run.

pub mod codec;
pub mod params;

use num_bigint::BigUint;
use num_traits::Zero;

pub use codec::FixedCodec;

/// BN254 scalar field modulus, the circuit's native prime.
pub const BN254_MODULUS_HEX: &str =
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

/// Default fixed-point scale exponent: values are `raw / 2^16`.
pub const DEFAULT_SCALE: u32 = 16;

/// Immutable field/scale parameters for one evaluation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// The field modulus; every encoded value is a residue below it.
    pub modulus: BigUint,
    /// Fixed-point scale exponent `k`: logical value = raw / 2^k.
    pub scale: u32,
}

impl FieldConfig {
    pub fn new(modulus: BigUint, scale: u32) -> Self {
        Self { modulus, scale }
    }

    /// The deployment configuration: BN254 scalar field, scale 2^16.
    pub fn bn254() -> Self {
        let modulus = BigUint::parse_bytes(BN254_MODULUS_HEX.as_bytes(), 16)
            .expect("BN254 modulus constant is valid hex");
        Self::new(modulus, DEFAULT_SCALE)
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// 2^scale as a float divisor.
    pub fn scale_factor(&self) -> f64 {
        (self.scale as f64).exp2()
    }
}

/// Policy for classifying a residue as the encoding of a negative value.
///
/// The circuit tooling checks whether any bit above position 128 is set
/// (`HighBytes`). That is not the same as an exact upper-half test against
/// a 254-bit modulus: a residue in `[2^128, modulus/2]` is mathematically
/// in the lower half but the heuristic calls it negative. Encoded model
/// weights are many orders of magnitude below that window, so the
/// approximation holds in practice; `HalfModulus` is the exact test for
/// callers that want it. Swapping strategies never touches call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignDetection {
    /// Original tooling heuristic: negative iff `raw >> 128 != 0`.
    HighBytes,
    /// Exact test: negative iff `raw > modulus / 2`.
    HalfModulus,
}

impl SignDetection {
    pub fn is_negative(self, raw: &BigUint, config: &FieldConfig) -> bool {
        match self {
            SignDetection::HighBytes => !(raw >> 128u32).is_zero(),
            SignDetection::HalfModulus => (raw << 1u32) > config.modulus,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignDetection::HighBytes => "high-byte-heuristic",
            SignDetection::HalfModulus => "half-modulus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn bn254_modulus_is_254_bits() {
        let config = FieldConfig::bn254();
        assert_eq!(config.modulus.bits(), 254);
        assert_eq!(config.scale, 16);
        assert_eq!(config.scale_factor(), 65536.0);
    }

    #[test]
    fn with_scale_overrides() {
        let config = FieldConfig::bn254().with_scale(8);
        assert_eq!(config.scale_factor(), 256.0);
    }

    #[test]
    fn strategies_agree_on_small_values() {
        let config = FieldConfig::bn254();
        let one = BigUint::one();
        let top = &config.modulus - 1u32;
        for strategy in [SignDetection::HighBytes, SignDetection::HalfModulus] {
            assert!(!strategy.is_negative(&BigUint::zero(), &config));
            assert!(!strategy.is_negative(&one, &config));
            assert!(strategy.is_negative(&top, &config));
        }
    }

    #[test]
    fn strategies_diverge_above_2_128() {
        // 2^130 sits in the lower half of the field, but its high bytes
        // are nonzero: the heuristic misreads it as negative. Preserved
        // for compatibility with the circuit tooling.
        let config = FieldConfig::bn254();
        let v = BigUint::one() << 130u32;
        assert!((&v << 1u32) < config.modulus);
        assert!(SignDetection::HighBytes.is_negative(&v, &config));
        assert!(!SignDetection::HalfModulus.is_negative(&v, &config));
    }

    #[test]
    fn half_modulus_boundary_is_exact() {
        // Smallest prime where the halves are easy to enumerate: p = 7,
        // lower half {0..3}, upper half {4..6}.
        let config = FieldConfig::new(BigUint::from(7u32), 0);
        let negatives: Vec<bool> = (0u32..7)
            .map(|v| SignDetection::HalfModulus.is_negative(&BigUint::from(v), &config))
            .collect();
        assert_eq!(
            negatives,
            [false, false, false, false, true, true, true]
        );
    }

    #[test]
    fn strategy_names() {
        assert_eq!(SignDetection::HighBytes.name(), "high-byte-heuristic");
        assert_eq!(SignDetection::HalfModulus.name(), "half-modulus");
    }
}
