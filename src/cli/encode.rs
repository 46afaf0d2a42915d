use quantcheck::{FieldConfig, FixedCodec};

/// Encode floats as scaled fixed-point integers, one per line, ready for
/// a circuit input file.
pub fn cmd_encode(values: &[f64], scale: u32) {
    let codec = FixedCodec::new(FieldConfig::bn254().with_scale(scale));
    for value in values {
        println!("{}", codec.encode(*value));
    }
}
