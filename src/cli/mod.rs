pub mod decode;
pub mod encode;
pub mod evaluate;
pub mod extract;

use std::path::Path;
use std::process;

use quantcheck::{Diagnostic, FieldConfig, FixedCodec, SignDetection};

/// Read a file to a string, exiting on failure.
pub fn read_or_exit(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

/// Render a diagnostic against its source file and exit.
pub fn fail(diag: &Diagnostic, filename: &str, source: &str) -> ! {
    diag.render(filename, source);
    process::exit(1);
}

/// Build the codec from CLI flags: deployment field, chosen scale and
/// sign policy.
pub fn build_codec(scale: u32, exact_sign: bool) -> FixedCodec {
    let config = FieldConfig::bn254().with_scale(scale);
    let sign = if exact_sign {
        SignDetection::HalfModulus
    } else {
        SignDetection::HighBytes
    };
    FixedCodec::with_sign_detection(config, sign)
}
