use std::path::Path;

use super::{build_codec, fail, read_or_exit};

/// Decode a file of field elements and print one float per line.
pub fn cmd_decode(params_path: &Path, scale: u32, exact_sign: bool) {
    let codec = build_codec(scale, exact_sign);
    let name = params_path.to_string_lossy().to_string();
    let source = read_or_exit(params_path);

    let values = match quantcheck::decode_params(&source, &codec) {
        Ok(v) => v,
        Err(diag) => fail(&diag, &name, &source),
    };
    for value in values {
        println!("{}", value);
    }
}
