use std::path::Path;
use std::process;

use quantcheck::Diagnostic;

use super::{fail, read_or_exit};

/// Extract quantized parameters from raw prover output and write them as
/// a canonical parameter file, one value per line.
pub fn cmd_extract(output_path: &Path, params_path: &Path, features: usize, classes: usize) {
    let name = output_path.to_string_lossy().to_string();
    let source = read_or_exit(output_path);

    let values = match quantcheck::extract_quantized(&source) {
        Ok(v) => v,
        Err(diag) => fail(&diag, &name, &source),
    };

    let expected = classes * (features + 1);
    if values.len() != expected {
        let diag = Diagnostic::format(format!(
            "found {} quantized values, expected {} for {} classes with {} features",
            values.len(),
            expected,
            classes,
            features
        ));
        fail(&diag, &name, &source);
    }

    let mut content = String::new();
    for value in &values {
        content.push_str(value);
        content.push('\n');
    }
    if let Err(e) = std::fs::write(params_path, &content) {
        eprintln!("error: cannot write '{}': {}", params_path.display(), e);
        process::exit(1);
    }
    eprintln!(
        "Extracted {} parameters to {}",
        values.len(),
        params_path.display()
    );
}
