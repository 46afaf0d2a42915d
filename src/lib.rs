//! quantcheck — checks that a multi-class logistic-regression model
//! trained inside a finite-field arithmetic circuit matches plain
//! floating-point evaluation.
//!
//! The circuit has no signed or fractional types: trained parameters
//! leave it as unsigned residues of a prime field, fixed-point scaled.
//! This crate decodes that representation ([`field`]), reconstructs the
//! per-class linear models, scores them one-vs-rest against a held-out
//! dataset ([`eval`]), and reports an accuracy figure that can be
//! compared against the float-trained baseline.
//!
//! ```ignore
//! use quantcheck::{evaluate, EvalOptions, FieldConfig, FixedCodec};
//!
//! let codec = FixedCodec::new(FieldConfig::bn254());
//! let report = evaluate(&options, &codec)?;
//! println!("{}", report.format_report(false));
//! ```

pub mod data;
pub mod diagnostic;
pub mod eval;
pub mod field;

pub use data::Dataset;
pub use diagnostic::{Diagnostic, ErrorKind};
pub use eval::{accuracy, EvalReport, LinearModel, MultiClassModel};
pub use field::params::{decode_params, extract_quantized};
pub use field::{FieldConfig, FixedCodec, SignDetection};

/// Inputs for one evaluation run. Sources are in-memory text; reading the
/// files (and mapping diagnostics back onto them) is the CLI's job.
#[derive(Clone, Debug)]
pub struct EvalOptions<'a> {
    /// Parameter file contents: one field element per line, class-major,
    /// weights then bias within each class.
    pub params_source: &'a str,
    /// Dataset CSV contents: feature columns then a label column.
    pub dataset_source: &'a str,
    pub features: usize,
    pub classes: usize,
    /// Declared sample count; the dataset must match it exactly.
    pub samples: usize,
}

/// Run the full pipeline: decode parameters, reconstruct the model, load
/// the dataset, predict, and score.
///
/// Fails on the first diagnostic; there are no partial results.
pub fn evaluate(options: &EvalOptions, codec: &FixedCodec) -> Result<EvalReport, Diagnostic> {
    let params = decode_params(options.params_source, codec)?;
    let model = MultiClassModel::from_params(&params, options.features, options.classes)?;

    let dataset = Dataset::from_csv(options.dataset_source, options.features)?;
    if dataset.len() != options.samples {
        return Err(Diagnostic::shape(format!(
            "dataset has {} samples, expected {}",
            dataset.len(),
            options.samples
        )));
    }

    let predictions = model.predict(&dataset.features);
    let acc = accuracy(&predictions, &dataset.labels)?;
    let matches = predictions
        .iter()
        .zip(&dataset.labels)
        .filter(|(p, a)| p == a)
        .count();

    Ok(EvalReport {
        accuracy: acc,
        matches,
        samples: options.samples,
        classes: options.classes,
        features: options.features,
        predictions,
        labels: dataset.labels,
    })
}
