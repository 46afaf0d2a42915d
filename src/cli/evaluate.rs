use std::path::Path;
use std::process;

use quantcheck::{accuracy, Dataset, Diagnostic, EvalReport, MultiClassModel};

use super::{build_codec, fail, read_or_exit};

/// Run the full evaluation: decode the parameter file, rebuild the
/// per-class models, score the dataset, and print the report.
#[allow(clippy::too_many_arguments)]
pub fn cmd_evaluate(
    params_path: &Path,
    dataset_path: &Path,
    features: usize,
    classes: usize,
    samples: usize,
    scale: u32,
    exact_sign: bool,
    json: bool,
    show_predictions: bool,
) {
    let codec = build_codec(scale, exact_sign);

    let params_name = params_path.to_string_lossy().to_string();
    let params_source = read_or_exit(params_path);
    eprintln!("Decoding parameters from {}...", params_path.display());
    let params = match quantcheck::decode_params(&params_source, &codec) {
        Ok(p) => p,
        Err(diag) => fail(&diag, &params_name, &params_source),
    };
    let model = match MultiClassModel::from_params(&params, features, classes) {
        Ok(m) => m,
        Err(diag) => fail(&diag, &params_name, &params_source),
    };

    let dataset_name = dataset_path.to_string_lossy().to_string();
    let dataset_source = read_or_exit(dataset_path);
    eprintln!("Loading test data from {}...", dataset_path.display());
    let dataset = match Dataset::from_csv(&dataset_source, features) {
        Ok(d) => d,
        Err(diag) => fail(&diag, &dataset_name, &dataset_source),
    };
    if dataset.len() != samples {
        let diag = Diagnostic::shape(format!(
            "dataset has {} samples, expected {}",
            dataset.len(),
            samples
        ));
        fail(&diag, &dataset_name, &dataset_source);
    }

    eprintln!(
        "Evaluating {} samples across {} classes...",
        samples, classes
    );
    let predictions = model.predict(&dataset.features);
    let acc = match accuracy(&predictions, &dataset.labels) {
        Ok(a) => a,
        Err(diag) => {
            eprintln!("error: {}", diag);
            process::exit(1);
        }
    };
    let matches = predictions
        .iter()
        .zip(&dataset.labels)
        .filter(|(p, a)| p == a)
        .count();

    let report = EvalReport {
        accuracy: acc,
        matches,
        samples,
        classes,
        features,
        predictions,
        labels: dataset.labels,
    };

    if json {
        print!("{}", report.to_json());
    } else {
        print!("{}", report.format_report(show_predictions));
    }
}
