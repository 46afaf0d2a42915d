//! End-to-end evaluation of a known parameter file against a known
//! dataset, through the same pipeline the CLI drives.

use quantcheck::{evaluate, EvalOptions, ErrorKind, FieldConfig, FixedCodec};

/// Class 0: weights [1, 0, 0, 0], bias -2 (encoded as modulus - 2*2^16).
/// Classes 1 and 2: all zero, scoring a flat 0.5 on every sample.
const PARAMS: &str = "\
0x10000
0x0
0x0
0x0
0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593effe0001
0x0
0x0
0x0
0x0
0x0
0x0
0x0
0x0
0x0
0x0
";

/// Five samples, four features, ground truth in the last column.
///
/// Sample 0: z = 3 - 2 = 1, sigmoid ~ 0.731 beats the 0.5 of classes 1-2.
/// Sample 3: z = 0 gives exactly 0.5, a three-way tie -> class 0.
/// Samples where class 0 scores below 0.5 fall to the 1-vs-2 tie -> 1.
const DATASET: &str = "\
f0,f1,f2,f3,label
3,0,0,0,0
-5,0,0,0,1
10,0,0,0,2
2,0,0,0,0
-1,0,0,0,2
";

fn options<'a>(params: &'a str, dataset: &'a str) -> EvalOptions<'a> {
    EvalOptions {
        params_source: params,
        dataset_source: dataset,
        features: 4,
        classes: 3,
        samples: 5,
    }
}

#[test]
fn known_model_known_dataset() {
    let codec = FixedCodec::new(FieldConfig::bn254());
    let report = evaluate(&options(PARAMS, DATASET), &codec).unwrap();

    assert_eq!(report.predictions, vec![0, 1, 0, 0, 1]);
    assert_eq!(report.matches, 3);
    assert_eq!(report.samples, 5);
    assert!((report.accuracy - 0.6).abs() < 1e-12);

    let text = report.format_report(true);
    assert!(text.contains("Correct predictions: 3/5"));
    assert!(text.contains("Accuracy: 0.6000"));

    let json = report.to_json();
    assert!(json.contains("\"predictions\": [0, 1, 0, 0, 1]"));
}

#[test]
fn pipeline_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let params_path = dir.path().join("quantized.txt");
    let dataset_path = dir.path().join("test_data.csv");
    std::fs::write(&params_path, PARAMS).unwrap();
    std::fs::write(&dataset_path, DATASET).unwrap();

    let params_source = std::fs::read_to_string(&params_path).unwrap();
    let dataset_source = std::fs::read_to_string(&dataset_path).unwrap();

    let codec = FixedCodec::new(FieldConfig::bn254());
    let report = evaluate(&options(&params_source, &dataset_source), &codec).unwrap();
    assert_eq!(report.predictions, vec![0, 1, 0, 0, 1]);
}

#[test]
fn short_parameter_file_is_a_format_error() {
    // Drop the last line: 14 entries instead of 3 * (4 + 1).
    let short: String = PARAMS.lines().take(14).map(|l| format!("{}\n", l)).collect();
    let codec = FixedCodec::new(FieldConfig::bn254());
    let err = evaluate(&options(&short, DATASET), &codec).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Format);
    assert!(err.message.contains("14"));
    assert!(err.message.contains("15"));
}

#[test]
fn sample_count_mismatch_is_a_shape_error() {
    let mut opts = options(PARAMS, DATASET);
    opts.samples = 30;
    let codec = FixedCodec::new(FieldConfig::bn254());
    let err = evaluate(&opts, &codec).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Shape);
    assert!(err.message.contains("5"));
    assert!(err.message.contains("30"));
}

#[test]
fn bad_parameter_line_names_the_line() {
    let bad = PARAMS.replace("0x10000", "garbage!");
    let codec = FixedCodec::new(FieldConfig::bn254());
    let err = evaluate(&options(&bad, DATASET), &codec).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert_eq!(err.line, Some(1));
}

#[test]
fn decimal_parameter_file_matches_hex() {
    // The same model written in decimal instead of hex.
    let codec = FixedCodec::new(FieldConfig::bn254());
    let decimal: String = PARAMS
        .lines()
        .map(|line| {
            let v = codec.decode_text(line).unwrap();
            format!("{}\n", codec.encode_field(v))
        })
        .collect();

    let report = evaluate(&options(&decimal, DATASET), &codec).unwrap();
    assert_eq!(report.predictions, vec![0, 1, 0, 0, 1]);
}
