use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(
    name = "quantcheck",
    version,
    about = "Checks circuit-trained models against floating-point evaluation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a quantized parameter file against a test dataset
    Evaluate {
        /// Parameter file: one field element per line, class-major
        #[arg(long)]
        params: PathBuf,
        /// Test dataset CSV: feature columns then a label column
        #[arg(long)]
        test_data: PathBuf,
        /// Number of features per sample
        #[arg(long)]
        features: usize,
        /// Number of classes
        #[arg(long)]
        classes: usize,
        /// Expected number of test samples
        #[arg(long)]
        samples: usize,
        /// Fixed-point scale exponent (value = raw / 2^scale)
        #[arg(long, default_value_t = quantcheck::field::DEFAULT_SCALE)]
        scale: u32,
        /// Use the exact half-modulus sign test instead of the high-byte heuristic
        #[arg(long)]
        exact_sign: bool,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
        /// Print the predicted label for every sample
        #[arg(long)]
        predictions: bool,
    },
    /// Decode field-encoded values to floating point, one per line
    Decode {
        /// File of field elements, one per line
        #[arg(long)]
        params: PathBuf,
        /// Fixed-point scale exponent (value = raw / 2^scale)
        #[arg(long, default_value_t = quantcheck::field::DEFAULT_SCALE)]
        scale: u32,
        /// Use the exact half-modulus sign test instead of the high-byte heuristic
        #[arg(long)]
        exact_sign: bool,
    },
    /// Encode floating-point values as scaled fixed-point integers
    Encode {
        /// Values to encode
        #[arg(required = true)]
        values: Vec<f64>,
        /// Fixed-point scale exponent (raw = round(value * 2^scale))
        #[arg(long, default_value_t = quantcheck::field::DEFAULT_SCALE)]
        scale: u32,
    },
    /// Extract quantized parameters from raw prover output
    Extract {
        /// File containing the raw prover output
        #[arg(long)]
        output: PathBuf,
        /// Parameter file to write, one value per line
        #[arg(long)]
        params: PathBuf,
        /// Number of features per sample
        #[arg(long)]
        features: usize,
        /// Number of classes
        #[arg(long)]
        classes: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate {
            params,
            test_data,
            features,
            classes,
            samples,
            scale,
            exact_sign,
            json,
            predictions,
        } => cli::evaluate::cmd_evaluate(
            &params,
            &test_data,
            features,
            classes,
            samples,
            scale,
            exact_sign,
            json,
            predictions,
        ),
        Command::Decode {
            params,
            scale,
            exact_sign,
        } => cli::decode::cmd_decode(&params, scale, exact_sign),
        Command::Encode { values, scale } => cli::encode::cmd_encode(&values, scale),
        Command::Extract {
            output,
            params,
            features,
            classes,
        } => cli::extract::cmd_extract(&output, &params, features, classes),
    }
}
