//! Evaluation reports: human-readable summary plus a machine-readable
//! JSON form for CI pipelines. Uses manual JSON formatting (no serde).

/// Outcome of one evaluation run.
#[derive(Clone, Debug)]
pub struct EvalReport {
    /// Fraction of samples predicted correctly, in [0, 1].
    pub accuracy: f64,
    pub matches: usize,
    pub samples: usize,
    pub classes: usize,
    pub features: usize,
    /// Predicted label per sample, in input row order.
    pub predictions: Vec<usize>,
    /// Ground-truth label per sample.
    pub labels: Vec<usize>,
}

impl EvalReport {
    /// Human-readable summary. With `show_predictions`, one
    /// `row / predicted / actual` line per sample follows.
    pub fn format_report(&self, show_predictions: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Evaluated {} samples across {} classes ({} features)\n",
            self.samples, self.classes, self.features
        ));
        out.push_str(&format!(
            "Correct predictions: {}/{}\n",
            self.matches, self.samples
        ));
        out.push_str(&format!("Accuracy: {:.4}\n", self.accuracy));

        if show_predictions {
            out.push('\n');
            out.push_str("row  predicted  actual\n");
            for (i, (p, a)) in self.predictions.iter().zip(&self.labels).enumerate() {
                let mark = if p == a { ' ' } else { '*' };
                out.push_str(&format!("{:<4} {:<10} {}{}\n", i, p, a, mark));
            }
        }
        out
    }

    /// Machine-readable JSON report.
    pub fn to_json(&self) -> String {
        let mut out = String::with_capacity(512);
        out.push_str("{\n");
        out.push_str(&json_uint(2, "version", 1));
        out.push_str(",\n");
        out.push_str(&json_float(2, "accuracy", self.accuracy));
        out.push_str(",\n");
        out.push_str(&json_uint(2, "matches", self.matches));
        out.push_str(",\n");
        out.push_str(&json_uint(2, "samples", self.samples));
        out.push_str(",\n");
        out.push_str(&json_uint(2, "classes", self.classes));
        out.push_str(",\n");
        out.push_str(&json_uint(2, "features", self.features));
        out.push_str(",\n");
        out.push_str(&json_uint_array(2, "predictions", &self.predictions));
        out.push_str(",\n");
        out.push_str(&json_uint_array(2, "labels", &self.labels));
        out.push('\n');
        out.push_str("}\n");
        out
    }
}

// ─── JSON Helpers ──────────────────────────────────────────────────

/// Write an indented JSON integer value: `"key": value`.
fn json_uint(indent: usize, key: &str, value: usize) -> String {
    let pad = " ".repeat(indent);
    format!("{}\"{}\": {}", pad, key, value)
}

/// Write an indented JSON float value: `"key": value`.
fn json_float(indent: usize, key: &str, value: f64) -> String {
    let pad = " ".repeat(indent);
    format!("{}\"{}\": {}", pad, key, value)
}

/// Write an indented JSON array of integers: `"key": [a, b, c]`.
fn json_uint_array(indent: usize, key: &str, values: &[usize]) -> String {
    let pad = " ".repeat(indent);
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{}\"{}\": [{}]", pad, key, items.join(", "))
}
