//! Test-dataset loading.
//!
//! The dataset is CSV: `feature_count` numeric columns followed by one
//! integer class-label column, with an optional header row. It is loaded
//! once and read-only for the duration of an evaluation.

use csv::ReaderBuilder;

use crate::diagnostic::Diagnostic;

/// A fixed-width feature matrix with parallel ground-truth labels.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// Row-major feature matrix, `samples x feature_count`.
    pub features: Vec<Vec<f64>>,
    /// Ground-truth class labels, zero-based, one per row.
    pub labels: Vec<usize>,
}

impl Dataset {
    /// Parse CSV text into a dataset with exactly `feature_count` feature
    /// columns plus a label column.
    ///
    /// The first row is treated as a header when any of its cells fails
    /// to parse as a number. Labels must be integer-valued; the dataset
    /// scripts emit them float-formatted (`2.0`), which is accepted.
    pub fn from_csv(source: &str, feature_count: usize) -> Result<Dataset, Diagnostic> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source.as_bytes());

        let mut features = Vec::new();
        let mut labels = Vec::new();
        let mut first = true;

        for record in reader.records() {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    return Err(Diagnostic::parse(format!("malformed CSV record: {}", e)));
                }
            };
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(0);

            if first {
                first = false;
                if record.iter().any(|cell| cell.parse::<f64>().is_err()) {
                    // Header row.
                    continue;
                }
            }

            if record.len() != feature_count + 1 {
                return Err(Diagnostic::shape(format!(
                    "row has {} columns, expected {} features plus a label",
                    record.len(),
                    feature_count
                ))
                .at_line(row));
            }

            let mut values = Vec::with_capacity(feature_count);
            for cell in record.iter().take(feature_count) {
                match cell.parse::<f64>() {
                    Ok(v) => values.push(v),
                    Err(_) => {
                        return Err(Diagnostic::parse(format!(
                            "'{}' is not a numeric feature value",
                            cell
                        ))
                        .at_line(row));
                    }
                }
            }

            let label_cell = record.get(feature_count).unwrap_or("");
            labels.push(parse_label(label_cell).map_err(|d| d.at_line(row))?);
            features.push(values);
        }

        Ok(Dataset { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Parse a class label: an integer, possibly float-formatted.
fn parse_label(cell: &str) -> Result<usize, Diagnostic> {
    let value: f64 = cell
        .parse()
        .map_err(|_| Diagnostic::parse(format!("'{}' is not a class label", cell)))?;
    if value < 0.0 || value.fract() != 0.0 {
        return Err(Diagnostic::parse(format!(
            "'{}' is not a non-negative integer class label",
            cell
        )));
    }
    Ok(value as usize)
}
