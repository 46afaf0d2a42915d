use rayon::prelude::*;
use statrs::function::logistic::logistic;

use crate::diagnostic::Diagnostic;

/// Clamp bound for the logistic argument. `exp(709)` is the largest
/// finite double exponential; the logistic saturates to 0 or 1 long
/// before the bound, so clamping never changes a rounded probability.
const LOGISTIC_CLAMP: f64 = 709.0;

/// One class's binary logistic model.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearModel {
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Probability in (0, 1) that `x` belongs to this model's class:
    /// `logistic(dot(x, weights) + bias)`.
    pub fn score(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.weights.len());
        let z: f64 = self
            .weights
            .iter()
            .zip(x)
            .map(|(w, xi)| w * xi)
            .sum::<f64>()
            + self.bias;
        logistic(z.clamp(-LOGISTIC_CLAMP, LOGISTIC_CLAMP))
    }
}

/// An ordered set of one-vs-rest models, index = zero-based class label.
///
/// Built once from a decoded parameter stream and read-only thereafter.
#[derive(Clone, Debug)]
pub struct MultiClassModel {
    models: Vec<LinearModel>,
}

impl MultiClassModel {
    pub fn new(models: Vec<LinearModel>) -> Self {
        Self { models }
    }

    /// Reconstruct per-class models from a decoded parameter stream.
    ///
    /// The stream is class-major: for each class, `features` weights then
    /// one bias. Exactly `classes * (features + 1)` entries are required.
    pub fn from_params(
        params: &[f64],
        features: usize,
        classes: usize,
    ) -> Result<Self, Diagnostic> {
        if classes == 0 {
            return Err(Diagnostic::format(
                "class count must be at least one".to_string(),
            ));
        }
        let stride = features + 1;
        let expected = classes * stride;
        if params.len() != expected {
            return Err(Diagnostic::format(format!(
                "parameter stream has {} entries, expected {} for {} classes with {} features",
                params.len(),
                expected,
                classes,
                features
            ))
            .with_help("each class contributes its weights followed by one bias".to_string()));
        }

        let models = params
            .chunks_exact(stride)
            .map(|chunk| LinearModel::new(chunk[..features].to_vec(), chunk[features]))
            .collect();
        Ok(Self { models })
    }

    pub fn models(&self) -> &[LinearModel] {
        &self.models
    }

    pub fn num_classes(&self) -> usize {
        self.models.len()
    }

    /// Predicted class for one sample: arg-max over per-class scores.
    ///
    /// The scan uses strict `>`, so exact ties resolve to the lowest
    /// class index, deterministically. That tie-break is a contract the
    /// circuit side relies on, not an incidental detail.
    pub fn predict_row(&self, x: &[f64]) -> usize {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, model) in self.models.iter().enumerate() {
            let score = model.score(x);
            if score > best_score {
                best = idx;
                best_score = score;
            }
        }
        best
    }

    /// Predicted classes for a batch of samples.
    ///
    /// Rows are independent, so they score in parallel; the output order
    /// matches the input row order.
    pub fn predict(&self, samples: &[Vec<f64>]) -> Vec<usize> {
        samples
            .par_iter()
            .map(|x| self.predict_row(x))
            .collect()
    }
}

/// Fraction of positions where `predicted` and `actual` agree.
pub fn accuracy(predicted: &[usize], actual: &[usize]) -> Result<f64, Diagnostic> {
    if predicted.len() != actual.len() {
        return Err(Diagnostic::shape(format!(
            "predicted {} labels but {} ground-truth labels were given",
            predicted.len(),
            actual.len()
        )));
    }
    if predicted.is_empty() {
        return Ok(0.0);
    }
    let matches = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    Ok(matches as f64 / predicted.len() as f64)
}
