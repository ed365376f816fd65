//! Multinomial (softmax) logistic regression.
//!
//! Minimizes mean cross-entropy plus an L2 penalty of `||W||^2 / (2 * C * n)`
//! with full-batch gradient descent from a zero start. Intercepts are not
//! penalized. There is no random state, so fitting is deterministic.

use common::models::Label;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::error::PipelineError;

/// Unfitted classifier settings.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// Inverse regularization strength
    c: f64,
    learning_rate: f64,
    max_iter: usize,
    /// Stop once every gradient component is below this
    tolerance: f64,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1000, 1e-6)
    }
}

impl LogisticRegression {
    pub fn new(c: f64, learning_rate: f64, max_iter: usize, tolerance: f64) -> Self {
        Self {
            c,
            learning_rate,
            max_iter,
            tolerance,
        }
    }

    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fits one weight row per distinct label in `y`, classes in label order.
    pub fn fit(
        &self,
        x: &Array2<f64>,
        y: &[Label],
    ) -> Result<FittedLogisticRegression, PipelineError> {
        if x.nrows() != y.len() {
            return Err(PipelineError::DimensionMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }

        let classes: Vec<Label> = y.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        match classes.as_slice() {
            [] => return Err(PipelineError::EmptyCorpus),
            [only] => return Err(PipelineError::SingleClass(*only)),
            _ => {}
        }

        let n_samples = x.nrows();
        let n_features = x.ncols();
        let n_classes = classes.len();
        let n = n_samples as f64;

        let mut y_onehot = Array2::<f64>::zeros((n_samples, n_classes));
        for (i, label) in y.iter().enumerate() {
            if let Ok(class) = classes.binary_search(label) {
                y_onehot[[i, class]] = 1.0;
            }
        }

        let mut weights = Array2::<f64>::zeros((n_classes, n_features));
        let mut intercepts = Array1::<f64>::zeros(n_classes);
        let mut loss = f64::INFINITY;
        let mut n_iter = self.max_iter;

        for iter in 0..self.max_iter {
            let proba = softmax_rows(x.dot(&weights.t()) + &intercepts);
            loss = self.loss(&proba, &y_onehot, &weights);

            let errors = &proba - &y_onehot;
            let grad_w = errors.t().dot(x) / n + &weights / (self.c * n);
            let grad_b = errors.sum_axis(Axis(0)) / n;

            let max_grad = grad_w
                .iter()
                .chain(grad_b.iter())
                .fold(0.0_f64, |acc, g| acc.max(g.abs()));

            if max_grad < self.tolerance {
                n_iter = iter;
                break;
            }

            weights.scaled_add(-self.learning_rate, &grad_w);
            intercepts.scaled_add(-self.learning_rate, &grad_b);
        }

        if n_iter == self.max_iter {
            let proba = softmax_rows(x.dot(&weights.t()) + &intercepts);
            loss = self.loss(&proba, &y_onehot, &weights);
            warn!(
                "Logistic regression did not converge in {} iterations (loss {:.6})",
                self.max_iter, loss
            );
        } else {
            debug!("Logistic regression converged after {} iterations (loss {:.6})", n_iter, loss);
        }

        Ok(FittedLogisticRegression {
            classes,
            coefficients: weights,
            intercepts,
            n_iter,
            loss,
        })
    }

    fn loss(&self, proba: &Array2<f64>, y_onehot: &Array2<f64>, weights: &Array2<f64>) -> f64 {
        let eps = 1e-15;
        let n = proba.nrows() as f64;

        let cross_entropy: f64 = proba
            .iter()
            .zip(y_onehot.iter())
            .filter(|pair| *pair.1 > 0.0)
            .map(|(p, _)| -p.max(eps).ln())
            .sum();
        let penalty = weights.iter().map(|w| w * w).sum::<f64>() / (2.0 * self.c * n);

        cross_entropy / n + penalty
    }
}

/// Learned coefficients. Read-only after [`LogisticRegression::fit`].
#[derive(Debug, Clone)]
pub struct FittedLogisticRegression {
    classes: Vec<Label>,
    /// n_classes x n_features
    coefficients: Array2<f64>,
    intercepts: Array1<f64>,
    n_iter: usize,
    loss: f64,
}

impl FittedLogisticRegression {
    pub fn decision_function(&self, x: ArrayView1<f64>) -> Array1<f64> {
        self.coefficients.dot(&x) + &self.intercepts
    }

    /// Class probabilities, aligned with [`Self::classes`].
    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Array1<f64> {
        let scores = self.decision_function(x).insert_axis(Axis(0));
        softmax_rows(scores).index_axis_move(Axis(0), 0)
    }

    /// Highest-scoring class; ties go to the earliest class.
    pub fn predict(&self, x: ArrayView1<f64>) -> Label {
        let scores = self.decision_function(x);
        let mut best = 0;
        for (idx, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = idx;
            }
        }
        self.classes[best]
    }

    pub fn classes(&self) -> &[Label] {
        &self.classes
    }

    pub fn coefficients(&self) -> &Array2<f64> {
        &self.coefficients
    }

    pub fn intercepts(&self) -> &Array1<f64> {
        &self.intercepts
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    pub fn loss(&self) -> f64 {
        self.loss
    }
}

fn softmax_rows(mut scores: Array2<f64>) -> Array2<f64> {
    for mut row in scores.rows_mut() {
        let max = row.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row /= sum;
    }
    scores
}
