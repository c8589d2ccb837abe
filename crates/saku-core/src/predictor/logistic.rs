//! Binary logistic regression
//!
//! Follows the usual binary convention: the linear score is the log-odds of
//! the second declared class, so `p(classes[1]) = sigmoid(w·x + b)`.

use serde::Deserialize;

use crate::error::{Error, Result};

use super::{check_input_len, Classifier};

/// Logistic regression weights as exported from training
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    classes: Vec<i64>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(classes: Vec<i64>, coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self {
            classes,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Structural checks run once at load time
    pub(crate) fn validate(&self) -> Result<()> {
        if self.classes.len() != 2 {
            return Err(Error::ModelLoad(format!(
                "Logistic regression must declare exactly 2 classes, found {}",
                self.classes.len()
            )));
        }
        if self.coefficients.is_empty() {
            return Err(Error::ModelLoad(
                "Logistic regression has no coefficients".to_string(),
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::ModelLoad(
                "Logistic regression weights must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Linear score (log-odds of the second class)
    fn decision_function(&self, features: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

/// Logistic function without overflow for large |z|
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticRegression {
    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        check_input_len(self.kind(), self.n_features(), features)?;

        let positive = sigmoid(self.decision_function(features));
        Ok(vec![1.0 - positive, positive])
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}
