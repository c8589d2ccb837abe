//! Mock predictors for testing
//!
//! Return fixed outputs and count how often they are called, so tests can
//! check that invalid input never reaches the models.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::features::FEATURE_COUNT;

use super::{check_input_len, Classifier, Regressor};

/// Mock classifier with a fixed probability output
#[derive(Debug, Clone)]
pub struct MockClassifier {
    /// Declared class labels
    pub classes: Vec<i64>,
    /// Returned verbatim by `predict_proba`
    pub probabilities: Vec<f64>,
    /// Whether `predict_proba` should fail
    pub failing: bool,
    calls: Arc<AtomicUsize>,
}

impl MockClassifier {
    /// Classes `[0, 1]` with the given probabilities
    pub fn new(probabilities: [f64; 2]) -> Self {
        Self {
            classes: vec![0, 1],
            probabilities: probabilities.to_vec(),
            failing: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A classifier whose every prediction fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new([0.5, 0.5])
        }
    }

    pub fn with_classes(mut self, classes: Vec<i64>) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_probabilities(mut self, probabilities: Vec<f64>) -> Self {
        self.probabilities = probabilities;
        self
    }

    /// Number of `predict_proba` calls so far (shared across clones)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for MockClassifier {
    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        check_input_len(self.kind(), FEATURE_COUNT, features)?;
        if self.failing {
            return Err(Error::ModelInference("mock classifier failure".to_string()));
        }
        Ok(self.probabilities.clone())
    }

    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn kind(&self) -> &'static str {
        "mock"
    }
}

/// Mock regressor with a fixed output
#[derive(Debug, Clone)]
pub struct MockRegressor {
    /// Returned verbatim by `predict`
    pub value: f64,
    calls: Arc<AtomicUsize>,
}

impl MockRegressor {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `predict` calls so far (shared across clones)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Regressor for MockRegressor {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        check_input_len(self.kind(), FEATURE_COUNT, features)?;
        Ok(self.value)
    }

    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn kind(&self) -> &'static str {
        "mock"
    }
}
