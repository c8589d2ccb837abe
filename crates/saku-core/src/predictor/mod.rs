//! Pluggable pre-trained predictors
//!
//! This module provides a backend-agnostic interface for the two models
//! Saku evaluates on every request.
//!
//! # Architecture
//!
//! - `Classifier` / `Regressor` traits: the interface each model role exposes
//! - `ClassifierModel` / `RegressorModel` enums: concrete wrappers providing
//!   Clone + compile-time dispatch
//! - Backend implementations: `LogisticRegression`, `RandomForest`, and mocks
//! - `ModelContext`: both models plus the validated label index, constructed
//!   once and injected wherever evaluation happens
//!
//! # Usage
//!
//! ```rust,ignore
//! let models = ModelContext::load("models/logistic_model.json", "models/random_forest.json")?;
//! let probabilities = models.classifier().predict_proba(features.as_slice())?;
//! ```
//!
//! # Artifact format
//!
//! Artifacts are JSON documents tagged by `kind`:
//! - `logistic_regression`: `classes`, `coefficients`, `intercept`
//! - `random_forest`: `n_features` and a list of flattened `trees`

mod context;
mod forest;
mod logistic;
mod mock;

pub use context::{LabelIndex, ModelContext, ModelInfo, ModelRole};
pub use forest::{DecisionTree, RandomForest};
pub use logistic::LogisticRegression;
pub use mock::{MockClassifier, MockRegressor};

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Binary probabilistic classifier
pub trait Classifier: Send + Sync {
    /// Declared class labels, in the order `predict_proba` reports them
    fn classes(&self) -> &[i64];

    /// Per-class probabilities for one feature vector
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>>;

    /// Number of features the model was trained on
    fn n_features(&self) -> usize;

    /// Model family name (for logging)
    fn kind(&self) -> &'static str;
}

/// Scalar regressor
pub trait Regressor: Send + Sync {
    /// Predict a single value for one feature vector
    fn predict(&self, features: &[f64]) -> Result<f64>;

    /// Number of features the model was trained on
    fn n_features(&self) -> usize;

    /// Model family name (for logging)
    fn kind(&self) -> &'static str;
}

/// Reject feature vectors of the wrong length before inference
pub(crate) fn check_input_len(kind: &str, expected: usize, features: &[f64]) -> Result<()> {
    if features.len() != expected {
        return Err(Error::ModelInference(format!(
            "{} expects {} features, got {}",
            kind,
            expected,
            features.len()
        )));
    }
    Ok(())
}

/// Serialized classifier artifacts
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ClassifierArtifact {
    LogisticRegression(LogisticRegression),
}

/// Serialized regressor artifacts
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RegressorArtifact {
    RandomForest(RandomForest),
}

/// Concrete classifier enum
#[derive(Debug, Clone)]
pub enum ClassifierModel {
    /// Logistic regression loaded from a JSON artifact
    Logistic(LogisticRegression),
    /// Mock classifier for testing
    Mock(MockClassifier),
}

impl ClassifierModel {
    /// Parse and validate a classifier artifact
    pub fn from_json(content: &str) -> Result<Self> {
        let artifact: ClassifierArtifact = serde_json::from_str(content)
            .map_err(|e| Error::ModelLoad(format!("Invalid classifier artifact: {}", e)))?;

        match artifact {
            ClassifierArtifact::LogisticRegression(model) => {
                model.validate()?;
                Ok(ClassifierModel::Logistic(model))
            }
        }
    }

    /// Read a classifier artifact from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ModelLoad(format!("Cannot read classifier {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Create a mock classifier for testing
    pub fn mock(probabilities: [f64; 2]) -> Self {
        ClassifierModel::Mock(MockClassifier::new(probabilities))
    }
}

impl Classifier for ClassifierModel {
    fn classes(&self) -> &[i64] {
        match self {
            ClassifierModel::Logistic(m) => m.classes(),
            ClassifierModel::Mock(m) => m.classes(),
        }
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        match self {
            ClassifierModel::Logistic(m) => m.predict_proba(features),
            ClassifierModel::Mock(m) => m.predict_proba(features),
        }
    }

    fn n_features(&self) -> usize {
        match self {
            ClassifierModel::Logistic(m) => m.n_features(),
            ClassifierModel::Mock(m) => m.n_features(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ClassifierModel::Logistic(m) => m.kind(),
            ClassifierModel::Mock(m) => m.kind(),
        }
    }
}

/// Concrete regressor enum
#[derive(Debug, Clone)]
pub enum RegressorModel {
    /// Random forest loaded from a JSON artifact
    Forest(RandomForest),
    /// Mock regressor for testing
    Mock(MockRegressor),
}

impl RegressorModel {
    /// Parse and validate a regressor artifact
    pub fn from_json(content: &str) -> Result<Self> {
        let artifact: RegressorArtifact = serde_json::from_str(content)
            .map_err(|e| Error::ModelLoad(format!("Invalid regressor artifact: {}", e)))?;

        match artifact {
            RegressorArtifact::RandomForest(model) => {
                model.validate()?;
                Ok(RegressorModel::Forest(model))
            }
        }
    }

    /// Read a regressor artifact from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ModelLoad(format!("Cannot read regressor {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Create a mock regressor for testing
    pub fn mock(value: f64) -> Self {
        RegressorModel::Mock(MockRegressor::new(value))
    }
}

impl Regressor for RegressorModel {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        match self {
            RegressorModel::Forest(m) => m.predict(features),
            RegressorModel::Mock(m) => m.predict(features),
        }
    }

    fn n_features(&self) -> usize {
        match self {
            RegressorModel::Forest(m) => m.n_features(),
            RegressorModel::Mock(m) => m.n_features(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            RegressorModel::Forest(m) => m.kind(),
            RegressorModel::Mock(m) => m.kind(),
        }
    }
}
