//! Loaded model context
//!
//! Holds both predictors for the lifetime of a session. Built once (from
//! artifacts on disk, or from mocks in tests) and passed explicitly to
//! every evaluation. Immutable after construction, so it can be shared
//! behind an `Arc` without locking.

use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::{Error, Result};
use crate::features::FEATURE_COUNT;
use crate::models::{ClassProbabilities, Status};

use super::{Classifier, ClassifierModel, Regressor, RegressorModel};

/// Which slot a model fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelRole {
    Classifier,
    Regressor,
}

impl ModelRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classifier => "classifier",
            Self::Regressor => "regressor",
        }
    }
}

impl std::fmt::Display for ModelRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Description of a loaded model (for `saku models` and `/api/models`)
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub role: ModelRole,
    pub kind: String,
    pub n_features: usize,
    /// Declared labels (classifier only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// SHA-256 of the artifact file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Position of each status within the classifier's probability output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelIndex {
    wasteful: usize,
    frugal: usize,
}

impl LabelIndex {
    /// Build the index from the classifier's declared labels, which must be exactly {0, 1}
    pub fn from_classes(classes: &[i64]) -> Result<Self> {
        if classes.len() != 2 {
            return Err(Error::ModelLoad(format!(
                "Classifier must declare exactly 2 labels, found {:?}",
                classes
            )));
        }

        let position = |status: Status| {
            classes
                .iter()
                .position(|&label| label == status.class_label())
                .ok_or_else(|| {
                    Error::ModelLoad(format!(
                        "Classifier labels must be {{0, 1}}, found {:?}",
                        classes
                    ))
                })
        };

        Ok(Self {
            wasteful: position(Status::Wasteful)?,
            frugal: position(Status::Frugal)?,
        })
    }

    /// Map raw classifier output onto the fixed status structure
    pub fn probabilities(&self, raw: &[f64]) -> Result<ClassProbabilities> {
        if raw.len() != 2 {
            return Err(Error::ModelInference(format!(
                "Classifier returned {} probabilities, expected 2",
                raw.len()
            )));
        }
        Ok(ClassProbabilities {
            wasteful: raw[self.wasteful],
            frugal: raw[self.frugal],
        })
    }
}

/// Both predictors plus their validated label index
#[derive(Debug, Clone)]
pub struct ModelContext {
    classifier: ClassifierModel,
    regressor: RegressorModel,
    labels: LabelIndex,
    info: Vec<ModelInfo>,
}

impl ModelContext {
    /// Assemble a context from already-constructed models
    ///
    /// Fails fast if the classifier's labels are not exactly {0, 1} or either
    /// model was trained on a different number of features.
    pub fn new(classifier: ClassifierModel, regressor: RegressorModel) -> Result<Self> {
        let labels = LabelIndex::from_classes(classifier.classes())?;

        for (role, n) in [
            (ModelRole::Classifier, classifier.n_features()),
            (ModelRole::Regressor, regressor.n_features()),
        ] {
            if n != FEATURE_COUNT {
                return Err(Error::ModelLoad(format!(
                    "{} expects {} features, but inputs have {}",
                    role, n, FEATURE_COUNT
                )));
            }
        }

        let info = vec![
            ModelInfo {
                role: ModelRole::Classifier,
                kind: classifier.kind().to_string(),
                n_features: classifier.n_features(),
                classes: Some(classifier.classes().to_vec()),
                path: None,
                sha256: None,
            },
            ModelInfo {
                role: ModelRole::Regressor,
                kind: regressor.kind().to_string(),
                n_features: regressor.n_features(),
                classes: None,
                path: None,
                sha256: None,
            },
        ];

        Ok(Self {
            classifier,
            regressor,
            labels,
            info,
        })
    }

    /// Load both artifacts from disk
    pub fn load(classifier_path: impl AsRef<Path>, regressor_path: impl AsRef<Path>) -> Result<Self> {
        let classifier_path = classifier_path.as_ref();
        let regressor_path = regressor_path.as_ref();

        let (classifier_json, classifier_digest) = read_artifact(classifier_path)?;
        let (regressor_json, regressor_digest) = read_artifact(regressor_path)?;

        let classifier = ClassifierModel::from_json(&classifier_json)?;
        let regressor = RegressorModel::from_json(&regressor_json)?;

        let mut ctx = Self::new(classifier, regressor)?;
        let sources = [
            (classifier_path, classifier_digest),
            (regressor_path, regressor_digest),
        ];
        for (meta, (path, digest)) in ctx.info.iter_mut().zip(sources) {
            info!(
                role = %meta.role,
                kind = %meta.kind,
                path = %path.display(),
                sha256 = %digest,
                "Loaded model"
            );
            meta.path = Some(path.to_path_buf());
            meta.sha256 = Some(digest);
        }

        Ok(ctx)
    }

    /// Context backed by mock predictors (for tests)
    pub fn mock(probabilities: [f64; 2], ideal_saving_ratio: f64) -> Self {
        Self::new(
            ClassifierModel::mock(probabilities),
            RegressorModel::mock(ideal_saving_ratio),
        )
        .expect("mock models declare labels {0, 1} and 6 features")
    }

    pub fn classifier(&self) -> &ClassifierModel {
        &self.classifier
    }

    pub fn regressor(&self) -> &RegressorModel {
        &self.regressor
    }

    pub fn labels(&self) -> LabelIndex {
        self.labels
    }

    pub fn info(&self) -> &[ModelInfo] {
        &self.info
    }
}

/// Read an artifact and compute its SHA-256 digest
fn read_artifact(path: &Path) -> Result<(String, String)> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::ModelLoad(format!("Cannot read {}: {}", path.display(), e)))?;
    let digest = hex::encode(Sha256::digest(&bytes));
    let content = String::from_utf8(bytes)
        .map_err(|_| Error::ModelLoad(format!("{} is not valid UTF-8", path.display())))?;
    Ok((content, digest))
}
