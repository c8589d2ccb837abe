//! Decision engine
//!
//! Runs both predictors on a feature vector and turns their outputs into a
//! status, an ideal saving ratio and the savings gap.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::features::FeatureVector;
use crate::models::PredictionResult;
use crate::predictor::{Classifier, ModelContext, Regressor};

/// Allowed drift of the probability sum from 1
const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Output of one engine run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub prediction: PredictionResult,
    /// Ideal saving ratio minus the raw saving ratio (may be negative)
    pub gap_ratio: f64,
    /// Shortfall in currency units, never negative
    pub gap_amount: f64,
}

/// Evaluate a feature vector against both models
///
/// Any malformed model output fails the whole evaluation with
/// `ModelInference`; no partial result is returned.
pub fn evaluate(features: &FeatureVector, income: f64, models: &ModelContext) -> Result<Evaluation> {
    let raw = models.classifier().predict_proba(features.as_slice())?;
    check_probabilities(&raw)?;
    let probabilities = models.labels().probabilities(&raw)?;
    let status = probabilities.argmax();

    let raw_ideal = models.regressor().predict(features.as_slice())?;
    if !raw_ideal.is_finite() {
        return Err(Error::ModelInference(format!(
            "Regressor returned a non-finite value: {}",
            raw_ideal
        )));
    }
    let ideal_saving_ratio = raw_ideal.clamp(0.0, 1.0);
    if ideal_saving_ratio != raw_ideal {
        warn!(raw = raw_ideal, "Regressor output outside [0, 1], clamped");
    }

    let gap_ratio = ideal_saving_ratio - features.saving_ratio_raw();
    let gap_amount = (gap_ratio * income).max(0.0);

    debug!(
        status = %status,
        wasteful = probabilities.wasteful,
        frugal = probabilities.frugal,
        ideal_saving_ratio,
        gap_ratio,
        gap_amount,
        "Evaluated models"
    );

    Ok(Evaluation {
        prediction: PredictionResult {
            status,
            probabilities,
            ideal_saving_ratio,
        },
        gap_ratio,
        gap_amount,
    })
}

/// Probabilities must be finite, within [0, 1], and sum to 1
fn check_probabilities(raw: &[f64]) -> Result<()> {
    if raw.iter().any(|p| !p.is_finite() || *p < 0.0 || *p > 1.0) {
        return Err(Error::ModelInference(format!(
            "Classifier returned invalid probabilities: {:?}",
            raw
        )));
    }
    let sum: f64 = raw.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(Error::ModelInference(format!(
            "Classifier probabilities sum to {}, expected 1",
            sum
        )));
    }
    Ok(())
}
