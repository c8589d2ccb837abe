//! Saku Core Library
//!
//! Shared functionality for the Saku financial health estimator:
//! - Feature derivation from monthly income and expenses
//! - Pluggable pre-trained predictors (logistic regression, random forest)
//! - Decision engine (frugal/wasteful status, ideal saving ratio, savings gap)
//! - Proportional expense-reduction recommendations
//! - Composition chart data and display formatting
//! - Layered settings (explicit file, user override, embedded default)

pub mod allocator;
pub mod analysis;
pub mod composition;
pub mod engine;
pub mod error;
pub mod features;
pub mod format;
pub mod models;
pub mod predictor;
pub mod settings;

pub use allocator::{allocate, proportions, DEFAULT_MIN_CUT};
pub use analysis::{Analysis, Analyzer};
pub use composition::{composition, ChartSlice, CompositionChart};
pub use engine::{evaluate, Evaluation};
pub use error::{Error, Result};
pub use features::{derive_features, FeatureVector, FEATURE_COUNT};
pub use models::{
    Category, ClassProbabilities, FinancialInput, PredictionResult, Recommendation,
    RecommendationPlan, Status,
};
pub use predictor::{
    Classifier, ClassifierModel, LabelIndex, ModelContext, ModelInfo, ModelRole, Regressor,
    RegressorModel,
};
pub use settings::Settings;
