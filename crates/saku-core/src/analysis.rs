//! Full analysis of one financial input
//!
//! Ties the pieces together in order: validate and derive features, run the
//! decision engine, allocate reductions, build the composition chart.
//! Income is checked before either model is touched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allocator::{allocate, DEFAULT_MIN_CUT};
use crate::composition::{composition, CompositionChart};
use crate::engine::evaluate;
use crate::error::Result;
use crate::features::{derive_features, FeatureVector};
use crate::models::{FinancialInput, PredictionResult, RecommendationPlan};
use crate::predictor::ModelContext;
use crate::settings::Settings;

/// Everything produced by one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub input: FinancialInput,
    pub total_expense: f64,
    /// Income minus total expense (negative when overspending)
    pub remaining: f64,
    /// Unclamped saving ratio, as fed to the models
    pub saving_ratio_raw: f64,
    /// Saving ratio clamped to [0, 1]
    pub saving_ratio: f64,
    pub features: FeatureVector,
    pub prediction: PredictionResult,
    pub gap_ratio: f64,
    pub gap_amount: f64,
    pub plan: RecommendationPlan,
    pub composition: CompositionChart,
}

/// Runs analyses against an injected model context
pub struct Analyzer<'a> {
    models: &'a ModelContext,
    min_cut: f64,
}

impl<'a> Analyzer<'a> {
    pub fn new(models: &'a ModelContext) -> Self {
        Self {
            models,
            min_cut: DEFAULT_MIN_CUT,
        }
    }

    /// Analyzer using the thresholds from settings
    pub fn with_settings(models: &'a ModelContext, settings: &Settings) -> Self {
        Self::new(models).with_min_cut(settings.min_cut)
    }

    pub fn with_min_cut(mut self, min_cut: f64) -> Self {
        self.min_cut = min_cut;
        self
    }

    pub fn analyze(&self, input: &FinancialInput) -> Result<Analysis> {
        let features = derive_features(input)?;
        let total_expense = input.total_expense();
        let remaining = input.remaining();

        debug!(
            income = input.income,
            total_expense,
            saving_ratio_raw = features.saving_ratio_raw(),
            "Derived features"
        );

        let evaluation = evaluate(&features, input.income, self.models)?;

        let plan = allocate(
            &input.categories(),
            evaluation.prediction.status,
            evaluation.gap_amount,
            self.min_cut,
        );

        Ok(Analysis {
            input: *input,
            total_expense,
            remaining,
            saving_ratio_raw: features.saving_ratio_raw(),
            saving_ratio: features.saving_ratio_display(),
            features,
            prediction: evaluation.prediction,
            gap_ratio: evaluation.gap_ratio,
            gap_amount: evaluation.gap_amount,
            plan,
            composition: composition(total_expense, remaining),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Category, Status};
    use crate::predictor::{ClassifierModel, MockClassifier, MockRegressor, RegressorModel};

    fn sample_input() -> FinancialInput {
        FinancialInput {
            income: 5_000_000.0,
            food: 1_000_000.0,
            transport: 500_000.0,
            entertainment: 500_000.0,
            shopping: 500_000.0,
            others: 500_000.0,
        }
    }

    #[test]
    fn test_sample_scenario_totals() {
        let models = ModelContext::mock([0.3, 0.7], 0.3);
        let analysis = Analyzer::new(&models).analyze(&sample_input()).unwrap();

        assert_eq!(analysis.total_expense, 3_000_000.0);
        assert_eq!(analysis.remaining, 2_000_000.0);
        assert!((analysis.saving_ratio_raw - 0.4).abs() < 1e-12);
        assert_eq!(analysis.prediction.status, Status::Frugal);
        assert_eq!(analysis.plan, RecommendationPlan::NoReductionNeeded);
    }

    #[test]
    fn test_wasteful_scenario_builds_plan() {
        let models = ModelContext::mock([0.8, 0.2], 0.6);
        let analysis = Analyzer::new(&models).analyze(&sample_input()).unwrap();

        // gap = (0.6 - 0.4) * 5,000,000
        assert!((analysis.gap_amount - 1_000_000.0).abs() < 1e-6);
        let items = analysis.plan.items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].category, Category::Food);
        let total_cut: f64 = items.iter().map(|r| r.suggested_cut).sum();
        assert!((total_cut - 1_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_expenses_plan_empty_regardless_of_status() {
        for probabilities in [[0.9, 0.1], [0.1, 0.9]] {
            let models = ModelContext::mock(probabilities, 0.5);
            let analysis = Analyzer::new(&models)
                .analyze(&FinancialInput::new(1_000_000.0))
                .unwrap();

            assert_eq!(analysis.total_expense, 0.0);
            assert_eq!(analysis.saving_ratio_raw, 1.0);
            assert!(analysis.plan.is_empty());
        }
    }

    #[test]
    fn test_zero_income_never_invokes_models() {
        let classifier = MockClassifier::new([0.5, 0.5]);
        let regressor = MockRegressor::new(0.2);
        let models = ModelContext::new(
            ClassifierModel::Mock(classifier.clone()),
            RegressorModel::Mock(regressor.clone()),
        )
        .unwrap();

        let result = Analyzer::new(&models).analyze(&FinancialInput::new(0.0));

        assert!(matches!(result, Err(Error::InvalidIncome(_))));
        assert_eq!(classifier.calls(), 0);
        assert_eq!(regressor.calls(), 0);
    }

    #[test]
    fn test_min_cut_from_settings() {
        let models = ModelContext::mock([0.8, 0.2], 0.6);
        let settings = Settings {
            min_cut: 300_000.0,
            ..Default::default()
        };
        let analysis = Analyzer::with_settings(&models, &settings)
            .analyze(&sample_input())
            .unwrap();

        // Only food (1/3 of 1,000,000) clears the higher threshold
        assert_eq!(analysis.plan.items().len(), 1);
    }

    #[test]
    fn test_overspending_composition() {
        let models = ModelContext::mock([0.9, 0.1], 0.2);
        let input = FinancialInput::new(1_000_000.0).with_expense(Category::Shopping, 1_200_000.0);
        let analysis = Analyzer::new(&models).analyze(&input).unwrap();

        assert_eq!(analysis.remaining, -200_000.0);
        assert_eq!(analysis.saving_ratio, 0.0);
        assert_eq!(analysis.composition.savings().amount, 0.0);
        // gap = (0.2 - (-0.2)) * 1,000,000
        assert!((analysis.gap_amount - 400_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_repeated_analysis_is_identical() {
        let models = ModelContext::mock([0.55, 0.45], 0.35);
        let analyzer = Analyzer::new(&models);

        let first = analyzer.analyze(&sample_input()).unwrap();
        let second = analyzer.analyze(&sample_input()).unwrap();
        assert_eq!(first, second);
    }
}
