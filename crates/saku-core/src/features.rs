//! Feature derivation
//!
//! Turns a [`FinancialInput`] into the 6-element ratio vector both models
//! were trained on:
//!
//! `[food, transport, entertainment, shopping, others] / income` followed by
//! the raw (unclamped) saving ratio.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Category, FinancialInput};

/// Number of features expected by both models
pub const FEATURE_COUNT: usize = 6;

/// Index of the raw saving ratio within the vector
pub const SAVING_RATIO_INDEX: usize = 5;

/// Ordered model input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Spending ratio for a single category
    pub fn ratio(&self, category: Category) -> f64 {
        let index = match category {
            Category::Food => 0,
            Category::Transport => 1,
            Category::Entertainment => 2,
            Category::Shopping => 3,
            Category::Others => 4,
        };
        self.0[index]
    }

    /// (income - total expense) / income, not clamped
    pub fn saving_ratio_raw(&self) -> f64 {
        self.0[SAVING_RATIO_INDEX]
    }

    /// Saving ratio clamped to [0, 1] for display
    pub fn saving_ratio_display(&self) -> f64 {
        self.saving_ratio_raw().clamp(0.0, 1.0)
    }

    /// Sum of the five category ratios (total expense / income)
    pub fn expense_ratio(&self) -> f64 {
        self.0[..SAVING_RATIO_INDEX].iter().sum()
    }
}

/// Derive the feature vector for an input
///
/// Fails with `InvalidIncome` when income is not positive, and with
/// `InvalidInput` for negative or non-finite expenses.
pub fn derive_features(input: &FinancialInput) -> Result<FeatureVector> {
    input.validate()?;

    let income = input.income;
    let mut values = [0.0; FEATURE_COUNT];
    for (i, (_, amount)) in input.categories().iter().enumerate() {
        values[i] = amount / income;
    }
    values[SAVING_RATIO_INDEX] = input.remaining() / income;

    Ok(FeatureVector(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

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
    fn test_derive_features_sample() {
        let features = derive_features(&sample_input()).unwrap();

        assert!((features.ratio(Category::Food) - 0.2).abs() < 1e-12);
        assert!((features.ratio(Category::Others) - 0.1).abs() < 1e-12);
        assert!((features.saving_ratio_raw() - 0.4).abs() < 1e-12);
        assert_eq!(features.as_slice().len(), FEATURE_COUNT);
    }

    #[test]
    fn test_ratio_matches_category_slot() {
        let input = FinancialInput::new(1_000.0)
            .with_expense(Category::Food, 10.0)
            .with_expense(Category::Transport, 20.0)
            .with_expense(Category::Entertainment, 30.0)
            .with_expense(Category::Shopping, 40.0)
            .with_expense(Category::Others, 50.0);
        let features = derive_features(&input).unwrap();

        for (slot, category) in Category::ALL.iter().enumerate() {
            assert_eq!(features.ratio(*category), features.as_slice()[slot]);
            assert!((features.ratio(*category) - input.expense(*category) / 1_000.0).abs() < 1e-12);
        }
        assert!((features.ratio(Category::Shopping) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_ratios_and_saving_ratio_sum_to_one() {
        let inputs = [
            sample_input(),
            FinancialInput::new(1_000_000.0),
            FinancialInput::new(2_500_000.0)
                .with_expense(Category::Shopping, 4_000_000.0)
                .with_expense(Category::Food, 123_456.0),
            FinancialInput::new(7.0).with_expense(Category::Transport, 3.0),
        ];

        for input in inputs {
            let features = derive_features(&input).unwrap();
            let expected = input.total_expense() / input.income;
            assert!((features.expense_ratio() - expected).abs() < 1e-9);
            assert!((features.saving_ratio_raw() + features.expense_ratio() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_overspending_keeps_raw_ratio_negative() {
        let input = FinancialInput::new(1_000_000.0).with_expense(Category::Shopping, 1_500_000.0);
        let features = derive_features(&input).unwrap();

        assert!((features.saving_ratio_raw() + 0.5).abs() < 1e-12);
        assert_eq!(features.saving_ratio_display(), 0.0);
    }

    #[test]
    fn test_zero_expenses() {
        let features = derive_features(&FinancialInput::new(1_000_000.0)).unwrap();
        assert_eq!(features.saving_ratio_raw(), 1.0);
        assert_eq!(features.expense_ratio(), 0.0);
    }

    #[test]
    fn test_zero_income_rejected() {
        let result = derive_features(&FinancialInput::new(0.0));
        assert!(matches!(result, Err(Error::InvalidIncome(_))));
    }

    #[test]
    fn test_negative_expense_rejected() {
        let input = FinancialInput::new(1_000.0).with_expense(Category::Food, -1.0);
        let result = derive_features(&input);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_nan_income_rejected() {
        let result = derive_features(&FinancialInput::new(f64::NAN));
        assert!(matches!(result, Err(Error::InvalidIncome(_))));
    }
}
