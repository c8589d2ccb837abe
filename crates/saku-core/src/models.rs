//! Domain models for Saku

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Expense categories entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    /// Entered as "others" but presented as rent
    Others,
}

impl Category {
    /// All categories in feature-vector order
    pub const ALL: [Category; 5] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Shopping,
        Self::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Others => "others",
        }
    }

    /// Display label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Makan & Minum",
            Self::Transport => "Transportasi",
            Self::Entertainment => "Hiburan",
            Self::Shopping => "Belanja",
            Self::Others => "Sewa",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Monthly income and expenses for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialInput {
    pub income: f64,
    #[serde(default)]
    pub food: f64,
    #[serde(default)]
    pub transport: f64,
    #[serde(default)]
    pub entertainment: f64,
    #[serde(default)]
    pub shopping: f64,
    #[serde(default)]
    pub others: f64,
}

impl FinancialInput {
    /// Create an input with the given income and no expenses
    pub fn new(income: f64) -> Self {
        Self {
            income,
            ..Default::default()
        }
    }

    /// Builder-style setter for a single category
    pub fn with_expense(mut self, category: Category, amount: f64) -> Self {
        match category {
            Category::Food => self.food = amount,
            Category::Transport => self.transport = amount,
            Category::Entertainment => self.entertainment = amount,
            Category::Shopping => self.shopping = amount,
            Category::Others => self.others = amount,
        }
        self
    }

    pub fn expense(&self, category: Category) -> f64 {
        match category {
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Entertainment => self.entertainment,
            Category::Shopping => self.shopping,
            Category::Others => self.others,
        }
    }

    /// Category amounts in fixed category order
    pub fn categories(&self) -> [(Category, f64); 5] {
        Category::ALL.map(|c| (c, self.expense(c)))
    }

    pub fn total_expense(&self) -> f64 {
        self.categories().iter().map(|(_, amount)| amount).sum()
    }

    /// Income left after expenses (may be negative)
    pub fn remaining(&self) -> f64 {
        self.income - self.total_expense()
    }

    /// Reject negative or non-finite amounts, and income that is not positive
    pub fn validate(&self) -> Result<()> {
        if !self.income.is_finite() || self.income <= 0.0 {
            return Err(Error::InvalidIncome(self.income));
        }
        for (category, amount) in self.categories() {
            if !amount.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "{} must be a finite amount",
                    category.as_str()
                )));
            }
            if amount < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "{} cannot be negative (got {})",
                    category.as_str(),
                    amount
                )));
            }
        }
        Ok(())
    }
}

/// Financial health classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Class label 0
    Wasteful,
    /// Class label 1
    Frugal,
}

impl Status {
    /// Numeric class label used by the classifier
    pub fn class_label(&self) -> i64 {
        match self {
            Self::Wasteful => 0,
            Self::Frugal => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wasteful => "wasteful",
            Self::Frugal => "frugal",
        }
    }

    /// Display label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wasteful => "BOROS",
            Self::Frugal => "HEMAT",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Probability of each status, indexed statically rather than by label lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub wasteful: f64,
    pub frugal: f64,
}

impl ClassProbabilities {
    pub fn get(&self, status: Status) -> f64 {
        match status {
            Status::Wasteful => self.wasteful,
            Status::Frugal => self.frugal,
        }
    }

    /// Most likely status; an exact tie goes to the lower label (wasteful)
    pub fn argmax(&self) -> Status {
        if self.frugal > self.wasteful {
            Status::Frugal
        } else {
            Status::Wasteful
        }
    }
}

/// Combined output of both predictors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub status: Status,
    pub probabilities: ClassProbabilities,
    /// Regressor output clamped to [0, 1]
    pub ideal_saving_ratio: f64,
}

/// One line of a reduction plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    /// Current amount spent in the category
    pub amount: f64,
    /// Share of total expenses
    pub proportion: f64,
    pub suggested_cut: f64,
}

/// Suggested expense reductions for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecommendationPlan {
    /// Cut `target` in total, spread across `items` (largest category first)
    Reduce {
        target: f64,
        items: Vec<Recommendation>,
    },
    /// Frugal, or already saving at least the ideal ratio
    NoReductionNeeded,
}

impl RecommendationPlan {
    /// Recommendation lines (empty when no reduction is needed)
    pub fn items(&self) -> &[Recommendation] {
        match self {
            Self::Reduce { items, .. } => items,
            Self::NoReductionNeeded => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}
