//! Expense vs. savings composition (pie chart data)

use serde::{Deserialize, Serialize};

pub const EXPENSE_LABEL: &str = "Pengeluaran";
pub const SAVINGS_LABEL: &str = "Tabungan";

/// One slice of the composition chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub amount: f64,
    /// Share of the chart total, 0–100
    pub percent: f64,
}

/// Two-slice chart: total expense and non-negative savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionChart {
    pub slices: Vec<ChartSlice>,
}

impl CompositionChart {
    pub fn expense(&self) -> &ChartSlice {
        &self.slices[0]
    }

    pub fn savings(&self) -> &ChartSlice {
        &self.slices[1]
    }
}

/// Build the chart from total expense and remaining income
///
/// Negative remaining income (overspending) shows as an empty savings slice.
pub fn composition(total_expense: f64, remaining: f64) -> CompositionChart {
    let savings = remaining.max(0.0);
    let total = total_expense + savings;

    let percent = |amount: f64| {
        if total > 0.0 {
            amount / total * 100.0
        } else {
            0.0
        }
    };

    CompositionChart {
        slices: vec![
            ChartSlice {
                label: EXPENSE_LABEL.to_string(),
                amount: total_expense,
                percent: percent(total_expense),
            },
            ChartSlice {
                label: SAVINGS_LABEL.to_string(),
                amount: savings,
                percent: percent(savings),
            },
        ],
    }
}
