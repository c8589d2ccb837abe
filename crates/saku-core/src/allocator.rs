//! Recommendation allocator
//!
//! Spreads the savings gap across expense categories in proportion to how
//! much each one currently costs, largest category first.

use tracing::warn;

use crate::error::{Error, Result};
use crate::models::{Category, Recommendation, RecommendationPlan, Status};

/// Cuts below this amount are not worth suggesting
pub const DEFAULT_MIN_CUT: f64 = 10_000.0;

/// Share of the total for each category, in the order given
///
/// Fails with `DegenerateAllocation` when the amounts sum to zero.
pub fn proportions(categories: &[(Category, f64)]) -> Result<Vec<(Category, f64)>> {
    let total: f64 = categories.iter().map(|(_, amount)| amount).sum();
    if total <= 0.0 {
        return Err(Error::DegenerateAllocation);
    }
    Ok(categories
        .iter()
        .map(|&(category, amount)| (category, amount / total))
        .collect())
}

/// Build a reduction plan for the given status and gap
///
/// Frugal results, or a gap that is already closed, need no reduction.
/// When every category is zero there is nothing to cut from, so the plan is
/// a reduction with no items.
pub fn allocate(
    categories: &[(Category, f64)],
    status: Status,
    gap_amount: f64,
    min_cut: f64,
) -> RecommendationPlan {
    if status == Status::Frugal || gap_amount <= 0.0 {
        return RecommendationPlan::NoReductionNeeded;
    }

    let mut sorted = categories.to_vec();
    // Stable sort keeps the fixed category order for equal amounts
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let shares = match proportions(&sorted) {
        Ok(shares) => shares,
        Err(e) => {
            warn!(gap_amount, error = %e, "No expenses to reduce, returning empty plan");
            return RecommendationPlan::Reduce {
                target: gap_amount,
                items: Vec::new(),
            };
        }
    };

    let items = sorted
        .iter()
        .zip(shares)
        .map(|(&(category, amount), (_, proportion))| Recommendation {
            category,
            amount,
            proportion,
            suggested_cut: proportion * gap_amount,
        })
        .filter(|r| r.suggested_cut >= min_cut)
        .collect();

    RecommendationPlan::Reduce {
        target: gap_amount,
        items,
    }
}
