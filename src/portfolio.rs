//! Portfolio selection.
//!
//! Ranks evaluated use cases on an impact x effort grid and fills an effort
//! budget greedily by efficiency. Two categorical guarantees run after the
//! greedy pass: a portfolio never ships without a Quick Win or a Big Bet when
//! the candidate pool contains one, even if honoring that pushes total effort
//! past the budget.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{round2, UseCase};
use crate::roi::{EvaluatedUseCase, RoiMetrics};

/// Impact x effort category of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Impact >= 7 and effort <= 4
    #[serde(rename = "Quick Win")]
    QuickWin,

    /// Impact >= 7 and effort >= 5
    #[serde(rename = "Big Bet")]
    BigBet,

    /// Impact between 4 and 7
    #[serde(rename = "Fill-in")]
    FillIn,

    /// Impact < 4
    #[serde(rename = "Low Priority")]
    LowPriority,
}

impl Category {
    /// Classify a use case from its (unrounded) impact score and effort.
    pub fn classify(impact_score: f64, effort_score: u8) -> Self {
        if impact_score >= 7.0 && effort_score <= 4 {
            Self::QuickWin
        } else if impact_score >= 7.0 {
            Self::BigBet
        } else if impact_score >= 4.0 {
            Self::FillIn
        } else {
            Self::LowPriority
        }
    }

    /// Display name, as it appears in rationale text and serialized output.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::QuickWin => "Quick Win",
            Self::BigBet => "Big Bet",
            Self::FillIn => "Fill-in",
            Self::LowPriority => "Low Priority",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An evaluated use case with its selection-stage scores attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedUseCase {
    /// The original record
    #[serde(flatten)]
    pub use_case: UseCase,

    /// Derived financial metrics
    #[serde(flatten)]
    pub metrics: RoiMetrics,

    /// Risk-adjusted value normalized to 0-10 across the candidate pool,
    /// rounded to 2 decimals
    pub impact_score: f64,

    /// Position on the impact x effort grid
    pub category: Category,

    /// Impact score divided by effort score; the greedy ranking key
    pub efficiency: f64,
}

/// A budget-constrained selected/excluded split of the candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Selected use cases, in selection order
    pub selected_use_cases: Vec<RankedUseCase>,

    /// Everything not selected, in input order
    pub excluded_use_cases: Vec<RankedUseCase>,

    /// Human-readable summary of the selection outcome
    pub selection_rationale: String,

    /// Sum of selected effort scores; may exceed the budget when a
    /// categorical guarantee fired
    pub total_effort: u32,

    /// Caller-supplied effort budget
    pub effort_budget: u32,
}

impl Portfolio {
    /// Whether the categorical guarantees pushed total effort past the
    /// budget.
    pub fn is_over_budget(&self) -> bool {
        self.total_effort > self.effort_budget
    }
}

/// Select a portfolio from evaluated use cases under an effort budget.
///
/// A budget of 0 is accepted: the greedy pass then selects nothing and only
/// the categorical guarantees can add initiatives. An empty candidate pool
/// yields an empty portfolio with no guarantees triggered.
pub fn select_portfolio(use_cases: &[EvaluatedUseCase], effort_budget: u32) -> Portfolio {
    let ranked = rank_use_cases(use_cases);

    // Efficiency-descending order; stable, so equal efficiencies keep input
    // order.
    let mut order: Vec<usize> = (0..ranked.len()).collect();
    order.sort_by(|&a, &b| {
        ranked[b].efficiency.partial_cmp(&ranked[a].efficiency).unwrap_or(Ordering::Equal)
    });

    let mut selected_idx: Vec<usize> = Vec::new();
    let mut total_effort: u32 = 0;
    for &i in &order {
        let effort = u32::from(ranked[i].use_case.effort_score);
        if total_effort + effort <= effort_budget {
            selected_idx.push(i);
            total_effort += effort;
        }
    }

    // Categorical guarantees: each fires independently and unconditionally,
    // budget overshoot included.
    for target in [Category::QuickWin, Category::BigBet] {
        if selected_idx.iter().any(|&i| ranked[i].category == target) {
            continue;
        }
        if let Some(best) = best_of_category(&ranked, target) {
            total_effort += u32::from(ranked[best].use_case.effort_score);
            selected_idx.push(best);
            tracing::debug!(
                category = %target,
                id = %ranked[best].use_case.id,
                total_effort,
                effort_budget,
                "forced category guarantee into selection"
            );
        }
    }

    let chosen: HashSet<usize> = selected_idx.iter().copied().collect();
    let selected_use_cases: Vec<RankedUseCase> =
        selected_idx.iter().map(|&i| ranked[i].clone()).collect();
    let excluded_use_cases: Vec<RankedUseCase> = (0..ranked.len())
        .filter(|i| !chosen.contains(i))
        .map(|i| ranked[i].clone())
        .collect();

    let selection_rationale =
        build_rationale(&selected_use_cases, total_effort, effort_budget);

    tracing::info!(
        selected = selected_use_cases.len(),
        excluded = excluded_use_cases.len(),
        total_effort,
        effort_budget,
        "portfolio selected"
    );

    Portfolio {
        selected_use_cases,
        excluded_use_cases,
        selection_rationale,
        total_effort,
        effort_budget,
    }
}

/// Normalize risk-adjusted values to 0-10 and attach category and
/// efficiency.
fn rank_use_cases(use_cases: &[EvaluatedUseCase]) -> Vec<RankedUseCase> {
    let max_value = use_cases
        .iter()
        .map(|uc| uc.metrics.risk_adjusted_value)
        .fold(f64::NEG_INFINITY, f64::max);

    use_cases
        .iter()
        .map(|uc| {
            let impact = if max_value == 0.0 {
                0.0
            } else {
                uc.metrics.risk_adjusted_value / max_value * 10.0
            };
            let effort = uc.use_case.effort_score;
            let efficiency = if effort > 0 { impact / f64::from(effort) } else { 0.0 };

            RankedUseCase {
                use_case: uc.use_case.clone(),
                metrics: uc.metrics.clone(),
                impact_score: round2(impact),
                category: Category::classify(impact, effort),
                efficiency,
            }
        })
        .collect()
}

/// Highest-efficiency use case of a category; first in input order wins
/// ties.
fn best_of_category(ranked: &[RankedUseCase], category: Category) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, uc) in ranked.iter().enumerate() {
        if uc.category != category {
            continue;
        }
        match best {
            Some(b) if ranked[b].efficiency >= uc.efficiency => {}
            _ => best = Some(i),
        }
    }
    best
}

fn build_rationale(selected: &[RankedUseCase], total_effort: u32, effort_budget: u32) -> String {
    // Category counts in first-seen (selection) order.
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for uc in selected {
        match counts.iter_mut().find(|(cat, _)| *cat == uc.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((uc.category, 1)),
        }
    }
    let breakdown =
        counts.iter().map(|(cat, n)| format!("{n} {cat}")).collect::<Vec<_>>().join(", ");

    format!(
        "Selected {} use cases with total effort {}/{}. Portfolio includes: {}. \
         Selection prioritized high-impact, low-effort initiatives.",
        selected.len(),
        total_effort,
        effort_budget,
        breakdown
    )
}
