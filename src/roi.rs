//! ROI engine.
//!
//! Computes the five derived financial metrics for a use case over a
//! four-period cash-flow model: year 0 carries the initial investment,
//! year 1 the near-term net benefit, and years 2-3 the long-term net
//! benefit. All outputs are rounded to two decimal places.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{round2, CanvasError, CoreResult, UseCase};

/// Discount rate used for NPV.
const DISCOUNT_RATE: f64 = 0.10;

/// Payback period over the four-period cash-flow model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaybackPeriod {
    /// Cumulative cash flow first turns non-negative in this period (0-3).
    Years(u8),
    /// Cumulative cash flow stays negative through year 3.
    MoreThanThreeYears,
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(1) => write!(f, "1 year"),
            Self::Years(n) => write!(f, "{n} years"),
            Self::MoreThanThreeYears => write!(f, "> 3 years"),
        }
    }
}

impl FromStr for PaybackPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "> 3 years" => Ok(Self::MoreThanThreeYears),
            "1 year" => Ok(Self::Years(1)),
            other => other
                .strip_suffix(" years")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| *n <= 3)
                .map(Self::Years)
                .ok_or_else(|| format!("invalid payback period '{s}'")),
        }
    }
}

impl Serialize for PaybackPeriod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PaybackPeriod {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// The five derived financial metrics attached to a use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    /// Year-1 return on the initial plus year-1 cost, percent
    pub near_term_roi_percent: f64,

    /// Three-year return on total three-year cost, percent
    pub long_term_roi_percent: f64,

    /// Net present value at a 10% discount rate, dollars
    pub npv_10_percent: f64,

    /// First period whose cumulative cash flow is non-negative
    pub payback_period_years: PaybackPeriod,

    /// NPV scaled down by the expected risk (probability x impact)
    pub risk_adjusted_value: f64,
}

/// A use case with its financial metrics attached.
///
/// Enrichment always clones the input record; callers can keep handing the
/// original `UseCase` slice to concurrent computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedUseCase {
    /// The original record
    #[serde(flatten)]
    pub use_case: UseCase,

    /// Derived financial metrics
    #[serde(flatten)]
    pub metrics: RoiMetrics,
}

/// Evaluate a single use case.
///
/// Fails fast with [`CanvasError::InvalidField`] when a required field is out
/// of range; degenerate denominators are not errors and yield 0 per the
/// formulas.
pub fn evaluate_use_case(use_case: &UseCase) -> CoreResult<EvaluatedUseCase> {
    use_case.validate()?;

    let costs = &use_case.costs;
    let benefits = &use_case.expected_benefits;

    // Four-period cash flows.
    let cf0 = -costs.initial_cost;
    let cf1 = benefits.near_term_annual_benefit - costs.near_term_annual_cost;
    let cf2 = benefits.long_term_annual_benefit - costs.long_term_annual_cost;
    let cf3 = cf2;

    // Near-term ROI% against the full year-1 outlay.
    let near_term_outlay = costs.initial_cost + costs.near_term_annual_cost;
    let near_term_roi_percent = if near_term_outlay > 0.0 {
        (benefits.near_term_annual_benefit - near_term_outlay) / near_term_outlay * 100.0
    } else {
        0.0
    };

    // Three-year ROI%.
    let total_cost_3y = costs.initial_cost + costs.near_term_annual_cost + 2.0 * costs.long_term_annual_cost;
    let total_benefit_3y = benefits.near_term_annual_benefit + 2.0 * benefits.long_term_annual_benefit;
    let long_term_roi_percent = if total_cost_3y > 0.0 {
        (total_benefit_3y - total_cost_3y) / total_cost_3y * 100.0
    } else {
        0.0
    };

    let factor = 1.0 + DISCOUNT_RATE;
    let npv = cf0 + cf1 / factor + cf2 / factor.powi(2) + cf3 / factor.powi(3);

    let cumulative = [cf0, cf0 + cf1, cf0 + cf1 + cf2, cf0 + cf1 + cf2 + cf3];
    let payback_period_years = cumulative
        .iter()
        .position(|c| *c >= 0.0)
        .map_or(PaybackPeriod::MoreThanThreeYears, |i| PaybackPeriod::Years(i as u8));

    let risk_score = use_case.risk.probability * use_case.risk.impact;
    let risk_adjusted_value = npv * (1.0 - risk_score);

    Ok(EvaluatedUseCase {
        use_case: use_case.clone(),
        metrics: RoiMetrics {
            near_term_roi_percent: round2(near_term_roi_percent),
            long_term_roi_percent: round2(long_term_roi_percent),
            npv_10_percent: round2(npv),
            payback_period_years,
            risk_adjusted_value: round2(risk_adjusted_value),
        },
    })
}

/// Evaluate a batch of use cases, preserving input order.
///
/// Rejects the whole batch on the first invalid record or duplicate id; the
/// input slice is never mutated.
pub fn compute_roi(use_cases: &[UseCase]) -> CoreResult<Vec<EvaluatedUseCase>> {
    let mut seen_ids = HashSet::new();
    for uc in use_cases {
        if !seen_ids.insert(uc.id.as_str()) {
            return Err(CanvasError::DuplicateId(uc.id.clone()));
        }
    }

    let evaluated: Vec<EvaluatedUseCase> =
        use_cases.iter().map(evaluate_use_case).collect::<CoreResult<_>>()?;

    tracing::debug!(count = evaluated.len(), "computed ROI metrics");
    Ok(evaluated)
}
