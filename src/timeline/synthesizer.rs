//! Timeline synthesis.
//!
//! Lays the selected initiatives out sequentially from a caller-supplied
//! start date: five phases back-to-back within an initiative, a one-month
//! buffer between initiatives, no parallelism. Dates use a flat 30-day
//! month, so the schedule is a pure function of the start date and the
//! selection order.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::phases::{
    phase_months, EffortTier, INITIATIVE_BUFFER_MONTHS, MONTH_DAYS, PHASE_SPECS,
};
use crate::core::format_usd;
use crate::portfolio::{Category, RankedUseCase};

/// One scheduled phase of an initiative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase display name
    #[serde(rename = "phase_name")]
    pub name: String,

    /// First day of the phase
    pub start_date: NaiveDate,

    /// Day the phase ends
    pub end_date: NaiveDate,

    /// Literal duration used for date math
    pub duration_months: u32,

    /// What happens during the phase
    pub description: String,

    /// Fixed deliverables
    pub deliverables: Vec<String>,
}

/// The full schedule for one selected initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiativeTimeline {
    /// Initiative title
    pub initiative: String,

    /// Effort score the schedule was derived from
    pub effort: u8,

    /// Nominal duration label (6/12/36); display copy, not the phase sum
    pub total_duration_months: u32,

    /// Start of the first phase
    pub overall_start: NaiveDate,

    /// End of the last phase
    pub overall_end: NaiveDate,

    /// The five phases, in order
    pub phases: Vec<Phase>,

    /// Year-1 benefit display string, e.g. "$450,000/year"
    pub expected_benefit: String,

    /// Near-term ROI display string, e.g. "136.84%"
    pub roi: String,
}

/// The selected set split into delivery horizons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapBuckets {
    /// Quick Wins, targeted for the first quarter
    #[serde(rename = "Q1")]
    pub q1: Vec<RankedUseCase>,

    /// Everything else with effort <= 6
    #[serde(rename = "1-Year")]
    pub one_year: Vec<RankedUseCase>,

    /// Effort > 6
    #[serde(rename = "3-Year")]
    pub three_year: Vec<RankedUseCase>,
}

/// Build the sequential schedule for the selected initiatives.
///
/// Initiative order is preserved; initiative N+1 starts one month after
/// initiative N ends. Computed fresh on every call and never mutated
/// afterward.
pub fn build_timeline(selected: &[RankedUseCase], start: NaiveDate) -> Vec<InitiativeTimeline> {
    let mut timelines = Vec::with_capacity(selected.len());
    let mut offset_months: u32 = 0;

    for uc in selected {
        let tier = EffortTier::from_effort(uc.use_case.effort_score);
        let overall_start = date_at(start, offset_months);

        let mut phase_offset = offset_months;
        let mut phases = Vec::with_capacity(PHASE_SPECS.len());
        for (index, spec) in PHASE_SPECS.iter().enumerate() {
            let months = phase_months(index, tier);
            phases.push(Phase {
                name: spec.name.to_string(),
                start_date: date_at(start, phase_offset),
                end_date: date_at(start, phase_offset + months),
                duration_months: months,
                description: spec.description.to_string(),
                deliverables: spec.deliverables.iter().map(|d| (*d).to_string()).collect(),
            });
            phase_offset += months;
        }

        timelines.push(InitiativeTimeline {
            initiative: uc.use_case.title.clone(),
            effort: uc.use_case.effort_score,
            total_duration_months: tier.nominal_months(),
            overall_start,
            overall_end: date_at(start, phase_offset),
            phases,
            expected_benefit: format!(
                "{}/year",
                format_usd(uc.use_case.expected_benefits.near_term_annual_benefit)
            ),
            roi: format!("{}%", uc.metrics.near_term_roi_percent),
        });

        offset_months = phase_offset + INITIATIVE_BUFFER_MONTHS;
    }

    tracing::debug!(initiatives = timelines.len(), %start, "synthesized timeline");
    timelines
}

/// Split the selected initiatives into Q1 / 1-Year / 3-Year horizons:
/// Quick Wins land in Q1, the rest by effort.
pub fn assign_roadmap_buckets(selected: &[RankedUseCase]) -> RoadmapBuckets {
    let mut buckets = RoadmapBuckets::default();
    for uc in selected {
        if uc.category == Category::QuickWin {
            buckets.q1.push(uc.clone());
        } else if uc.use_case.effort_score <= 6 {
            buckets.one_year.push(uc.clone());
        } else {
            buckets.three_year.push(uc.clone());
        }
    }
    buckets
}

/// Date `months` scheduling months after `start`.
fn date_at(start: NaiveDate, months: u32) -> NaiveDate {
    start + Days::new(u64::from(months) * MONTH_DAYS)
}
