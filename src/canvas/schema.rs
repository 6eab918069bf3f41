//! Canvas document schema.
//!
//! The aggregated roadmap document handed to external renderers. Field names
//! serialize with the PascalCase keys of the canvas wire format, so the JSON
//! a renderer sees is stable regardless of how the document was produced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeline::{InitiativeTimeline, Phase};

/// Canvas document title.
pub(crate) const CANVAS_TITLE: &str = "AI ROI & Roadmap Canvas";

/// Canvas schema version stamp.
pub(crate) const CANVAS_VERSION: &str = "v1.0";

/// Footer credit line.
pub(crate) const CREDIT_LINE: &str =
    "AI ROI & Roadmap Canvas generated by the roicanvas portfolio engine.";

/// Fixed personnel copy for the inputs section.
pub(crate) const PERSONNEL: [&str; 3] =
    ["AI/ML engineers", "Data scientists", "Project managers"];

/// Fixed external-support copy for the inputs section.
pub(crate) const EXTERNAL_SUPPORT: [&str; 2] = ["Technology vendors", "Consulting partners"];

/// Fixed skills copy for the capabilities section.
pub(crate) const SKILLS_NEEDED: [&str; 4] =
    ["Machine Learning", "Data Engineering", "MLOps", "Change Management"];

/// Fixed technology copy for the capabilities section.
pub(crate) const TECHNOLOGY: [&str; 3] =
    ["Cloud infrastructure", "ML frameworks", "Data platforms"];

/// Caps applied to the deduplicated aggregate lists.
pub(crate) const HARD_BENEFITS_CAP: usize = 10;
pub(crate) const SOFT_BENEFITS_CAP: usize = 10;
pub(crate) const RISKS_CAP: usize = 15;

/// Placeholder for absent narrative breakdowns.
pub(crate) const BREAKDOWN_FALLBACK: &str = "See use case details";

/// The aggregated roadmap document.
///
/// Built once per (use cases, portfolio, org metadata, date) tuple and
/// immutable afterward; regeneration recomputes everything from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Canvas {
    /// Title, organization, and authorship metadata
    pub header: Header,

    /// Goal statements from the organization metadata
    pub objectives: Objectives,

    /// Required resources and personnel
    pub inputs: Inputs,

    /// Hard and soft benefits across the selected portfolio
    pub impacts: Impacts,

    /// One summary row per selected initiative
    pub timeline: Vec<TimelineItem>,

    /// Full phase-level schedule per initiative
    pub detailed_timeline: Vec<InitiativeTimeline>,

    /// Deduplicated risks across the selected portfolio
    pub risks: Vec<String>,

    /// Skills and technology needed to deliver
    pub capabilities: Capabilities,

    /// Aggregated costs with per-initiative breakdown
    pub costs: CostSummary,

    /// Aggregated benefits with per-initiative breakdown
    pub benefits: BenefitSummary,

    /// Portfolio-level ROI figures
    #[serde(rename = "PortfolioROI")]
    pub portfolio_roi: PortfolioRoi,

    /// Credit line
    pub footer: Footer,
}

/// Canvas header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    /// Document title
    pub canvas_title: String,
    /// Organization name
    pub organization: String,
    /// Team name
    pub team: String,
    /// Organization name again, kept for renderers keyed on `Name`
    pub name: String,
    /// Who designed the canvas
    pub designed_by: String,
    /// Who the canvas is for
    pub designed_for: String,
    /// Build date
    pub date: NaiveDate,
    /// Schema version stamp
    pub version: String,
}

/// Goal statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Objectives {
    /// Primary goal
    pub primary_goal: String,
    /// Strategic focus
    pub strategic_focus: String,
}

/// Required inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Inputs {
    /// Financial resources, as display strings
    pub resources: Vec<String>,
    /// Personnel needed
    pub personnel: Vec<String>,
    /// External support needed
    pub external_support: Vec<String>,
}

/// Aggregated benefit lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Impacts {
    /// Deduplicated KPIs, capped at 10
    pub hard_benefits: Vec<String>,
    /// Deduplicated soft-benefit statements, capped at 10
    pub soft_benefits: Vec<String>,
    /// Soft benefits that carried context, capped at 10
    pub soft_benefits_with_context: Vec<ContextualBenefit>,
}

/// A soft benefit with the context it was captured in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextualBenefit {
    /// The benefit statement
    pub benefit: String,
    /// Where or why it applies
    pub context: String,
}

/// One summary row of the canvas timeline table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimelineItem {
    /// Initiative title
    #[serde(rename = "AIInitiative")]
    pub ai_initiative: String,
    /// Start of the first phase
    pub start_date: NaiveDate,
    /// End of the last phase
    pub end_date: NaiveDate,
    /// Nominal duration label
    pub duration_months: u32,
    /// Milestone display string
    pub milestone: String,
    /// Near-term ROI display string
    #[serde(rename = "ROI")]
    pub roi: String,
    /// Year-1 benefit display string
    pub expected_benefit: String,
    /// Effort score
    pub effort: u8,
    /// Phase-level schedule
    pub phases: Vec<Phase>,
}

/// Skills and technology needed to deliver the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Capabilities {
    /// Skills needed
    pub skills_needed: Vec<String>,
    /// Technology needed
    pub technology: Vec<String>,
}

/// Aggregated costs with per-initiative traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostSummary {
    /// Initial plus year-1 cost, display string
    pub near_term: String,
    /// Initial/annual split, display strings
    pub near_term_breakdown: Vec<String>,
    /// Per-initiative cost rows, preserved verbatim
    pub cost_details: Vec<CostDetail>,
    /// Years 2+ annual cost, display string
    pub long_term: String,
    /// Years 2+ annual cost, display string (maintenance view)
    pub annual_maintenance: String,
}

/// Per-initiative cost row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostDetail {
    /// Initiative title
    pub category: String,
    /// Initial cost display string
    pub initial: String,
    /// Year-1 annual cost display string
    pub annual: String,
    /// Narrative breakdown of the initial cost
    pub breakdown: String,
    /// Narrative breakdown of the annual cost
    pub annual_breakdown: String,
}

/// Aggregated benefits with per-initiative traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenefitSummary {
    /// Year-1 benefit, display string
    pub near_term: String,
    /// Year-1 / years-2-3 split, display strings
    pub near_term_breakdown: Vec<String>,
    /// Per-initiative benefit rows, preserved verbatim
    pub benefit_details: Vec<BenefitDetail>,
    /// Years 2+ annual benefit, display string
    pub long_term: String,
    /// Deduplicated soft-benefit statements, capped at 10
    pub soft_benefits: Vec<String>,
}

/// Per-initiative benefit row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitDetail {
    /// Initiative title
    pub initiative: String,
    /// Year-1 benefit display string
    pub year1_benefit: String,
    /// Narrative breakdown of the year-1 benefit
    pub year1_breakdown: String,
    /// Years 2+ annual benefit display string
    pub ongoing_benefit: String,
    /// Soft-benefit statements of this initiative
    pub soft_benefits: Vec<String>,
}

/// Portfolio-level ROI block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRoi {
    /// Near-term ROI display string
    #[serde(rename = "NearTermROIPercent")]
    pub near_term_roi_percent: String,
    /// Three-year ROI display string
    #[serde(rename = "LongTermROIPercent")]
    pub long_term_roi_percent: String,
    /// Candidate/selected counts summary
    #[serde(rename = "PortfolioNote")]
    pub portfolio_note: String,
}

/// Canvas footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Footer {
    /// Credit line
    pub credit_line: String,
}
