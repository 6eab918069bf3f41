//! Use-case data structures.
//!
//! Defines the `UseCase` record describing one candidate AI initiative,
//! as produced by an upstream intake layer, plus the organization metadata
//! attached to a finished canvas.

use serde::{Deserialize, Serialize};

use super::error::{CanvasError, CoreResult};

/// A candidate AI initiative with cost, benefit, risk, and effort data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCase {
    /// Unique identifier for this use case
    pub id: String,

    /// Short display title
    #[serde(default)]
    pub title: String,

    /// The business problem this initiative addresses
    #[serde(default)]
    pub problem: String,

    /// KPIs this initiative moves (aggregated into canvas hard benefits)
    #[serde(default)]
    pub kpis: Vec<String>,

    /// Subjective implementation difficulty, 1 (trivial) to 10 (max)
    #[serde(alias = "effort_score_1_to_10")]
    pub effort_score: u8,

    /// Expected financial and soft benefits
    pub expected_benefits: ExpectedBenefits,

    /// Initial and recurring costs
    pub costs: Costs,

    /// Risk assessment
    pub risk: Risk,

    /// Ids of use cases this one depends on (carried, not yet used by
    /// selection)
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Expected benefits of a use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedBenefits {
    /// Annual benefit in year 1, dollars
    pub near_term_annual_benefit: f64,

    /// Annual benefit in years 2+, dollars
    pub long_term_annual_benefit: f64,

    /// Non-financial benefits, with or without context
    #[serde(default)]
    pub soft_benefits: Vec<SoftBenefit>,

    /// Narrative breakdown of the year-1 benefit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub near_term_benefit_breakdown: Option<String>,
}

/// Cost structure of a use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Costs {
    /// One-time up-front investment, dollars
    pub initial_cost: f64,

    /// Annual cost in year 1, dollars
    pub near_term_annual_cost: f64,

    /// Annual cost in years 2+, dollars
    pub long_term_annual_cost: f64,

    /// Narrative breakdown of the initial cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_cost_breakdown: Option<String>,

    /// Narrative breakdown of the year-1 annual cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub near_term_annual_cost_breakdown: Option<String>,
}

/// Risk assessment for a use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// Probability the risk materializes, 0.0 to 1.0
    #[serde(alias = "probability_0_to_1")]
    pub probability: f64,

    /// Impact if the risk materializes, 0.0 to 1.0
    #[serde(alias = "impact_0_to_1")]
    pub impact: f64,

    /// Named risks (aggregated into the canvas risk section)
    #[serde(default)]
    pub risks_list: Vec<String>,
}

/// A non-financial benefit, either a bare statement or one carrying the
/// context it was captured in. Resolved once at ingestion; the rest of the
/// pipeline only calls the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SoftBenefit {
    /// Plain benefit statement
    Plain(String),

    /// Benefit with supporting context
    Contextual {
        /// The benefit statement
        benefit: String,
        /// Where or why it applies
        #[serde(default)]
        context: String,
    },
}

impl SoftBenefit {
    /// The benefit statement, regardless of representation.
    pub fn benefit_text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Contextual { benefit, .. } => benefit,
        }
    }

    /// The context, if this benefit carries one.
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Contextual { context, .. } => Some(context.as_str()),
        }
    }
}

/// Organization metadata stamped onto the canvas header and objectives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMetadata {
    /// Organization name
    #[serde(default, alias = "organization_name")]
    pub name: String,

    /// Team name
    #[serde(default, alias = "team_name")]
    pub team: String,

    /// Who designed the canvas
    #[serde(default)]
    pub designed_by: String,

    /// Who the canvas is for
    #[serde(default)]
    pub designed_for: String,

    /// Primary goal statement
    #[serde(default)]
    pub primary_goal: String,

    /// Strategic focus statement
    #[serde(default)]
    pub strategic_focus: String,
}

impl UseCase {
    /// Create a use case with neutral financials; fill in the rest with the
    /// `with_*` builders.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            problem: String::new(),
            kpis: Vec::new(),
            effort_score: 5,
            expected_benefits: ExpectedBenefits {
                near_term_annual_benefit: 0.0,
                long_term_annual_benefit: 0.0,
                soft_benefits: Vec::new(),
                near_term_benefit_breakdown: None,
            },
            costs: Costs {
                initial_cost: 0.0,
                near_term_annual_cost: 0.0,
                long_term_annual_cost: 0.0,
                initial_cost_breakdown: None,
                near_term_annual_cost_breakdown: None,
            },
            risk: Risk { probability: 0.0, impact: 0.0, risks_list: Vec::new() },
            dependencies: Vec::new(),
        }
    }

    /// Set the problem statement.
    #[must_use]
    pub fn with_problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = problem.into();
        self
    }

    /// Set the KPI list.
    #[must_use]
    pub fn with_kpis(mut self, kpis: Vec<String>) -> Self {
        self.kpis = kpis;
        self
    }

    /// Set the effort score (1-10).
    #[must_use]
    pub fn with_effort(mut self, effort_score: u8) -> Self {
        self.effort_score = effort_score;
        self
    }

    /// Set the financial benefit figures.
    #[must_use]
    pub fn with_benefits(mut self, near_term_annual: f64, long_term_annual: f64) -> Self {
        self.expected_benefits.near_term_annual_benefit = near_term_annual;
        self.expected_benefits.long_term_annual_benefit = long_term_annual;
        self
    }

    /// Add a soft benefit.
    #[must_use]
    pub fn with_soft_benefit(mut self, benefit: SoftBenefit) -> Self {
        self.expected_benefits.soft_benefits.push(benefit);
        self
    }

    /// Set the cost figures.
    #[must_use]
    pub fn with_costs(mut self, initial: f64, near_term_annual: f64, long_term_annual: f64) -> Self {
        self.costs.initial_cost = initial;
        self.costs.near_term_annual_cost = near_term_annual;
        self.costs.long_term_annual_cost = long_term_annual;
        self
    }

    /// Set the risk probability and impact.
    #[must_use]
    pub fn with_risk(mut self, probability: f64, impact: f64) -> Self {
        self.risk.probability = probability;
        self.risk.impact = impact;
        self
    }

    /// Add a named risk.
    #[must_use]
    pub fn with_risk_item(mut self, risk: impl Into<String>) -> Self {
        self.risk.risks_list.push(risk.into());
        self
    }

    /// Add a dependency on another use case.
    #[must_use]
    pub fn with_dependency(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    /// Check every field the pipeline relies on; the first violation is
    /// returned and the record is rejected whole.
    pub fn validate(&self) -> CoreResult<()> {
        let who = if self.id.trim().is_empty() { self.title.as_str() } else { self.id.as_str() };

        if self.id.trim().is_empty() {
            return Err(CanvasError::invalid_field(who, "id", "must not be empty"));
        }
        if !(1..=10).contains(&self.effort_score) {
            return Err(CanvasError::invalid_field(
                who,
                "effort_score",
                format!("must be between 1 and 10, got {}", self.effort_score),
            ));
        }

        let money_fields = [
            ("costs.initial_cost", self.costs.initial_cost),
            ("costs.near_term_annual_cost", self.costs.near_term_annual_cost),
            ("costs.long_term_annual_cost", self.costs.long_term_annual_cost),
            (
                "expected_benefits.near_term_annual_benefit",
                self.expected_benefits.near_term_annual_benefit,
            ),
            (
                "expected_benefits.long_term_annual_benefit",
                self.expected_benefits.long_term_annual_benefit,
            ),
        ];
        for (field, value) in money_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CanvasError::invalid_field(
                    who,
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        for (field, value) in [("risk.probability", self.risk.probability), ("risk.impact", self.risk.impact)]
        {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CanvasError::invalid_field(
                    who,
                    field,
                    format!("must be between 0.0 and 1.0, got {value}"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_use_case() -> UseCase {
        UseCase::new("UC001", "Invoice automation")
            .with_effort(3)
            .with_benefits(450_000.0, 750_000.0)
            .with_costs(150_000.0, 40_000.0, 35_000.0)
            .with_risk(0.3, 0.4)
    }

    #[test]
    fn test_builder_sets_fields() {
        let uc = valid_use_case()
            .with_problem("Manual invoice entry")
            .with_kpis(vec!["Cycle time".to_string()])
            .with_risk_item("Adoption risk")
            .with_dependency("UC000");

        assert_eq!(uc.id, "UC001");
        assert_eq!(uc.effort_score, 3);
        assert_eq!(uc.costs.initial_cost, 150_000.0);
        assert_eq!(uc.risk.risks_list, vec!["Adoption risk".to_string()]);
        assert_eq!(uc.dependencies, vec!["UC000".to_string()]);
    }

    #[test]
    fn test_validate_accepts_valid_record() {
        assert!(valid_use_case().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let uc = UseCase::new("  ", "No id");
        let err = uc.validate().unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_validate_rejects_effort_out_of_range() {
        let err = valid_use_case().with_effort(11).validate().unwrap_err();
        assert!(err.to_string().contains("effort_score"));

        let err = valid_use_case().with_effort(0).validate().unwrap_err();
        assert!(err.to_string().contains("effort_score"));
    }

    #[test]
    fn test_validate_rejects_negative_cost() {
        let err = valid_use_case().with_costs(-1.0, 0.0, 0.0).validate().unwrap_err();
        assert!(err.to_string().contains("initial_cost"));
        assert!(err.to_string().contains("UC001"));
    }

    #[test]
    fn test_validate_rejects_probability_out_of_range() {
        let err = valid_use_case().with_risk(1.5, 0.2).validate().unwrap_err();
        assert!(err.to_string().contains("probability"));
    }

    #[test]
    fn test_soft_benefit_accessors() {
        let plain = SoftBenefit::Plain("Improved morale".to_string());
        assert_eq!(plain.benefit_text(), "Improved morale");
        assert!(plain.context().is_none());

        let contextual = SoftBenefit::Contextual {
            benefit: "Faster onboarding".to_string(),
            context: "Support team".to_string(),
        };
        assert_eq!(contextual.benefit_text(), "Faster onboarding");
        assert_eq!(contextual.context(), Some("Support team"));
    }

    #[test]
    fn test_soft_benefit_parses_both_shapes() {
        let parsed: Vec<SoftBenefit> = serde_json::from_str(
            r#"["Improved operations", {"benefit": "Brand lift", "context": "Marketing"}]"#,
        )
        .unwrap();

        assert_eq!(parsed[0], SoftBenefit::Plain("Improved operations".to_string()));
        assert_eq!(
            parsed[1],
            SoftBenefit::Contextual {
                benefit: "Brand lift".to_string(),
                context: "Marketing".to_string()
            }
        );
    }

    #[test]
    fn test_use_case_parses_legacy_field_names() {
        let json = r#"{
            "id": "UC001",
            "title": "Churn prediction",
            "effort_score_1_to_10": 4,
            "expected_benefits": {
                "near_term_annual_benefit": 100000,
                "long_term_annual_benefit": 200000,
                "soft_benefits": ["Better retention insight"]
            },
            "costs": {
                "initial_cost": 50000,
                "near_term_annual_cost": 10000,
                "long_term_annual_cost": 8000
            },
            "risk": {
                "probability_0_to_1": 0.2,
                "impact_0_to_1": 0.3,
                "risks_list": ["Data quality"]
            }
        }"#;

        let uc: UseCase = serde_json::from_str(json).unwrap();
        assert_eq!(uc.effort_score, 4);
        assert_eq!(uc.risk.probability, 0.2);
        assert_eq!(uc.risk.impact, 0.3);
        assert!(uc.validate().is_ok());
    }

    #[test]
    fn test_use_case_missing_risk_is_rejected_at_parse() {
        let json = r#"{
            "id": "UC002",
            "title": "No risk section",
            "effort_score": 4,
            "expected_benefits": {
                "near_term_annual_benefit": 1,
                "long_term_annual_benefit": 1
            },
            "costs": {
                "initial_cost": 1,
                "near_term_annual_cost": 1,
                "long_term_annual_cost": 1
            }
        }"#;

        assert!(serde_json::from_str::<UseCase>(json).is_err());
    }

    #[test]
    fn test_org_metadata_defaults_and_aliases() {
        let org: OrgMetadata =
            serde_json::from_str(r#"{"organization_name": "Acme", "team_name": "Ops"}"#).unwrap();
        assert_eq!(org.name, "Acme");
        assert_eq!(org.team, "Ops");
        assert_eq!(org.designed_by, "");

        assert_eq!(OrgMetadata::default().primary_goal, "");
    }
}
