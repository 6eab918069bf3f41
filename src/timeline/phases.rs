//! Fixed phase definitions and effort tiers.
//!
//! Every initiative runs the same five phases; only the development phase
//! duration varies, by effort tier. The nominal initiative duration shown on
//! the canvas (6/12/36 months) is display copy and deliberately differs from
//! the sum of the literal phase durations, which alone drive date math.

/// Static definition of one delivery phase.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PhaseSpec {
    /// Phase display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Fixed deliverables list
    pub deliverables: &'static [&'static str],
}

/// Index of the development phase, the only one with a variable duration.
pub(crate) const DEV_PHASE: usize = 2;

/// Duration in months of every phase except development.
pub(crate) const FIXED_PHASE_MONTHS: u32 = 3;

/// Gap between one initiative's end and the next one's start, months.
pub(crate) const INITIATIVE_BUFFER_MONTHS: u32 = 1;

/// Days per scheduling month.
pub(crate) const MONTH_DAYS: u64 = 30;

/// The five delivery phases, in execution order.
pub(crate) const PHASE_SPECS: [PhaseSpec; 5] = [
    PhaseSpec {
        name: "Discovery & Planning",
        description: "Requirements gathering, stakeholder alignment, resource planning",
        deliverables: &["Business requirements", "Technical architecture", "Team structure"],
    },
    PhaseSpec {
        name: "Design & Preparation",
        description: "Solution design, vendor selection, infrastructure setup",
        deliverables: &["System design", "Implementation plan", "Infrastructure provisioned"],
    },
    PhaseSpec {
        name: "Development & Integration",
        description: "Model development, system integration, quality assurance",
        deliverables: &["Trained models", "API integrations", "Test reports"],
    },
    PhaseSpec {
        name: "Deployment & Rollout",
        description: "Pilot testing, user training, production deployment",
        deliverables: &["Production deployment", "User documentation", "Training completion"],
    },
    PhaseSpec {
        name: "Operations & Optimization",
        description: "Monitoring, performance tuning, continuous improvement",
        deliverables: &["Monitoring dashboards", "Performance metrics", "Optimization roadmap"],
    },
];

/// Delivery tier of an initiative, derived from its effort score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffortTier {
    /// Effort 1-3: quick delivery
    Light,
    /// Effort 4-6: one-year delivery
    Standard,
    /// Effort 7-10: multi-year delivery
    Extended,
}

impl EffortTier {
    /// Tier for an effort score.
    pub fn from_effort(effort_score: u8) -> Self {
        if effort_score <= 3 {
            Self::Light
        } else if effort_score <= 6 {
            Self::Standard
        } else {
            Self::Extended
        }
    }

    /// Development-phase duration in months; this is what date math uses.
    pub const fn dev_months(&self) -> u32 {
        match self {
            Self::Light => 1,
            Self::Standard => 6,
            Self::Extended => 24,
        }
    }

    /// Nominal initiative duration label in months, shown on the canvas.
    pub const fn nominal_months(&self) -> u32 {
        match self {
            Self::Light => 6,
            Self::Standard => 12,
            Self::Extended => 36,
        }
    }
}

/// Duration in months of the phase at `index` for a given tier.
pub(crate) const fn phase_months(index: usize, tier: EffortTier) -> u32 {
    if index == DEV_PHASE {
        tier.dev_months()
    } else {
        FIXED_PHASE_MONTHS
    }
}
