//! # Roicanvas
//!
//! AI ROI & roadmap canvas toolkit: score candidate AI initiatives, select a
//! budget-constrained portfolio, and aggregate the result into a roadmap
//! canvas ready for rendering.
//!
//! The pipeline has four stages, each pure and synchronous:
//!
//! - **ROI engine** ([`compute_roi`]): attaches ROI, NPV, payback, and
//!   risk-adjusted value to each use case.
//! - **Portfolio selector** ([`select_portfolio`]): ranks by efficiency and
//!   fills an effort budget greedily, guaranteeing a Quick Win and a Big Bet
//!   whenever the pool has one.
//! - **Timeline synthesizer** ([`build_timeline`]): lays selected initiatives
//!   out sequentially over five fixed delivery phases.
//! - **Canvas aggregator** ([`build_canvas`]): collapses everything into one
//!   serializable roadmap document.
//!
//! ## Quick Start
//!
//! ```bash
//! # Full pipeline: use cases in, canvas JSON out
//! roicanvas canvas --input use_cases.json --budget 20 --org "Acme"
//! ```
//!
//! Every stage takes immutable snapshots and returns owned values, so the
//! same inputs can be shared across concurrent computations.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

pub mod canvas;
pub mod core;
pub mod portfolio;
pub mod roi;
pub mod timeline;

pub use canvas::{build_canvas, Canvas};
pub use core::{CanvasError, CoreResult, OrgMetadata, SoftBenefit, UseCase};
pub use portfolio::{select_portfolio, Category, Portfolio, RankedUseCase};
pub use roi::{compute_roi, evaluate_use_case, EvaluatedUseCase, PaybackPeriod, RoiMetrics};
pub use timeline::{
    assign_roadmap_buckets, build_timeline, EffortTier, InitiativeTimeline, Phase, RoadmapBuckets,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "roicanvas";
