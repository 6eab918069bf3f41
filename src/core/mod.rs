//! Core types and helpers for the canvas pipeline.
//!
//! This module contains the fundamental data structures shared by every
//! pipeline stage: the use-case record, organization metadata, the error
//! type, and deterministic formatting helpers.

mod error;
mod format;
mod use_case;

pub use error::{CanvasError, CoreResult};
pub use format::{dedup_first_seen, format_usd, round2};
pub use use_case::{Costs, ExpectedBenefits, OrgMetadata, Risk, SoftBenefit, UseCase};
