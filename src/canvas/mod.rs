//! Canvas aggregation: the roadmap document and its builder.
//!
//! `schema` holds the document types with their wire-format key names;
//! `builder` assembles a document from a selected portfolio.

mod builder;
mod schema;

pub use builder::build_canvas;
pub use schema::{
    BenefitDetail, BenefitSummary, Canvas, Capabilities, ContextualBenefit, CostDetail,
    CostSummary, Footer, Header, Impacts, Inputs, Objectives, PortfolioRoi, TimelineItem,
};
