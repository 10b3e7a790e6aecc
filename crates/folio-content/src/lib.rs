//! Content schema for Folio case-study sites.
//!
//! This crate provides:
//! - [`CaseStudyDocument`]: canonical, render-ready case study
//! - [`DesignDecision`] with a tagged [`DecisionBody`] payload
//! - [`SiteManifest`]: owner profile, homepage copy and case-study order
//! - [`CaseStudyNav`]: circular previous/next resolver over the manifest order
//! - [`lint_document`]: authoring checks that never fail a build
//!
//! Documents are authored as YAML with camelCase keys. Loading goes through a
//! single normalization step that folds the historical flat shape
//! (`simpleFormat`, loose `options`/`approach`, `nps`) into the tagged schema.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use folio_content::{CaseStudyDocument, DecisionBody};
//!
//! let yaml = r#"
//! overview: { company: Acme, role: Designer, timeline: "2024", team: Two, platform: Web }
//! title: Checkout
//! subtitle: Fewer steps
//! heroImageLabel: Checkout cover
//! product: A store
//! coreProblem: { headline: Slow, description: Too many steps }
//! coreImpact: { headline: Faster, description: Half the steps }
//! designDecisions:
//!   - number: 1
//!     title: One page
//!     simpleFormat: true
//!     whatWeDid: Merged the steps
//!     whyItMattered: Drop-off
//!     tradeoff: Longer page
//!     imageLabel: ""
//! "#;
//! let doc = CaseStudyDocument::from_yaml(yaml)?;
//! assert!(matches!(doc.decisions.items[0].body, DecisionBody::Simple { .. }));
//! # Ok(())
//! # }
//! ```

mod decision;
mod document;
mod error;
mod feature;
mod legacy;
mod lint;
mod manifest;
mod navigation;

pub use decision::{
    Approach, DecisionBody, DecisionOption, DecisionsLayout, DesignDecision, option_letter,
};
pub use document::{
    CallToAction, CaseStudyDocument, CtaOverride, DecisionsSection, ExtraCard, FeaturesCopy,
    HeroImage, Learning, Metric, NextStudy, Overview, ResultsSection, TextBlock, VideoSection,
};
pub use error::ContentError;
pub use feature::{Feature, FeatureImage, ScoreMetric, SubStep};
pub use lint::{Lint, lint_document};
pub use manifest::{
    AboutCopy, Differentiator, HeroCopy, HomeCopy, Profile, SiteManifest, TeaserEntry,
    WorkflowCopy, WorkflowTool,
};
pub use navigation::{CaseStudyNav, NavEntry, Neighbors, case_study_href};
