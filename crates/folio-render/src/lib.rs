//! HTML rendering for Folio case-study sites.
//!
//! This crate provides:
//! - [`render_case_study`]: the shared case-study template, section by section
//! - [`render_home`], [`render_listing`], [`render_about_placeholder`]: the other pages
//! - [`render_page`]: the page shell (head, header, footer) around any body
//! - [`GaugeGeometry`] and [`scatter`]: the pure geometry behind the score
//!   gauge and the decorative shape layers
//!
//! Rendering never fails. Absent optional data omits the matching section.
//!
//! # Example
//!
//! ```
//! use folio_content::{CaseStudyDocument, CaseStudyNav};
//! use folio_render::{RenderOptions, SectionKind, render_case_study};
//!
//! let yaml = r#"
//! overview: { company: Acme, role: Designer, timeline: "2024", team: Solo, platform: Web }
//! title: Checkout
//! subtitle: Faster checkout
//! product: A store.
//! coreProblem: { headline: Slow, description: Too many steps. }
//! coreImpact: { headline: Fast, description: One step. }
//! "#;
//! let doc = CaseStudyDocument::from_yaml(yaml).unwrap();
//! let page = render_case_study(&doc, "/case-studies/acme", &CaseStudyNav::default(), &RenderOptions::default());
//! assert_eq!(page.kinds().first(), Some(&SectionKind::Hero));
//! ```

mod case_study;
mod gauge;
mod home;
mod html;
mod layout;
pub mod sections;
mod shapes;
#[cfg(test)]
mod test_support;

pub use case_study::{
    RenderOptions, RenderedCaseStudy, RenderedSection, SectionKind, render_case_study,
};
pub use gauge::{ArcSegment, BAND_FRACTIONS, GaugeGeometry, render_score_gauge};
pub use home::{Teaser, render_about_placeholder, render_home, render_listing};
pub use html::escape;
pub use layout::{PageShell, SCRIPT_HREF, STYLESHEET_HREF, case_study_title, render_page};
pub use shapes::{
    EntryMotion, LoopMotion, PlacedShape, SceneId, ShapeEffect, ShapeKind, Side, scatter,
};
