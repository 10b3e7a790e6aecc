//! One renderer per case-study section.
//!
//! Each renderer is a pure function from a slice of the document to HTML.
//! Optional sections return `Option<String>` and yield `None` when their data
//! is absent.

mod cta;
mod decisions;
mod features;
mod hero;
mod narrative;
mod nav;
mod results;
mod video;

pub use cta::{CONTACT_HREF, CtaTarget, render_cta};
pub use decisions::{render_decisions, render_options_grid};
pub use features::render_features;
pub use hero::{BACK_HREF, render_hero};
pub use narrative::{render_impact, render_problem, render_product};
pub use nav::render_navigation;
pub use results::render_results;
pub use video::render_video;
