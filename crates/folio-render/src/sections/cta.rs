//! Closing call-to-action with the drag-to-open slider.

use std::fmt::Write;

use folio_content::CallToAction;

use crate::html::{self, SVG_ARROW_RIGHT, escape};

/// Fallback link shown under the slider.
pub const CONTACT_HREF: &str = "/#contact";

/// Where the slider leads and how far it must be dragged.
#[derive(Clone, Debug, PartialEq)]
pub struct CtaTarget {
    pub href: String,
    /// Fraction of the track width past which a release opens `href`.
    pub threshold: f64,
}

impl Default for CtaTarget {
    fn default() -> Self {
        Self {
            href: CONTACT_HREF.to_owned(),
            threshold: 0.9,
        }
    }
}

pub fn render_cta(cta: &CallToAction, target: &CtaTarget) -> String {
    let mut out = String::with_capacity(1024);
    let _ = write!(
        out,
        "<section class=\"cs-section cs-cta\"><div class=\"container\"><div class=\"cta\"{}>",
        html::reveal(0.0)
    );
    let _ = write!(
        out,
        "<p class=\"cta-tagline\">{}</p><h2>{}</h2><p class=\"lead\">{}</p>",
        escape(&cta.tagline),
        escape(&cta.heading),
        escape(&cta.body),
    );
    let _ = write!(
        out,
        "<div class=\"cta-slider\" data-cta-slider data-cta-href=\"{}\" data-cta-threshold=\"{}\">\
         <div class=\"cta-fill\"></div>\
         <button type=\"button\" class=\"cta-handle\" aria-label=\"{}\">{SVG_ARROW_RIGHT}</button>\
         <span class=\"cta-track-label\">{}</span></div>",
        escape(&target.href),
        target.threshold,
        escape(&cta.button_label),
        escape(&cta.button_label),
    );
    let _ = write!(
        out,
        "<a class=\"cta-fallback\" href=\"{CONTACT_HREF}\">Or go to contact</a></div></div></section>"
    );
    out
}
