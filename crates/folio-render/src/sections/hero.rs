//! Case-study hero: back link, title block, tags, metadata grid and cover.

use std::fmt::Write;

use folio_content::CaseStudyDocument;

use crate::html::{self, SVG_ARROW_LEFT, escape};

/// Where the back link points.
pub const BACK_HREF: &str = "/#work";

/// Render the hero section.
pub fn render_hero(doc: &CaseStudyDocument) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("<section class=\"cs-hero\"><div class=\"dots\" aria-hidden=\"true\"></div><div class=\"container\">");

    let _ = write!(
        out,
        "<div{}><a class=\"back-link\" href=\"{BACK_HREF}\">{SVG_ARROW_LEFT}Back to all work</a></div>",
        html::reveal(0.0)
    );

    let _ = write!(
        out,
        "<div{}><p class=\"company\">{}</p><h1>{}</h1><p class=\"lead\">{}</p></div>",
        html::reveal(0.1),
        escape(&doc.overview.company),
        escape(&doc.title),
        escape(&doc.subtitle),
    );

    let _ = write!(out, "<div{}>", html::reveal(0.2));
    html::tags(&mut out, "tags", &doc.tags);
    out.push_str("</div>");

    let overview = &doc.overview;
    let _ = write!(out, "<dl class=\"meta-grid\"{}>", html::reveal(0.3));
    for (label, value) in [
        ("Role", &overview.role),
        ("Timeline", &overview.timeline),
        ("Team", &overview.team),
        ("Platform", &overview.platform),
    ] {
        let _ = write!(out, "<div><dt>{label}</dt><dd>{}</dd></div>", escape(value));
    }
    out.push_str("</dl>");

    if let Some(note) = &overview.confidentiality {
        let _ = write!(
            out,
            "<p class=\"confidentiality\"{}>{}</p>",
            html::reveal(0.35),
            escape(note)
        );
    }

    let _ = write!(out, "<div class=\"cover\"{}>", html::reveal(0.4));
    match &doc.hero.src {
        Some(src) => html::framed_image(&mut out, src, &doc.hero.label),
        None => html::image_placeholder(&mut out, &doc.hero.label, true),
    }
    out.push_str("</div></div></section>");
    out
}
