//! Product, core problem and core impact blocks.

use std::fmt::Write;

use folio_content::TextBlock;

use crate::html::{self, escape};

const PROBLEM_GEOMETRY: &str = r#"<div class="geometry" aria-hidden="true"><svg class="geo geo-problem" viewBox="0 0 80 80" fill="none"><polygon points="40,2 78,75 2,75" stroke="currentColor" stroke-width="1"/></svg></div>"#;

const IMPACT_GEOMETRY: &str = r#"<div class="geometry" aria-hidden="true"><svg class="geo geo-impact" viewBox="0 0 96 96" fill="none"><circle cx="48" cy="48" r="46" stroke="currentColor" stroke-width="1"/></svg></div>"#;

pub fn render_product(product: &str) -> String {
    let mut out = String::with_capacity(512);
    let _ = write!(
        out,
        "<section class=\"cs-section bg-card\"><div class=\"container\"><div{}>",
        html::reveal(0.0)
    );
    html::section_label(&mut out, "The Product");
    let _ = write!(out, "<p class=\"lead\">{}</p>", escape(product));
    out.push_str("</div></div></section>");
    out
}

pub fn render_problem(problem: &TextBlock) -> String {
    let mut out = String::with_capacity(768);
    out.push_str("<section class=\"cs-section bg-white\">");
    out.push_str(PROBLEM_GEOMETRY);
    let _ = write!(out, "<div class=\"container\"><div{}>", html::reveal(0.0));
    html::section_label(&mut out, "The Core Problem");
    let _ = write!(
        out,
        "<h2>{}</h2><p class=\"lead\">{}</p>",
        escape(&problem.headline),
        escape(&problem.description)
    );
    out.push_str("</div></div></section>");
    out
}

pub fn render_impact(impact: &TextBlock) -> String {
    let mut out = String::with_capacity(768);
    out.push_str("<section class=\"cs-section bg-card\">");
    out.push_str(IMPACT_GEOMETRY);
    let _ = write!(out, "<div class=\"container\"><div{}>", html::reveal(0.0));
    html::section_label(&mut out, "The Core Impact");
    let _ = write!(
        out,
        "<div class=\"accent-rule\"><h2>{}</h2><p class=\"lead\">{}</p></div>",
        escape(&impact.headline),
        escape(&impact.description)
    );
    out.push_str("</div></div></section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> TextBlock {
        TextBlock {
            headline: "Deliveries were manual".to_owned(),
            description: "Paper & phone calls".to_owned(),
        }
    }

    #[test]
    fn test_problem_has_triangle() {
        let html = render_problem(&block());
        assert!(html.contains("The Core Problem"));
        assert!(html.contains("<polygon"));
        assert!(html.contains("Paper &amp; phone calls"));
    }

    #[test]
    fn test_impact_has_circle() {
        let html = render_impact(&block());
        assert!(html.contains("The Core Impact"));
        assert!(html.contains("<circle"));
        assert!(!html.contains("<polygon"));
    }

    #[test]
    fn test_product_label() {
        let html = render_product("A platform");
        assert!(html.contains("<p class=\"section-label\">The Product</p>"));
    }
}
