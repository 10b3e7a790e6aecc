//! Previous / next links at the bottom of a case study.

use std::fmt::Write;

use folio_content::{NavEntry, Neighbors};

use crate::html::{SVG_ARROW_LEFT, SVG_ARROW_RIGHT, escape};

/// Render the prev/next block. `None` renders nothing.
pub fn render_navigation(neighbors: Option<Neighbors<'_>>) -> Option<String> {
    let neighbors = neighbors?;
    let mut out = String::with_capacity(768);
    out.push_str("<nav class=\"cs-nav\" aria-label=\"Case studies\"><div class=\"container cs-nav-grid\">");
    link(&mut out, "previous", "Previous", neighbors.previous);
    link(&mut out, "next", "Next", neighbors.next);
    out.push_str("</div></nav>");
    Some(out)
}

fn link(out: &mut String, class: &str, label: &str, entry: &NavEntry) {
    let (before, after) = if class == "previous" {
        (SVG_ARROW_LEFT, "")
    } else {
        ("", SVG_ARROW_RIGHT)
    };
    let _ = write!(
        out,
        "<a class=\"cs-nav-link {class}\" href=\"{}\"><span class=\"cs-nav-label\">{before}{label}{after}</span>\
         <span class=\"cs-nav-title\">{} · {}</span></a>",
        escape(&entry.href),
        escape(&entry.company),
        escape(&entry.title),
    );
}

#[cfg(test)]
mod tests {
    use folio_content::CaseStudyNav;

    use super::*;

    fn nav() -> CaseStudyNav {
        CaseStudyNav::new(vec![
            NavEntry::new("/case-studies/a", "Acme", "Alpha"),
            NavEntry::new("/case-studies/b", "Bolt", "Beta"),
            NavEntry::new("/case-studies/c", "Core", "Gamma"),
        ])
    }

    #[test]
    fn test_first_entry_wraps_to_last() {
        let nav = nav();
        let html = render_navigation(nav.neighbors("/case-studies/a")).unwrap();
        let prev = html.find("Core · Gamma").unwrap();
        let next = html.find("Bolt · Beta").unwrap();
        assert!(prev < next);
        assert!(html.contains("href=\"/case-studies/c\""));
    }

    #[test]
    fn test_unknown_route_renders_nothing() {
        assert!(render_navigation(nav().neighbors("/case-studies/zzz")).is_none());
    }
}
