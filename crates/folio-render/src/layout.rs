//! Page shell: head, fixed header, footer.

use std::fmt::Write;

use folio_content::{CaseStudyDocument, Profile};

use crate::html::escape;

/// Stylesheet URL written by the site builder.
pub const STYLESHEET_HREF: &str = "/assets/site.css";
/// Script URL written by the site builder.
pub const SCRIPT_HREF: &str = "/assets/site.js";

/// Everything needed to wrap a page body.
pub struct PageShell<'a> {
    pub title: String,
    pub description: String,
    pub owner: &'a Profile,
    pub body: String,
    /// The homepage ends with its own contact section instead.
    pub show_footer: bool,
}

impl<'a> PageShell<'a> {
    /// Shell for a case-study page.
    pub fn for_case_study(doc: &CaseStudyDocument, owner: &'a Profile, body: String) -> Self {
        Self {
            title: case_study_title(doc, owner),
            description: doc.meta_description().to_owned(),
            owner,
            body,
            show_footer: true,
        }
    }
}

/// `"{company} {title} | {owner}"`.
pub fn case_study_title(doc: &CaseStudyDocument, owner: &Profile) -> String {
    format!("{} {} | {}", doc.overview.company, doc.title, owner.name)
}

/// Render a complete HTML page.
pub fn render_page(page: &PageShell<'_>) -> String {
    let mut html = String::with_capacity(page.body.len() + 4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(&page.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape(&page.description)
    );
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{STYLESHEET_HREF}\">");
    let _ = writeln!(html, "<script src=\"{SCRIPT_HREF}\" defer></script>");
    html.push_str("</head>\n<body>\n");

    render_header(&mut html, page.owner);
    html.push_str("<main>\n");
    html.push_str(&page.body);
    html.push_str("\n</main>\n");
    if page.show_footer {
        render_footer(&mut html, page.owner);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(html: &mut String, owner: &Profile) {
    html.push_str("<header class=\"site-header\"><div class=\"container header-inner\">");
    html.push_str("<a class=\"identity\" href=\"/\">");
    if let Some(avatar) = &owner.avatar {
        let _ = write!(
            html,
            "<img class=\"avatar\" src=\"{}\" alt=\"{}\">",
            escape(avatar),
            escape(&owner.name)
        );
    }
    let _ = write!(
        html,
        "<span class=\"identity-text\"><span class=\"identity-name\">{}</span><span class=\"identity-role\">{}</span></span></a>",
        escape(&owner.name),
        escape(&owner.role),
    );
    html.push_str("<nav class=\"site-nav\">");
    for (label, href) in [("Work", "/#work"), ("About", "/#about"), ("Contact", "/#contact")] {
        let _ = write!(html, "<a href=\"{href}\">{label}</a>");
    }
    html.push_str("</nav></div></header>\n");
}

fn render_footer(html: &mut String, owner: &Profile) {
    html.push_str("<footer class=\"site-footer\"><div class=\"container footer-inner\">");
    let _ = write!(
        html,
        "<p class=\"footer-name\">{} · {}</p><ul class=\"footer-links\">",
        escape(&owner.name),
        escape(&owner.location)
    );
    let _ = write!(
        html,
        "<li><a href=\"mailto:{0}\">Email</a></li><li><a href=\"{1}\" target=\"_blank\" rel=\"noopener noreferrer\">LinkedIn</a></li>",
        escape(&owner.email),
        escape(&owner.linkedin),
    );
    if let Some(resume) = &owner.resume {
        let _ = write!(
            html,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Resume</a></li>",
            escape(resume)
        );
    }
    html.push_str("</ul></div></footer>\n");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{document, profile};

    #[test]
    fn test_case_study_shell() {
        let owner = profile();
        let doc = document();
        let shell = PageShell::for_case_study(&doc, &owner, "<p>body</p>".to_owned());
        assert_eq!(shell.title, "Konfront Scheduling for clinics | Ada Rivera");
        assert_eq!(shell.description, "Fewer no-shows");

        let html = render_page(&shell);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Konfront Scheduling for clinics | Ada Rivera</title>"));
        assert!(html.contains("href=\"/assets/site.css\""));
        assert!(html.contains("<main>\n<p>body</p>\n</main>"));
        assert!(html.contains("class=\"site-footer\""));
        assert!(html.contains(">Resume</a>"));
    }

    #[test]
    fn test_description_field_preferred() {
        let owner = profile();
        let mut doc = document();
        doc.description = Some("Custom meta".to_owned());
        let shell = PageShell::for_case_study(&doc, &owner, String::new());
        assert!(render_page(&shell).contains("content=\"Custom meta\""));
    }

    #[test]
    fn test_footer_hidden() {
        let owner = profile();
        let shell = PageShell {
            title: "Home".to_owned(),
            description: String::new(),
            owner: &owner,
            body: String::new(),
            show_footer: false,
        };
        let html = render_page(&shell);
        assert!(!html.contains("site-footer"));
        assert!(html.contains("<a href=\"/#contact\">Contact</a>"));
    }
}
