//! Shared HTML building blocks used by every section renderer.

use std::borrow::Cow;
use std::fmt::Write;

/// Photo icon shown on image placeholders.
const SVG_IMAGE: &str = r#"<svg class="placeholder-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><path d="m21 15-5-5L5 21"/></svg>"#;

pub(crate) const SVG_ARROW_LEFT: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M19 12H5M12 19l-7-7 7-7"/></svg>"#;

pub(crate) const SVG_ARROW_RIGHT: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M5 12h14M12 5l7 7-7 7"/></svg>"#;

pub(crate) const SVG_ARROW_DOWN: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M12 5v14M5 12l7 7 7-7"/></svg>"#;

/// Escape HTML special characters.
///
/// Returns the input unchanged when nothing needs escaping.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Attributes that make an element fade in once when scrolled into view.
pub(crate) fn reveal(delay_secs: f64) -> String {
    if delay_secs <= 0.0 {
        " data-reveal".to_owned()
    } else {
        format!(" data-reveal data-reveal-delay=\"{delay_secs:.2}\"")
    }
}

/// Small uppercase label above a section heading.
pub(crate) fn section_label(html: &mut String, text: &str) {
    let _ = write!(html, "<p class=\"section-label\">{}</p>", escape(text));
}

/// Uppercase label above a block inside a section.
pub(crate) fn block_label(html: &mut String, text: &str) {
    let _ = write!(html, "<p class=\"block-label\">{}</p>", escape(text));
}

/// Paragraph with the given class, skipped when `text` is empty.
pub(crate) fn paragraph(html: &mut String, class: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    let _ = write!(html, "<p class=\"{class}\">{}</p>", escape(text));
}

/// Framed image. Paths are emitted verbatim (query strings included).
pub(crate) fn framed_image(html: &mut String, src: &str, alt: &str) {
    let _ = write!(
        html,
        "<figure class=\"frame\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></figure>",
        escape(src),
        escape(alt),
    );
}

/// Dashed placeholder shown where an image has not been supplied.
pub(crate) fn image_placeholder(html: &mut String, label: &str, tall: bool) {
    let class = if tall {
        "placeholder placeholder-tall"
    } else {
        "placeholder"
    };
    let _ = write!(
        html,
        "<div class=\"{class}\">{SVG_IMAGE}<span>{}</span></div>",
        escape(label),
    );
}

/// Autoplaying, muted, looping video with controls.
pub(crate) fn video(html: &mut String, src: &str) {
    let _ = write!(
        html,
        "<figure class=\"frame frame-video\"><video src=\"{}\" controls autoplay loop muted playsinline preload=\"metadata\">\
         Your browser does not support the video tag.</video></figure>",
        escape(src),
    );
}

/// Pill list of tags.
pub(crate) fn tags(html: &mut String, class: &str, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    let _ = write!(html, "<ul class=\"{class}\">");
    for tag in tags {
        let _ = write!(html, "<li>{}</li>", escape(tag));
    }
    html.push_str("</ul>");
}

/// Two-digit zero-padded decision number.
pub(crate) fn padded_number(n: impl std::fmt::Display) -> String {
    format!("{n:0>2}")
}
