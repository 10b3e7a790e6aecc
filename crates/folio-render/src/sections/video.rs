//! Standalone prototype walkthrough video.

use std::fmt::Write;

use folio_content::VideoSection;

use crate::html::{self, escape};

pub fn render_video(video: &VideoSection) -> String {
    let mut out = String::with_capacity(512);
    let _ = write!(
        out,
        "<section class=\"cs-section bg-white\"><div class=\"container\"><div{}>",
        html::reveal(0.0)
    );
    html::section_label(&mut out, "Prototype walkthrough");
    let _ = write!(out, "<h2>{}</h2></div><div{}>", escape(&video.label), html::reveal(0.1));
    html::video(&mut out, &video.src);
    out.push_str("</div></div></section>");
    out
}
