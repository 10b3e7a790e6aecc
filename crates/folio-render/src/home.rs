//! Homepage, case-study listing and the about placeholder.

use std::fmt::Write;

use folio_content::{
    AboutCopy, CaseStudyDocument, HeroCopy, Profile, SiteManifest, TeaserEntry, WorkflowCopy,
    case_study_href,
};

use crate::html::{self, SVG_ARROW_DOWN, SVG_ARROW_RIGHT, escape};
use crate::shapes::{SceneId, render_shapes};

/// A manifest teaser paired with the document it points at.
#[derive(Clone, Copy, Debug)]
pub struct Teaser<'a> {
    pub entry: &'a TeaserEntry,
    pub doc: &'a CaseStudyDocument,
}

impl Teaser<'_> {
    fn tags(&self) -> &[String] {
        self.entry.tags.as_deref().unwrap_or(&self.doc.tags)
    }
}

/// Render the homepage body.
///
/// `teasers` must already be in manifest order.
pub fn render_home(manifest: &SiteManifest, teasers: &[Teaser<'_>], shape_seed: u64) -> String {
    let home = &manifest.home;
    let mut out = String::with_capacity(16 * 1024);
    render_hero(&mut out, &home.hero);
    render_work(&mut out, teasers, shape_seed);
    render_differentiators(&mut out, manifest, shape_seed);
    render_workflow(&mut out, &home.workflow, shape_seed);
    render_about(&mut out, &home.about, shape_seed);
    render_contact(&mut out, &manifest.owner, shape_seed);
    out
}

fn render_hero(out: &mut String, hero: &HeroCopy) {
    out.push_str("<section class=\"home-hero\"><div class=\"container\">");
    let _ = write!(
        out,
        "<p class=\"greeting\"{}>{}</p><h1{}>",
        html::reveal(0.0),
        escape(&hero.greeting),
        html::reveal(0.1),
    );
    for (idx, line) in hero.headline.iter().enumerate() {
        if idx > 0 {
            out.push_str("<br>");
        }
        out.push_str(&escape(line));
    }
    let _ = write!(
        out,
        "</h1><p class=\"lead\"{}>{}</p>",
        html::reveal(0.2),
        escape(&hero.intro)
    );
    let _ = write!(
        out,
        "<a class=\"floating-button\" href=\"#work\">{}{SVG_ARROW_DOWN}</a></div></section>",
        escape(&hero.button_label)
    );
}

fn section_open(out: &mut String, id: Option<&str>, class: &str, scene: SceneId, seed: u64) {
    match id {
        Some(id) => {
            let _ = write!(out, "<section id=\"{id}\" class=\"home-section {class}\">");
        }
        None => {
            let _ = write!(out, "<section class=\"home-section {class}\">");
        }
    }
    render_shapes(out, scene, seed);
    out.push_str("<div class=\"container\">");
}

fn heading(out: &mut String, label: &str, title: &str) {
    let _ = write!(out, "<div{}>", html::reveal(0.0));
    html::section_label(out, label);
    let _ = write!(out, "<h2>{}</h2></div>", escape(title));
}

fn render_work(out: &mut String, teasers: &[Teaser<'_>], seed: u64) {
    section_open(out, Some("work"), "bg-white", SceneId::CaseStudies, seed);
    heading(out, "Selected Work", "Case Studies");
    render_teaser_list(out, teasers);
    out.push_str("</div></section>");
}

fn render_teaser_list(out: &mut String, teasers: &[Teaser<'_>]) {
    out.push_str("<div class=\"teasers\">");
    for (idx, teaser) in teasers.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let delay = idx as f64 * 0.1;
        render_teaser(out, teaser, delay);
    }
    out.push_str("</div>");
}

fn render_teaser(out: &mut String, teaser: &Teaser<'_>, delay: f64) {
    let entry = teaser.entry;
    let doc = teaser.doc;
    let theme = if entry.dark { "teaser teaser-dark" } else { "teaser" };
    let _ = write!(
        out,
        "<a class=\"{theme}\" href=\"{}\" style=\"background:{}\"{}>",
        escape(&case_study_href(&entry.slug)),
        escape(&entry.background),
        html::reveal(delay),
    );
    let _ = write!(
        out,
        "<div class=\"teaser-text\"><p class=\"company\">{}</p><h3>{}</h3><p class=\"body\">{}</p>",
        escape(&doc.overview.company),
        escape(&doc.title),
        escape(&doc.subtitle),
    );
    html::tags(out, "tags", teaser.tags());
    if let Some(metric) = &entry.metric {
        let _ = write!(out, "<p class=\"teaser-metric\">{}</p>", escape(metric));
    }
    let _ = write!(
        out,
        "<span class=\"teaser-link\">View case study{SVG_ARROW_RIGHT}</span></div>"
    );
    out.push_str("<div class=\"teaser-media\">");
    let _ = write!(
        out,
        "<img class=\"teaser-image\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
        escape(&entry.image),
        escape(&doc.title),
    );
    if let Some(mobile) = &entry.mobile_image {
        let _ = write!(
            out,
            "<img class=\"teaser-mobile\" src=\"{}\" alt=\"{} mobile\" loading=\"lazy\">",
            escape(mobile),
            escape(&doc.title),
        );
    }
    out.push_str("</div></a>");
}

fn render_differentiators(out: &mut String, manifest: &SiteManifest, seed: u64) {
    let items = &manifest.home.differentiators;
    if items.is_empty() {
        return;
    }
    section_open(out, None, "bg-card", SceneId::WhatSetsApart, seed);
    heading(out, "Why Me", "What Sets Me Apart");
    out.push_str("<div class=\"card-grid card-grid-3\">");
    for (idx, item) in items.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let delay = idx as f64 * 0.08;
        let _ = write!(out, "<div class=\"card differentiator\"{}>", html::reveal(delay));
        if let Some(icon) = &item.icon {
            let _ = write!(
                out,
                "<span class=\"icon-badge\" data-icon=\"{}\" aria-hidden=\"true\"></span>",
                escape(icon)
            );
        }
        let _ = write!(
            out,
            "<h3>{}</h3><p class=\"body\">{}</p></div>",
            escape(&item.title),
            escape(&item.description)
        );
    }
    out.push_str("</div></div></section>");
}

fn render_workflow(out: &mut String, workflow: &WorkflowCopy, seed: u64) {
    section_open(out, None, "bg-white", SceneId::HowIUseAi, seed);
    heading(out, "My Workflow", "How I Use AI");
    html::paragraph(out, "lead", &workflow.intro);
    out.push_str("<div class=\"tools\">");
    for (idx, tool) in workflow.tools.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let delay = idx as f64 * 0.08;
        let _ = write!(
            out,
            "<div class=\"tool\"{}><img class=\"tool-icon\" src=\"{}\" alt=\"\" loading=\"lazy\">\
             <div><h3>{}</h3><p class=\"tool-use\">{}</p><p class=\"body\">{}</p></div></div>",
            html::reveal(delay),
            escape(&tool.icon),
            escape(&tool.name),
            escape(&tool.purpose),
            escape(&tool.description),
        );
    }
    out.push_str("</div>");
    let _ = write!(out, "<div class=\"philosophy\"{}>", html::reveal(0.2));
    html::block_label(out, "My philosophy");
    html::paragraph(out, "body", &workflow.philosophy);
    out.push_str("</div></div></section>");
}

fn render_about(out: &mut String, about: &AboutCopy, seed: u64) {
    section_open(out, Some("about"), "bg-card", SceneId::AboutMe, seed);
    out.push_str("<div class=\"about\">");
    if let Some(photo) = &about.photo {
        let _ = write!(out, "<div class=\"about-photo\"{}>", html::reveal(0.0));
        html::framed_image(out, photo, &about.heading);
        out.push_str("</div>");
    }
    let _ = write!(out, "<div class=\"about-text\"{}>", html::reveal(0.1));
    html::section_label(out, "About Me");
    let _ = write!(out, "<h2>{}</h2>", escape(&about.heading));
    for paragraph in &about.paragraphs {
        html::paragraph(out, "body", paragraph);
    }
    let _ = write!(
        out,
        "<a class=\"text-link\" href=\"/about/\">More about me{SVG_ARROW_RIGHT}</a></div></div></div></section>"
    );
}

fn render_contact(out: &mut String, owner: &Profile, seed: u64) {
    section_open(out, Some("contact"), "bg-dark", SceneId::Contact, seed);
    let _ = write!(out, "<div class=\"contact\"{}>", html::reveal(0.0));
    html::section_label(out, "Contact");
    let _ = write!(
        out,
        "<h2>{}</h2><p class=\"lead\">{} · {}</p><ul class=\"contact-links\">",
        escape(&owner.name),
        escape(&owner.role),
        escape(&owner.location),
    );
    let _ = write!(
        out,
        "<li><a href=\"mailto:{0}\">{0}</a></li><li><a href=\"{1}\" target=\"_blank\" rel=\"noopener noreferrer\">LinkedIn</a></li>",
        escape(&owner.email),
        escape(&owner.linkedin),
    );
    if let Some(resume) = &owner.resume {
        let _ = write!(
            out,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Resume</a></li>",
            escape(resume)
        );
    }
    let _ = write!(
        out,
        "</ul><p class=\"credit\">Designed and built by {}</p></div></div></section>",
        escape(&owner.name)
    );
}

/// Body of `/case-studies/`.
pub fn render_listing(teasers: &[Teaser<'_>]) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<section class=\"home-section bg-white listing\"><div class=\"container\">");
    heading(&mut out, "Selected Work", "All Case Studies");
    render_teaser_list(&mut out, teasers);
    out.push_str("</div></section>");
    out
}

/// Body of `/about/`.
pub fn render_about_placeholder() -> String {
    let mut out = String::with_capacity(512);
    let _ = write!(
        out,
        "<section class=\"home-section placeholder-page\"><div class=\"container\"><div{}>",
        html::reveal(0.0)
    );
    out.push_str("<h1>About Me</h1><p class=\"lead\">Full about page coming soon.</p>");
    out.push_str("<a class=\"text-link\" href=\"/\">Back to home</a></div></div></section>");
    out
}
