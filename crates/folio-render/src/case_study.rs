//! Case-study page body in its fixed section order.

use folio_content::{CaseStudyDocument, CaseStudyNav};

use crate::sections::{
    CtaTarget, render_cta, render_decisions, render_features, render_hero, render_impact,
    render_navigation, render_problem, render_product, render_results, render_video,
};

/// Sections a case study can contain, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Product,
    Problem,
    Impact,
    Features,
    Video,
    Results,
    Decisions,
    Cta,
    Navigation,
}

/// One rendered section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub html: String,
}

/// Rendered case-study body, section by section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedCaseStudy {
    sections: Vec<RenderedSection>,
}

impl RenderedCaseStudy {
    fn push(&mut self, kind: SectionKind, html: String) {
        self.sections.push(RenderedSection { kind, html });
    }

    pub fn sections(&self) -> &[RenderedSection] {
        &self.sections
    }

    /// Section kinds in the order they were rendered.
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    /// Concatenated body HTML.
    pub fn html(&self) -> String {
        self.sections.iter().map(|s| s.html.as_str()).collect()
    }
}

/// Site-level knobs that are not part of any document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    pub cta: CtaTarget,
    /// Mixed into every shape scatter.
    pub shape_seed: u64,
}

/// Render a case study.
///
/// Order is Hero, Product, Problem, Impact, Features, Video, Results,
/// Decisions, CTA, Navigation. Features, Video, Results and Navigation are
/// skipped when their data is absent. `route` is the page's own href and
/// is looked up in `nav` for the prev/next links.
pub fn render_case_study(
    doc: &CaseStudyDocument,
    route: &str,
    nav: &CaseStudyNav,
    options: &RenderOptions,
) -> RenderedCaseStudy {
    let mut page = RenderedCaseStudy::default();

    page.push(SectionKind::Hero, render_hero(doc));
    page.push(SectionKind::Product, render_product(&doc.product));
    page.push(SectionKind::Problem, render_problem(&doc.core_problem));
    page.push(SectionKind::Impact, render_impact(&doc.core_impact));

    if let Some(html) = render_features(&doc.features_copy, &doc.features) {
        page.push(SectionKind::Features, html);
    }
    if let Some(video) = &doc.video {
        page.push(SectionKind::Video, render_video(video));
    }
    if let Some(html) = doc.results.as_ref().and_then(render_results) {
        page.push(SectionKind::Results, html);
    }

    page.push(SectionKind::Decisions, render_decisions(&doc.decisions));
    page.push(
        SectionKind::Cta,
        render_cta(&doc.call_to_action(), &options.cta),
    );

    if let Some(html) = render_navigation(nav.neighbors(route)) {
        page.push(SectionKind::Navigation, html);
    }

    page
}
