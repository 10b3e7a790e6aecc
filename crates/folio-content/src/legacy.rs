//! Authored document shape and its normalization into the canonical schema.
//!
//! The authored YAML keeps the historical flat layout: every decision field
//! is optional, the payload kind is implied by which fields are present, the
//! layout is a boolean and the feature gauge is called `nps`. This module is
//! the only place that knows about that shape.
//!
//! Payload precedence, first match wins:
//! 1. `simpleFormat: true`
//! 2. non-empty `options`
//! 3. `approach`
//! 4. a lone `whatWeDid`
//! 5. otherwise `Bare`

use serde::Deserialize;

use crate::decision::{Approach, DecisionBody, DecisionOption, DecisionsLayout, DesignDecision};
use crate::document::{
    CaseStudyDocument, CtaOverride, DecisionsSection, ExtraCard, FeaturesCopy, HeroImage,
    Learning, NextStudy, Overview, ResultsSection, TextBlock, VideoSection,
};
use crate::feature::{Feature, FeatureImage, ScoreMetric, SubStep};

/// Placeholder replaced by the document's `basePath` in path fields.
const BASE_PLACEHOLDER: &str = "{{base}}";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDocument {
    #[serde(default)]
    base_path: Option<String>,
    #[serde(default)]
    description: Option<String>,
    overview: Overview,
    #[serde(default)]
    tags: Vec<String>,
    title: String,
    subtitle: String,
    #[serde(default)]
    hero_image_label: String,
    #[serde(default)]
    hero_image: Option<String>,
    product: String,
    core_problem: TextBlock,
    core_impact: TextBlock,
    #[serde(default)]
    features: Vec<RawFeature>,
    #[serde(default)]
    features_section_label: Option<String>,
    #[serde(default)]
    features_section_title: Option<String>,
    #[serde(default)]
    features_section_description: Option<String>,
    #[serde(default)]
    design_decisions_section_title: Option<String>,
    #[serde(default)]
    results_section: Option<ResultsSection>,
    #[serde(default)]
    design_decisions: Vec<RawDecision>,
    #[serde(default)]
    design_decisions_as_cards: bool,
    #[serde(default)]
    extra_decision_cards: Vec<ExtraCard>,
    #[serde(default)]
    video_section: Option<VideoSection>,
    #[serde(default)]
    cta: Option<CtaOverride>,
    #[serde(default)]
    learnings: Vec<Learning>,
    #[serde(default)]
    next_study: Option<NextStudy>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFeature {
    title: String,
    description: String,
    #[serde(default)]
    description_after_image: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    images: Vec<FeatureImage>,
    #[serde(default)]
    video: Option<String>,
    #[serde(default)]
    sub_steps: Vec<SubStep>,
    #[serde(default)]
    nps: Option<ScoreMetric>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDecision {
    number: u32,
    title: String,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    why_it_mattered: String,
    #[serde(default)]
    options: Vec<DecisionOption>,
    #[serde(default)]
    chosen: Option<String>,
    #[serde(default)]
    why_chosen: Option<String>,
    #[serde(default)]
    approach: Option<Approach>,
    #[serde(default)]
    simple_format: bool,
    #[serde(default)]
    what_we_did: Option<String>,
    #[serde(default)]
    tradeoff: String,
    #[serde(default)]
    impact: Option<String>,
    #[serde(default)]
    image_label: String,
    #[serde(default)]
    image: Option<String>,
}

/// Expands `{{base}}` in asset paths.
struct PathResolver<'a> {
    base: &'a str,
}

impl PathResolver<'_> {
    fn path(&self, path: String) -> String {
        if path.contains(BASE_PLACEHOLDER) {
            path.replace(BASE_PLACEHOLDER, self.base)
        } else {
            path
        }
    }

    fn opt(&self, path: Option<String>) -> Option<String> {
        path.map(|p| self.path(p))
    }
}

impl RawDocument {
    pub(crate) fn normalize(self) -> CaseStudyDocument {
        let base = self.base_path.as_deref().unwrap_or_default();
        let paths = PathResolver {
            base: base.trim_end_matches('/'),
        };

        let features = self
            .features
            .into_iter()
            .map(|f| f.normalize(&paths))
            .collect();

        let items = self
            .design_decisions
            .into_iter()
            .map(|d| d.normalize(&paths))
            .collect();

        let layout = if self.design_decisions_as_cards {
            DecisionsLayout::Cards
        } else {
            DecisionsLayout::LongForm
        };

        CaseStudyDocument {
            overview: self.overview,
            description: self.description,
            tags: self.tags,
            title: self.title,
            subtitle: self.subtitle,
            hero: HeroImage {
                label: self.hero_image_label,
                src: paths.opt(self.hero_image),
            },
            product: self.product,
            core_problem: self.core_problem,
            core_impact: self.core_impact,
            features_copy: FeaturesCopy::resolve(
                self.features_section_label,
                self.features_section_title,
                self.features_section_description,
            ),
            features,
            video: self.video_section.map(|v| VideoSection {
                label: v.label,
                src: paths.path(v.src),
            }),
            results: self.results_section,
            decisions: DecisionsSection {
                layout,
                title: self
                    .design_decisions_section_title
                    .unwrap_or_else(|| DecisionsSection::DEFAULT_TITLE.to_owned()),
                items,
                extra_cards: self.extra_decision_cards,
            },
            cta: self.cta,
            learnings: self.learnings,
            next_study: self.next_study,
        }
    }
}

impl RawFeature {
    fn normalize(self, paths: &PathResolver<'_>) -> Feature {
        Feature {
            title: self.title,
            description: self.description,
            description_after_image: self.description_after_image,
            image: paths.opt(self.image),
            images: self
                .images
                .into_iter()
                .map(|img| FeatureImage {
                    src: paths.path(img.src),
                    ..img
                })
                .collect(),
            video: paths.opt(self.video),
            sub_steps: self
                .sub_steps
                .into_iter()
                .map(|step| SubStep {
                    image: paths.opt(step.image),
                    ..step
                })
                .collect(),
            score: self.nps,
        }
    }
}

impl RawDecision {
    fn normalize(self, paths: &PathResolver<'_>) -> DesignDecision {
        let mut what_we_did = self.what_we_did;
        let body = if self.simple_format {
            if !self.options.is_empty() || self.approach.is_some() {
                tracing::debug!(
                    decision = self.number,
                    "simpleFormat decision also lists options or an approach; ignoring them"
                );
            }
            DecisionBody::Simple {
                what_we_did: what_we_did.take().unwrap_or_default(),
            }
        } else if !self.options.is_empty() {
            if self.approach.is_some() {
                tracing::debug!(
                    decision = self.number,
                    "decision lists both options and an approach; ignoring the approach"
                );
            }
            DecisionBody::Options {
                question: self.question,
                options: self.options,
                chosen: self.chosen,
                why_chosen: self.why_chosen,
            }
        } else if let Some(approach) = self.approach {
            DecisionBody::Approach {
                question: self.question,
                approach,
            }
        } else if let Some(what_we_did) = what_we_did.take() {
            DecisionBody::Simple { what_we_did }
        } else {
            DecisionBody::Bare {
                question: self.question,
            }
        };

        DesignDecision {
            number: self.number,
            title: self.title,
            why_it_mattered: self.why_it_mattered,
            tradeoff: self.tradeoff,
            impact: self.impact,
            what_we_did,
            image_label: self.image_label,
            image: paths.opt(self.image),
            body,
        }
    }
}
