//! Canonical case-study document.
//!
//! [`CaseStudyDocument`] is what renderers consume. It is produced from the
//! authored YAML by [`CaseStudyDocument::from_yaml`], which runs the legacy
//! normalization step, and is treated as immutable afterwards.

use serde::Deserialize;

use crate::ContentError;
use crate::decision::{DecisionsLayout, DesignDecision};
use crate::feature::Feature;
use crate::legacy::RawDocument;

/// Project metadata shown in the hero grid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Overview {
    pub company: String,
    pub role: String,
    pub timeline: String,
    pub team: String,
    pub platform: String,
    #[serde(default)]
    pub confidentiality: Option<String>,
}

/// Headline plus supporting paragraph.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TextBlock {
    pub headline: String,
    pub description: String,
}

/// Hero image, or the label to show on its placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroImage {
    pub label: String,
    pub src: Option<String>,
}

/// Copy for the features section heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeaturesCopy {
    pub label: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

impl FeaturesCopy {
    pub const DEFAULT_TITLE: &'static str = "Gen AI experience";
    pub const DEFAULT_DESCRIPTION: &'static str =
        "Main Gen AI capabilities and how they show up in the product.";

    /// Resolve authored overrides against the defaults.
    ///
    /// Label has no default. An explicitly empty label or description
    /// suppresses that line.
    pub fn resolve(
        label: Option<String>,
        title: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            label: label.filter(|l| !l.is_empty()),
            title: title.unwrap_or_else(|| Self::DEFAULT_TITLE.to_owned()),
            description: description
                .map_or_else(|| Some(Self::DEFAULT_DESCRIPTION.to_owned()), Some)
                .filter(|d| !d.is_empty()),
        }
    }
}

impl Default for FeaturesCopy {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

/// One result metric. The value is shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Metric {
    pub value: String,
    pub description: String,
}

/// Results block shown before the design decisions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResultsSection {
    #[serde(default)]
    pub label: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// Standalone walkthrough video.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VideoSection {
    pub label: String,
    pub src: String,
}

/// Additional card appended after the decision cards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExtraCard {
    pub title: String,
    pub description: String,
}

/// Per-document call-to-action overrides. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaOverride {
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub button_label: Option<String>,
}

/// Fully resolved call-to-action copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub tagline: String,
    pub heading: String,
    pub body: String,
    pub button_label: String,
}

impl CallToAction {
    pub const DEFAULT_TAGLINE: &'static str = "Design with intention,";
    pub const DEFAULT_HEADING: &'static str = "Let's talk.";
    pub const DEFAULT_BODY: &'static str = "Walk through the details or make something together.";
    pub const DEFAULT_BUTTON_LABEL: &'static str = "Let's talk";

    /// Apply overrides field by field over the defaults.
    pub fn resolve(overrides: Option<&CtaOverride>) -> Self {
        let pick = |value: Option<&String>, default: &str| {
            value.map_or_else(|| default.to_owned(), Clone::clone)
        };
        Self {
            tagline: pick(
                overrides.and_then(|o| o.tagline.as_ref()),
                Self::DEFAULT_TAGLINE,
            ),
            heading: pick(
                overrides.and_then(|o| o.heading.as_ref()),
                Self::DEFAULT_HEADING,
            ),
            body: pick(overrides.and_then(|o| o.body.as_ref()), Self::DEFAULT_BODY),
            button_label: pick(
                overrides.and_then(|o| o.button_label.as_ref()),
                Self::DEFAULT_BUTTON_LABEL,
            ),
        }
    }
}

/// Learning entry kept for older documents. Never rendered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Learning {
    pub title: String,
    pub description: String,
}

/// Pointer to the following case study kept for older documents.
///
/// Navigation comes from the site manifest; this is only checked for staleness.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NextStudy {
    pub company: String,
    pub title: String,
    pub href: String,
}

/// Design decisions plus how to lay them out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionsSection {
    pub layout: DecisionsLayout,
    /// Heading used in card mode.
    pub title: String,
    pub items: Vec<DesignDecision>,
    pub extra_cards: Vec<ExtraCard>,
}

impl DecisionsSection {
    pub const DEFAULT_TITLE: &'static str = "What I decided and why";
}

/// A complete, normalized case study.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseStudyDocument {
    pub overview: Overview,
    /// Page meta description. Falls back to the subtitle when absent.
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub title: String,
    pub subtitle: String,
    pub hero: HeroImage,
    pub product: String,
    pub core_problem: TextBlock,
    pub core_impact: TextBlock,
    pub features_copy: FeaturesCopy,
    pub features: Vec<Feature>,
    pub video: Option<VideoSection>,
    pub results: Option<ResultsSection>,
    pub decisions: DecisionsSection,
    pub cta: Option<CtaOverride>,
    pub learnings: Vec<Learning>,
    pub next_study: Option<NextStudy>,
}

impl CaseStudyDocument {
    /// Parse and normalize a document from authored YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is empty or the YAML is malformed or
    /// missing required fields.
    pub fn from_yaml(content: &str) -> Result<Self, ContentError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ContentError::Empty);
        }
        let raw: RawDocument = serde_yaml::from_str(trimmed)?;
        Ok(raw.normalize())
    }

    /// Resolved call-to-action copy.
    pub fn call_to_action(&self) -> CallToAction {
        CallToAction::resolve(self.cta.as_ref())
    }

    /// Meta description for the page head.
    pub fn meta_description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.subtitle)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_features_copy_defaults() {
        let copy = FeaturesCopy::default();
        assert_eq!(copy.label, None);
        assert_eq!(copy.title, "Gen AI experience");
        assert_eq!(
            copy.description.as_deref(),
            Some("Main Gen AI capabilities and how they show up in the product.")
        );
    }

    #[test]
    fn test_features_copy_empty_strings_suppress() {
        let copy = FeaturesCopy::resolve(
            Some(String::new()),
            Some("The design process".to_owned()),
            Some(String::new()),
        );
        assert_eq!(copy.label, None);
        assert_eq!(copy.title, "The design process");
        assert_eq!(copy.description, None);
    }

    #[test]
    fn test_cta_defaults() {
        let cta = CallToAction::resolve(None);
        assert_eq!(cta.tagline, "Design with intention,");
        assert_eq!(cta.heading, "Let's talk.");
        assert_eq!(
            cta.body,
            "Walk through the details or make something together."
        );
        assert_eq!(cta.button_label, "Let's talk");
    }

    #[test]
    fn test_cta_partial_override() {
        let overrides = CtaOverride {
            heading: Some("Say hi.".to_owned()),
            ..Default::default()
        };
        let cta = CallToAction::resolve(Some(&overrides));
        assert_eq!(cta.heading, "Say hi.");
        assert_eq!(cta.tagline, "Design with intention,");
        assert_eq!(cta.button_label, "Let's talk");
    }

    #[test]
    fn test_from_yaml_empty() {
        assert!(matches!(
            CaseStudyDocument::from_yaml("  \n"),
            Err(ContentError::Empty)
        ));
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result = CaseStudyDocument::from_yaml("title: [unclosed");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_from_yaml_missing_required_field() {
        let result = CaseStudyDocument::from_yaml("title: Only a title");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}
