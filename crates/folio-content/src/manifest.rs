//! Site manifest (`site.yaml`).
//!
//! Carries the owner profile, the homepage copy and the ordered list of case
//! studies. That order is the only source for homepage teasers and for
//! previous/next navigation.

use serde::Deserialize;

use crate::ContentError;

/// Site owner, shown in the header, contact section and footer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    #[serde(default)]
    pub resume: Option<String>,
    /// Small round header image.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Homepage teaser for one case study.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeaserEntry {
    /// File stem of the document under `case-studies/`.
    pub slug: String,
    #[serde(default)]
    pub metric: Option<String>,
    /// Overrides the document tags on the teaser card.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub image: String,
    #[serde(default)]
    pub mobile_image: Option<String>,
    /// CSS color for the card background.
    #[serde(default = "default_background")]
    pub background: String,
    /// Light text on a dark card.
    #[serde(default)]
    pub dark: bool,
}

fn default_background() -> String {
    "#F5F7FA".to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCopy {
    pub greeting: String,
    /// Headline lines, rendered with line breaks between them.
    pub headline: Vec<String>,
    pub intro: String,
    #[serde(default = "default_hero_button")]
    pub button_label: String,
}

fn default_hero_button() -> String {
    "See my work".to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Differentiator {
    pub title: String,
    pub description: String,
    /// Path to an icon image.
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WorkflowTool {
    pub name: String,
    /// Short role of the tool, e.g. "Design Exploration".
    #[serde(rename = "use")]
    pub purpose: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WorkflowCopy {
    pub intro: String,
    #[serde(default)]
    pub tools: Vec<WorkflowTool>,
    pub philosophy: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AboutCopy {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// All homepage copy.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HomeCopy {
    pub hero: HeroCopy,
    #[serde(default)]
    pub differentiators: Vec<Differentiator>,
    pub workflow: WorkflowCopy,
    pub about: AboutCopy,
}

/// Parsed `site.yaml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    pub owner: Profile,
    #[serde(default)]
    pub case_studies: Vec<TeaserEntry>,
    pub home: HomeCopy,
}

impl SiteManifest {
    /// Parse the manifest from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is empty, malformed or incomplete.
    pub fn from_yaml(content: &str) -> Result<Self, ContentError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(serde_yaml::from_str(trimmed)?)
    }

    /// Case-study slugs in site order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.case_studies.iter().map(|t| t.slug.as_str())
    }
}
