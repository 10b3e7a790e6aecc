//! Feature / process-step blocks.

use serde::Deserialize;

/// An image inside a feature's image list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureImage {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A nested step rendered with a smaller heading.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SubStep {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A score shown as a half-circle gauge (an NPS result, typically).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScoreMetric {
    pub score: f64,
    #[serde(default = "default_max")]
    pub max: f64,
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_max() -> f64 {
    10.0
}

fn default_label() -> String {
    "NPS".to_owned()
}

/// A feature, or a step of the design process.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: String,
    /// May contain line breaks; rendered with preserved newlines.
    pub description: String,
    pub description_after_image: Option<String>,
    pub image: Option<String>,
    pub images: Vec<FeatureImage>,
    pub video: Option<String>,
    pub sub_steps: Vec<SubStep>,
    pub score: Option<ScoreMetric>,
}
