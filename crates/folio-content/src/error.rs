/// Error type for content loading.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),

    /// The document was empty or whitespace only.
    #[error("Document is empty")]
    Empty,
}

impl From<serde_yaml::Error> for ContentError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(format!("Invalid YAML: {e}"))
    }
}
