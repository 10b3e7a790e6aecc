//! Where site content comes from.
//!
//! A content root holds:
//! - `site.yaml`: the [`SiteManifest`](folio_content::SiteManifest)
//! - `case-studies/{slug}.yaml`: one document per case study
//! - `public/`: images, video and other files copied verbatim

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub(crate) const MANIFEST_FILE: &str = "site.yaml";
pub(crate) const CASE_STUDIES_DIR: &str = "case-studies";
pub(crate) const PUBLIC_DIR: &str = "public";
const EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Error reading raw content.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    fn io(err: io::Error, path: PathBuf) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source: err }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Whether `slug` is usable as a file stem and a route segment:
/// non-empty, lowercase ASCII letters, digits and `-` only.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Read access to raw site content.
pub trait ContentSource: Send + Sync {
    /// Raw `site.yaml`.
    fn manifest(&self) -> Result<String, SourceError>;

    /// Raw document for `slug`.
    ///
    /// Returns [`SourceError::NotFound`] when there is no such document.
    fn case_study(&self, slug: &str) -> Result<String, SourceError>;

    /// Slugs of every document present, sorted.
    fn case_study_slugs(&self) -> Result<Vec<String>, SourceError>;

    /// Directory whose contents are copied to the output root, if any.
    fn public_dir(&self) -> Option<PathBuf>;
}

/// Content root on the local filesystem.
#[derive(Clone, Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(path: PathBuf) -> Result<String, SourceError> {
        fs::read_to_string(&path).map_err(|e| SourceError::io(e, path))
    }
}

impl ContentSource for FsSource {
    fn manifest(&self) -> Result<String, SourceError> {
        Self::read(self.root.join(MANIFEST_FILE))
    }

    fn case_study(&self, slug: &str) -> Result<String, SourceError> {
        let dir = self.root.join(CASE_STUDIES_DIR);
        if !is_valid_slug(slug) {
            return Err(SourceError::NotFound(dir));
        }
        for ext in EXTENSIONS {
            let path = dir.join(format!("{slug}.{ext}"));
            if path.is_file() {
                return Self::read(path);
            }
        }
        Err(SourceError::NotFound(dir.join(format!("{slug}.yaml"))))
    }

    fn case_study_slugs(&self) -> Result<Vec<String>, SourceError> {
        let dir = self.root.join(CASE_STUDIES_DIR);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SourceError::io(e, dir)),
        };

        let mut slugs = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| SourceError::io(e, dir.clone()))?.path();
            let is_yaml = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| EXTENSIONS.contains(&e));
            if !path.is_file() || !is_yaml {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                slugs.push(stem.to_owned());
            }
        }
        slugs.sort();
        slugs.dedup();
        Ok(slugs)
    }

    fn public_dir(&self) -> Option<PathBuf> {
        let dir = self.root.join(PUBLIC_DIR);
        dir.is_dir().then_some(dir)
    }
}

/// In-memory content for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    manifest: Option<String>,
    documents: std::collections::BTreeMap<String, String>,
    public_dir: Option<PathBuf>,
}

#[cfg(any(test, feature = "mock"))]
impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_manifest(mut self, yaml: impl Into<String>) -> Self {
        self.manifest = Some(yaml.into());
        self
    }

    #[must_use]
    pub fn with_case_study(mut self, slug: impl Into<String>, yaml: impl Into<String>) -> Self {
        self.documents.insert(slug.into(), yaml.into());
        self
    }

    #[must_use]
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }
}

#[cfg(any(test, feature = "mock"))]
impl ContentSource for MemorySource {
    fn manifest(&self) -> Result<String, SourceError> {
        self.manifest
            .clone()
            .ok_or_else(|| SourceError::NotFound(PathBuf::from(MANIFEST_FILE)))
    }

    fn case_study(&self, slug: &str) -> Result<String, SourceError> {
        self.documents.get(slug).cloned().ok_or_else(|| {
            SourceError::NotFound(Path::new(CASE_STUDIES_DIR).join(format!("{slug}.yaml")))
        })
    }

    fn case_study_slugs(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.documents.keys().cloned().collect())
    }

    fn public_dir(&self) -> Option<PathBuf> {
        self.public_dir.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fs_source_reads_layout() {
        let dir = tempfile::tempdir().unwrap();
        let studies = dir.path().join(CASE_STUDIES_DIR);
        fs::create_dir_all(&studies).unwrap();
        fs::create_dir_all(dir.path().join(PUBLIC_DIR)).unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "owner: {}").unwrap();
        fs::write(studies.join("beta.yaml"), "title: Beta").unwrap();
        fs::write(studies.join("alpha.yml"), "title: Alpha").unwrap();
        fs::write(studies.join("notes.md"), "ignored").unwrap();

        let source = FsSource::new(dir.path());
        assert_eq!(source.manifest().unwrap(), "owner: {}");
        assert_eq!(source.case_study_slugs().unwrap(), vec!["alpha", "beta"]);
        assert_eq!(source.case_study("alpha").unwrap(), "title: Alpha");
        assert_eq!(source.public_dir(), Some(dir.path().join(PUBLIC_DIR)));
    }

    #[test]
    fn test_fs_source_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::new(dir.path());
        assert!(source.case_study("ghost").unwrap_err().is_not_found());
        assert!(source.manifest().unwrap_err().is_not_found());
        assert!(source.case_study_slugs().unwrap().is_empty());
        assert!(source.public_dir().is_none());
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("c3-genai"));
        assert!(is_valid_slug("wizeline-learning"));
        for bad in ["", "../x", "a/b", "Alpha", "two words", "a.b", "..", "\\x"] {
            assert!(!is_valid_slug(bad), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_fs_source_rejects_path_slugs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(CASE_STUDIES_DIR)).unwrap();
        fs::write(dir.path().join("secret.yaml"), "title: Outside").unwrap();

        let source = FsSource::new(dir.path());
        assert!(source.case_study("../secret").unwrap_err().is_not_found());
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new()
            .with_manifest("owner: {}")
            .with_case_study("b", "x")
            .with_case_study("a", "y");
        assert_eq!(source.case_study_slugs().unwrap(), vec!["a", "b"]);
        assert!(source.case_study("c").unwrap_err().is_not_found());
    }
}
