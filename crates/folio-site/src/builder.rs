//! Static site builder.
//!
//! Writes every page as `{route}/index.html`, the embedded stylesheet and
//! script under `assets/`, and copies the content's `public/` directory to
//! the output root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_render::RenderOptions;

use crate::site::Site;

/// Output directory for the embedded stylesheet and script.
pub const ASSETS_DIR: &str = "assets";

/// Configuration for static site building.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub output_dir: PathBuf,
    /// Content root. The build refuses an `output_dir` that is this
    /// directory or one of its ancestors.
    pub source_dir: Option<PathBuf>,
    /// Remove `output_dir` before writing.
    pub clean: bool,
    pub render: RenderOptions,
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Embedded asset missing: {0}")]
    MissingAsset(String),
    #[error("Refusing to build into {}: {reason}", output.display())]
    UnsafeOutputDir {
        output: PathBuf,
        reason: &'static str,
    },
}

impl BuildError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// What a build wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub assets: usize,
    pub public_files: usize,
}

/// Builds a static site from a loaded [`Site`].
pub struct StaticSiteBuilder {
    config: BuildConfig,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Render and write the whole site.
    ///
    /// `public_dir`, when given, is copied verbatim into the output root.
    pub fn build(&self, site: &Site, public_dir: Option<&Path>) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        let out = &self.config.output_dir;
        check_output_dir(out, self.config.source_dir.as_deref(), public_dir)?;

        if self.config.clean && out.exists() {
            fs::remove_dir_all(out).map_err(BuildError::io(out))?;
        }
        fs::create_dir_all(out).map_err(BuildError::io(out))?;

        let mut report = BuildReport::default();

        if let Some(public) = public_dir {
            report.public_files = copy_dir(public, out)?;
        }

        report.assets = self.write_assets()?;

        for page in site.pages(&self.config.render) {
            let path = out.join(page.output_path());
            write_file(&path, page.html.as_bytes())?;
            tracing::debug!(route = %page.route, path = %path.display(), "Wrote page");
            report.pages += 1;
        }

        tracing::info!(
            pages = report.pages,
            assets = report.assets,
            public_files = report.public_files,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Site built"
        );
        Ok(report)
    }

    fn write_assets(&self) -> Result<usize, BuildError> {
        let dir = self.config.output_dir.join(ASSETS_DIR);
        let mut count = 0;
        for (name, data) in folio_assets::bundle() {
            let data = data.ok_or_else(|| BuildError::MissingAsset(name.to_owned()))?;
            write_file(&dir.join(name), &data)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Reject output locations that would wipe or recursively copy content.
fn check_output_dir(
    out: &Path,
    source_dir: Option<&Path>,
    public_dir: Option<&Path>,
) -> Result<(), BuildError> {
    let resolved = resolve(out).map_err(BuildError::io(out))?;
    let unsafe_dir = |reason| BuildError::UnsafeOutputDir {
        output: out.to_path_buf(),
        reason,
    };

    if let Some(source) = source_dir {
        let source = resolve(source).map_err(BuildError::io(source))?;
        if source.starts_with(&resolved) {
            return Err(unsafe_dir("it contains the content directory"));
        }
    }
    if let Some(public) = public_dir {
        let public = resolve(public).map_err(BuildError::io(public))?;
        if resolved.starts_with(&public) {
            return Err(unsafe_dir("it is inside the public directory"));
        }
    }
    Ok(())
}

/// Canonicalize the longest existing prefix of `path` and append the rest.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut rest = Vec::new();
    while !existing.exists() {
        let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
            break;
        };
        rest.push(name.to_owned());
        existing = parent;
    }
    let mut resolved = existing.canonicalize()?;
    resolved.extend(rest.iter().rev());
    Ok(resolved)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(BuildError::io(parent))?;
    }
    fs::write(path, contents).map_err(BuildError::io(path))
}

/// Recursively copy `src` into `dest`. Returns the number of files copied.
fn copy_dir(src: &Path, dest: &Path) -> Result<usize, BuildError> {
    let mut count = 0;
    let entries = fs::read_dir(src).map_err(BuildError::io(src))?;
    for entry in entries {
        let entry = entry.map_err(BuildError::io(src))?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            fs::create_dir_all(&target).map_err(BuildError::io(&target))?;
            count += copy_dir(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(BuildError::io(&target))?;
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::source::{ContentSource, FsSource};

    const MANIFEST: &str = r"
owner:
  name: Ada Rivera
  role: Product Designer
  location: Mexico City
  email: ada@example.com
  linkedin: https://example.com/in/ada
caseStudies:
  - slug: alpha
    image: /img/alpha.png
home:
  hero:
    greeting: Hi.
    headline: [Hello]
    intro: Designer.
  workflow:
    intro: AI.
    philosophy: Think.
  about:
    heading: Hey.
    paragraphs: [Hi]
";

    const ALPHA: &str = r#"
overview: { company: Acme, role: Designer, timeline: "2024", team: Two, platform: Web }
title: Alpha
subtitle: First
heroImageLabel: Cover
heroImage: "{{base}}/cover.png?v=2"
basePath: /img/alpha/
product: Product.
coreProblem: { headline: Problem, description: Detail }
coreImpact: { headline: Impact, description: Detail }
"#;

    fn content_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("case-studies")).unwrap();
        fs::create_dir_all(root.join("public/img/alpha")).unwrap();
        fs::write(root.join("site.yaml"), MANIFEST).unwrap();
        fs::write(root.join("case-studies/alpha.yaml"), ALPHA).unwrap();
        fs::write(root.join("public/img/alpha/cover.png"), b"png").unwrap();
        fs::write(root.join("public/resume.pdf"), b"pdf").unwrap();
        dir
    }

    fn try_build(content: &Path, out: &Path, clean: bool) -> Result<BuildReport, BuildError> {
        let source = FsSource::new(content);
        let site = Site::load(&source).unwrap();
        let builder = StaticSiteBuilder::new(BuildConfig {
            output_dir: out.to_path_buf(),
            source_dir: Some(content.to_path_buf()),
            clean,
            render: RenderOptions::default(),
        });
        builder.build(&site, source.public_dir().as_deref())
    }

    fn build(content: &Path, out: &Path, clean: bool) -> BuildReport {
        try_build(content, out, clean).unwrap()
    }

    #[test]
    fn test_build_writes_site() {
        let content = content_root();
        let out = tempfile::tempdir().unwrap();
        let report = build(content.path(), out.path(), true);

        assert_eq!(
            report,
            BuildReport {
                pages: 4,
                assets: 2,
                public_files: 2,
            }
        );
        let out = out.path();
        assert!(out.join("index.html").is_file());
        assert!(out.join("case-studies/index.html").is_file());
        assert!(out.join("about/index.html").is_file());
        assert!(out.join("assets/site.css").is_file());
        assert!(out.join("assets/site.js").is_file());
        assert_eq!(fs::read(out.join("img/alpha/cover.png")).unwrap(), b"png");

        let page = fs::read_to_string(out.join("case-studies/alpha/index.html")).unwrap();
        assert!(page.contains("src=\"/img/alpha/cover.png?v=2\""));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let content = content_root();
        let out = tempfile::tempdir().unwrap();
        fs::write(out.path().join("stale.html"), "old").unwrap();

        build(content.path(), out.path(), false);
        assert!(out.path().join("stale.html").exists());

        build(content.path(), out.path(), true);
        assert!(!out.path().join("stale.html").exists());
    }

    #[test]
    fn test_refuses_parent_of_content() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(content.join("case-studies")).unwrap();
        fs::write(content.join("site.yaml"), MANIFEST).unwrap();
        fs::write(content.join("case-studies/alpha.yaml"), ALPHA).unwrap();

        let err = try_build(&content, tmp.path(), true).unwrap_err();
        assert!(matches!(err, BuildError::UnsafeOutputDir { .. }), "{err}");
        assert!(content.join("site.yaml").is_file());
    }

    #[test]
    fn test_refuses_content_dir_itself() {
        let content = content_root();
        let err = try_build(content.path(), content.path(), true).unwrap_err();
        assert!(matches!(err, BuildError::UnsafeOutputDir { .. }), "{err}");
        assert!(content.path().join("site.yaml").is_file());
    }

    #[test]
    fn test_refuses_output_inside_public() {
        let content = content_root();
        let out = content.path().join("public/dist");
        let err = try_build(content.path(), &out, false).unwrap_err();
        assert!(matches!(err, BuildError::UnsafeOutputDir { .. }), "{err}");
        assert!(!out.exists());
    }

    #[test]
    fn test_sibling_output_allowed() {
        let tmp = tempfile::tempdir().unwrap();
        let content = content_root();
        let out = tmp.path().join("dist/site");
        let report = build(content.path(), &out, true);
        assert_eq!(report.pages, 4);
        assert!(content.path().join("site.yaml").is_file());
    }
}
