//! Site loading and static site building for Folio.
//!
//! This crate provides:
//! - [`ContentSource`]: read access to raw content, with [`FsSource`] for a
//!   content directory and `MemorySource` for tests (behind the `mock` feature)
//! - [`Site`]: the manifest plus every listed document, in manifest order,
//!   with navigation and [`SiteLint`]s
//! - [`StaticSiteBuilder`]: writes pages, assets and public files to disk
//!
//! # Example
//!
//! ```ignore
//! use folio_site::{BuildConfig, ContentSource, FsSource, Site, StaticSiteBuilder};
//!
//! let source = FsSource::new("content");
//! let site = Site::load(&source)?;
//! let builder = StaticSiteBuilder::new(BuildConfig {
//!     output_dir: "dist".into(),
//!     source_dir: Some("content".into()),
//!     clean: true,
//!     render: Default::default(),
//! });
//! let report = builder.build(&site, source.public_dir().as_deref())?;
//! ```

mod builder;
mod site;
mod source;

pub use builder::{ASSETS_DIR, BuildConfig, BuildError, BuildReport, StaticSiteBuilder};
pub use site::{LoadedCaseStudy, Page, Site, SiteError, SiteLint};
#[cfg(any(test, feature = "mock"))]
pub use source::MemorySource;
pub use source::{ContentSource, FsSource, SourceError, is_valid_slug};
