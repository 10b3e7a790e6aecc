//! Loaded site: manifest, documents in manifest order, navigation and lints.

use std::collections::HashSet;
use std::fmt;

use folio_content::{
    CaseStudyDocument, CaseStudyNav, ContentError, Lint, NavEntry, SiteManifest, TeaserEntry,
    case_study_href, lint_document,
};
use folio_render::{
    PageShell, RenderOptions, Teaser, render_about_placeholder, render_case_study, render_home,
    render_listing, render_page,
};

use crate::source::{ContentSource, SourceError, is_valid_slug};

/// Error loading a site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("site.yaml: {0}")]
    Manifest(#[source] ContentError),
    #[error("case study '{slug}': {source}")]
    Document {
        slug: String,
        #[source]
        source: ContentError,
    },
}

/// Authoring problem found while loading. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SiteLint {
    /// A document-level check failed.
    Document { slug: String, lint: Lint },
    /// The manifest lists a slug with no document.
    MissingDocument { slug: String },
    /// A document exists but the manifest does not list it.
    UnlistedDocument { slug: String },
    /// The manifest slug is not lowercase letters, digits and `-`; skipped.
    InvalidSlug { slug: String },
    /// The manifest lists the same slug twice; later entries are ignored.
    DuplicateSlug { slug: String },
    /// The document's `nextStudy` disagrees with the manifest order.
    StaleNextStudy {
        slug: String,
        declared: String,
        actual: String,
    },
}

impl fmt::Display for SiteLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document { slug, lint } => write!(f, "{slug}: {lint}"),
            Self::MissingDocument { slug } => {
                write!(f, "{slug}: listed in site.yaml but no document found")
            }
            Self::UnlistedDocument { slug } => {
                write!(f, "{slug}: document not listed in site.yaml, skipped")
            }
            Self::InvalidSlug { slug } => write!(
                f,
                "{slug:?}: slug must use only lowercase letters, digits and '-', skipped"
            ),
            Self::DuplicateSlug { slug } => {
                write!(f, "{slug}: listed more than once in site.yaml")
            }
            Self::StaleNextStudy {
                slug,
                declared,
                actual,
            } => write!(
                f,
                "{slug}: nextStudy points at {declared} but the next case study is {actual}"
            ),
        }
    }
}

/// A case study that made it into the site.
#[derive(Clone, Debug)]
pub struct LoadedCaseStudy {
    pub slug: String,
    pub href: String,
    pub teaser: TeaserEntry,
    pub document: CaseStudyDocument,
}

/// One output page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Site route, always ending in `/`.
    pub route: String,
    pub html: String,
}

impl Page {
    /// Output file path relative to the site root.
    pub fn output_path(&self) -> String {
        let dir = self.route.trim_matches('/');
        if dir.is_empty() {
            "index.html".to_owned()
        } else {
            format!("{dir}/index.html")
        }
    }
}

/// Fully loaded site, ready to render.
#[derive(Debug)]
pub struct Site {
    manifest: SiteManifest,
    case_studies: Vec<LoadedCaseStudy>,
    nav: CaseStudyNav,
    lints: Vec<SiteLint>,
}

impl Site {
    /// Load the manifest and every listed document.
    ///
    /// Documents are kept in manifest order. Listed slugs without a document
    /// are skipped with a lint.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is missing or invalid, if a listed
    /// document fails to parse, or on I/O failure.
    pub fn load(source: &dyn ContentSource) -> Result<Self, SiteError> {
        let manifest = SiteManifest::from_yaml(&source.manifest()?).map_err(SiteError::Manifest)?;
        let mut lints = Vec::new();
        let mut seen = HashSet::new();
        let mut case_studies = Vec::with_capacity(manifest.case_studies.len());

        for teaser in &manifest.case_studies {
            let slug = teaser.slug.clone();
            if !is_valid_slug(&slug) {
                lints.push(SiteLint::InvalidSlug { slug });
                continue;
            }
            if !seen.insert(slug.clone()) {
                lints.push(SiteLint::DuplicateSlug { slug });
                continue;
            }
            let raw = match source.case_study(&slug) {
                Ok(raw) => raw,
                Err(e) if e.is_not_found() => {
                    tracing::warn!(slug = %slug, "Listed case study has no document");
                    lints.push(SiteLint::MissingDocument { slug });
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            let document = CaseStudyDocument::from_yaml(&raw).map_err(|source| {
                SiteError::Document {
                    slug: slug.clone(),
                    source,
                }
            })?;
            lints.extend(lint_document(&document).into_iter().map(|lint| SiteLint::Document {
                slug: slug.clone(),
                lint,
            }));
            case_studies.push(LoadedCaseStudy {
                href: case_study_href(&slug),
                slug,
                teaser: teaser.clone(),
                document,
            });
        }

        for slug in source.case_study_slugs()? {
            if !seen.contains(&slug) {
                lints.push(SiteLint::UnlistedDocument { slug });
            }
        }

        let nav = CaseStudyNav::new(
            case_studies
                .iter()
                .map(|c| NavEntry::new(&c.href, &c.document.overview.company, &c.document.title))
                .collect(),
        );
        lints.extend(stale_next_studies(&case_studies, &nav));

        for lint in &lints {
            tracing::warn!(%lint, "Content lint");
        }
        tracing::debug!(
            case_studies = case_studies.len(),
            lints = lints.len(),
            "Site loaded"
        );

        Ok(Self {
            manifest,
            case_studies,
            nav,
            lints,
        })
    }

    pub fn manifest(&self) -> &SiteManifest {
        &self.manifest
    }

    /// Case studies in manifest order.
    pub fn case_studies(&self) -> &[LoadedCaseStudy] {
        &self.case_studies
    }

    pub fn nav(&self) -> &CaseStudyNav {
        &self.nav
    }

    pub fn lints(&self) -> &[SiteLint] {
        &self.lints
    }

    pub fn get(&self, slug: &str) -> Option<&LoadedCaseStudy> {
        self.case_studies.iter().find(|c| c.slug == slug)
    }

    fn teasers(&self) -> Vec<Teaser<'_>> {
        self.case_studies
            .iter()
            .map(|c| Teaser {
                entry: &c.teaser,
                doc: &c.document,
            })
            .collect()
    }

    fn owner_title(&self) -> String {
        let owner = &self.manifest.owner;
        format!("{} | {}", owner.name, owner.role)
    }

    /// Homepage, without the footer.
    pub fn render_home(&self, options: &RenderOptions) -> String {
        let body = render_home(&self.manifest, &self.teasers(), options.shape_seed);
        render_page(&PageShell {
            title: self.owner_title(),
            description: self.manifest.home.hero.intro.clone(),
            owner: &self.manifest.owner,
            body,
            show_footer: false,
        })
    }

    pub fn render_case_study(&self, study: &LoadedCaseStudy, options: &RenderOptions) -> String {
        let body = render_case_study(&study.document, &study.href, &self.nav, options).html();
        render_page(&PageShell::for_case_study(
            &study.document,
            &self.manifest.owner,
            body,
        ))
    }

    pub fn render_listing(&self) -> String {
        render_page(&PageShell {
            title: format!("Case Studies | {}", self.manifest.owner.name),
            description: self.manifest.home.hero.intro.clone(),
            owner: &self.manifest.owner,
            body: render_listing(&self.teasers()),
            show_footer: true,
        })
    }

    pub fn render_about(&self) -> String {
        render_page(&PageShell {
            title: format!("About | {}", self.manifest.owner.name),
            description: self.manifest.home.about.heading.clone(),
            owner: &self.manifest.owner,
            body: render_about_placeholder(),
            show_footer: true,
        })
    }

    /// Every page of the site.
    pub fn pages(&self, options: &RenderOptions) -> Vec<Page> {
        let mut pages = Vec::with_capacity(self.case_studies.len() + 3);
        pages.push(Page {
            route: "/".to_owned(),
            html: self.render_home(options),
        });
        pages.push(Page {
            route: "/case-studies/".to_owned(),
            html: self.render_listing(),
        });
        for study in &self.case_studies {
            pages.push(Page {
                route: format!("{}/", study.href),
                html: self.render_case_study(study, options),
            });
        }
        pages.push(Page {
            route: "/about/".to_owned(),
            html: self.render_about(),
        });
        pages
    }
}

fn stale_next_studies(case_studies: &[LoadedCaseStudy], nav: &CaseStudyNav) -> Vec<SiteLint> {
    let mut lints = Vec::new();
    for study in case_studies {
        let Some(declared) = &study.document.next_study else {
            continue;
        };
        let Some(neighbors) = nav.neighbors(&study.href) else {
            continue;
        };
        if declared.href.trim_end_matches('/') != neighbors.next.href {
            lints.push(SiteLint::StaleNextStudy {
                slug: study.slug.clone(),
                declared: declared.href.clone(),
                actual: neighbors.next.href.clone(),
            });
        }
    }
    lints
}
