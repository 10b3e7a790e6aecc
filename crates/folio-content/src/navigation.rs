//! Case-study previous/next navigation.
//!
//! The list is built once from the site manifest order and looked up by
//! route. Neighbors wrap around: the first entry's previous is the last,
//! the last entry's next is the first.
//!
//! # Example
//!
//! ```
//! use folio_content::{CaseStudyNav, NavEntry};
//!
//! let nav = CaseStudyNav::new(vec![
//!     NavEntry::new("/case-studies/a", "A Co", "Alpha"),
//!     NavEntry::new("/case-studies/b", "B Co", "Beta"),
//!     NavEntry::new("/case-studies/c", "C Co", "Gamma"),
//! ]);
//!
//! let neighbors = nav.neighbors("/case-studies/a").unwrap();
//! assert_eq!(neighbors.previous.company, "C Co");
//! assert_eq!(neighbors.next.company, "B Co");
//! assert!(nav.neighbors("/about").is_none());
//! ```

use std::collections::HashMap;

/// Route of a case study page.
pub fn case_study_href(slug: &str) -> String {
    format!("/case-studies/{slug}")
}

/// One navigable case study.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub href: String,
    pub company: String,
    pub title: String,
}

impl NavEntry {
    pub fn new(
        href: impl Into<String>,
        company: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            company: company.into(),
            title: title.into(),
        }
    }
}

/// Previous and next entries around the current route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub previous: &'a NavEntry,
    pub next: &'a NavEntry,
}

/// Ordered, immutable case-study list with O(1) route lookup.
#[derive(Clone, Debug, Default)]
pub struct CaseStudyNav {
    entries: Vec<NavEntry>,
    /// Route -> index into `entries`.
    index: HashMap<String, usize>,
}

impl CaseStudyNav {
    /// Build the resolver. On duplicate routes the first occurrence wins.
    pub fn new(entries: Vec<NavEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.entry(normalize_route(&entry.href).to_owned()).or_insert(i);
        }
        Self { entries, index }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `route` in the list. A trailing slash is ignored.
    pub fn position(&self, route: &str) -> Option<usize> {
        self.index.get(normalize_route(route)).copied()
    }

    /// Circular neighbors of `route`, or `None` when the route is not listed.
    ///
    /// A single-entry list yields that entry as both neighbors.
    pub fn neighbors(&self, route: &str) -> Option<Neighbors<'_>> {
        let i = self.position(route)?;
        let n = self.entries.len();
        Some(Neighbors {
            previous: &self.entries[(i + n - 1) % n],
            next: &self.entries[(i + 1) % n],
        })
    }
}

fn normalize_route(route: &str) -> &str {
    if route.len() > 1 {
        route.trim_end_matches('/')
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn nav(n: usize) -> CaseStudyNav {
        CaseStudyNav::new(
            (0..n)
                .map(|i| NavEntry::new(format!("/case-studies/s{i}"), format!("Co {i}"), "T"))
                .collect(),
        )
    }

    #[test]
    fn test_neighbors_wrap_around() {
        let nav = nav(3);
        let first = nav.neighbors("/case-studies/s0").unwrap();
        assert_eq!(first.previous.href, "/case-studies/s2");
        assert_eq!(first.next.href, "/case-studies/s1");

        let last = nav.neighbors("/case-studies/s2").unwrap();
        assert_eq!(last.previous.href, "/case-studies/s1");
        assert_eq!(last.next.href, "/case-studies/s0");
    }

    #[test]
    fn test_neighbors_every_index() {
        for n in 1..6 {
            let nav = nav(n);
            for i in 0..n {
                let neighbors = nav.neighbors(&format!("/case-studies/s{i}")).unwrap();
                assert_eq!(
                    neighbors.previous.href,
                    format!("/case-studies/s{}", (i + n - 1) % n)
                );
                assert_eq!(neighbors.next.href, format!("/case-studies/s{}", (i + 1) % n));
            }
        }
    }

    #[test]
    fn test_single_entry_is_its_own_neighbor() {
        let nav = nav(1);
        let neighbors = nav.neighbors("/case-studies/s0").unwrap();
        assert_eq!(neighbors.previous, neighbors.next);
        assert_eq!(neighbors.next.href, "/case-studies/s0");
    }

    #[test]
    fn test_unknown_route() {
        assert!(nav(3).neighbors("/case-studies/missing").is_none());
        assert!(nav(0).neighbors("/case-studies/s0").is_none());
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let nav = nav(2);
        assert_eq!(nav.position("/case-studies/s1/"), Some(1));
    }

    #[test]
    fn test_case_study_href() {
        assert_eq!(case_study_href("c3-genai"), "/case-studies/c3-genai");
    }
}
