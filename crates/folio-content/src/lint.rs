//! Authoring checks for case-study documents.
//!
//! Lints never block rendering. They surface content that renders, but
//! probably not the way the author intended.

use std::fmt;

use crate::decision::DecisionBody;
use crate::document::CaseStudyDocument;

/// A single authoring problem found in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lint {
    /// `chosen` does not resolve to any option, so no option is highlighted.
    UnresolvedChoice { decision: u32, chosen: String },
    /// An options decision with no `chosen` at all.
    MissingChoice { decision: u32 },
    /// No payload was supplied; only title, why and trade-off render.
    BareDecision { decision: u32 },
    /// Decision numbers are not 1, 2, 3, ... in document order.
    DecisionNumbering { position: usize, found: u32 },
    /// A score gauge with a non-positive maximum.
    InvalidScoreMax { feature: String },
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedChoice { decision, chosen } => write!(
                f,
                "decision {decision}: chosen \"{chosen}\" matches no option (expected \"Option A\", \"Option B\", ...)"
            ),
            Self::MissingChoice { decision } => {
                write!(f, "decision {decision}: options listed but none chosen")
            }
            Self::BareDecision { decision } => write!(
                f,
                "decision {decision}: no whatWeDid, options or approach supplied"
            ),
            Self::DecisionNumbering { position, found } => write!(
                f,
                "decision at position {position} is numbered {found}, expected {position}"
            ),
            Self::InvalidScoreMax { feature } => {
                write!(f, "feature \"{feature}\": score max must be positive")
            }
        }
    }
}

/// Run every document-level check.
pub fn lint_document(doc: &CaseStudyDocument) -> Vec<Lint> {
    let mut lints = Vec::new();

    for (idx, decision) in doc.decisions.items.iter().enumerate() {
        let position = idx + 1;
        if usize::try_from(decision.number).ok() != Some(position) {
            lints.push(Lint::DecisionNumbering {
                position,
                found: decision.number,
            });
        }

        match &decision.body {
            DecisionBody::Options { chosen: None, .. } => {
                lints.push(Lint::MissingChoice {
                    decision: decision.number,
                });
            }
            DecisionBody::Options {
                chosen: Some(chosen),
                ..
            } if decision.body.chosen_index().is_none() => {
                lints.push(Lint::UnresolvedChoice {
                    decision: decision.number,
                    chosen: chosen.clone(),
                });
            }
            DecisionBody::Bare { .. } => lints.push(Lint::BareDecision {
                decision: decision.number,
            }),
            DecisionBody::Simple { .. }
            | DecisionBody::Options { .. }
            | DecisionBody::Approach { .. } => {}
        }
    }

    for feature in &doc.features {
        if feature.score.as_ref().is_some_and(|s| s.max <= 0.0) {
            lints.push(Lint::InvalidScoreMax {
                feature: feature.title.clone(),
            });
        }
    }

    lints
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc_with_decisions(decisions: &str) -> CaseStudyDocument {
        let yaml = format!(
            r"
overview: {{ company: C, role: R, timeline: T, team: X, platform: P }}
title: Title
subtitle: Subtitle
product: Product
coreProblem: {{ headline: H, description: D }}
coreImpact: {{ headline: H, description: D }}
designDecisions:
{decisions}"
        );
        CaseStudyDocument::from_yaml(&yaml).unwrap()
    }

    #[test]
    fn test_clean_document_has_no_lints() {
        let doc = doc_with_decisions(
            "  - { number: 1, title: A, whatWeDid: x, whyItMattered: y, tradeoff: z }\n  - { number: 2, title: B, whatWeDid: x, whyItMattered: y, tradeoff: z }\n",
        );
        assert_eq!(lint_document(&doc), vec![]);
    }

    #[test]
    fn test_unresolved_choice() {
        let doc = doc_with_decisions(
            "  - number: 1\n    title: A\n    options: [{ label: One, description: d }, { label: Two, description: d }]\n    chosen: Two\n",
        );
        assert_eq!(
            lint_document(&doc),
            vec![Lint::UnresolvedChoice {
                decision: 1,
                chosen: "Two".to_owned()
            }]
        );
    }

    #[test]
    fn test_missing_choice() {
        let doc = doc_with_decisions(
            "  - number: 1\n    title: A\n    options: [{ label: One, description: d }]\n",
        );
        assert_eq!(lint_document(&doc), vec![Lint::MissingChoice { decision: 1 }]);
    }

    #[test]
    fn test_resolved_choice_is_clean() {
        let doc = doc_with_decisions(
            "  - number: 1\n    title: A\n    options: [{ label: One, description: d }, { label: Two, description: d }]\n    chosen: Option B\n",
        );
        assert!(lint_document(&doc).is_empty());
    }

    #[test]
    fn test_bare_and_numbering() {
        let doc = doc_with_decisions(
            "  - { number: 1, title: A, whatWeDid: x }\n  - { number: 3, title: B }\n",
        );
        assert_eq!(
            lint_document(&doc),
            vec![
                Lint::DecisionNumbering {
                    position: 2,
                    found: 3
                },
                Lint::BareDecision { decision: 3 },
            ]
        );
    }

    #[test]
    fn test_display_mentions_decision() {
        let lint = Lint::BareDecision { decision: 2 };
        assert!(lint.to_string().starts_with("decision 2:"));
    }
}
