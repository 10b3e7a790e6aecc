//! Design decisions and their payload variants.

use serde::Deserialize;

/// How a document lays out its design decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecisionsLayout {
    /// One full-width section per decision, with image and sub-blocks.
    #[default]
    LongForm,
    /// A compact grid of cards followed by any extra cards.
    Cards,
}

/// One alternative in an options-based decision.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DecisionOption {
    pub label: String,
    pub description: String,
}

/// A described approach: intro, bullet items and an optional closing line.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approach {
    pub intro: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub follow_up: Option<String>,
}

/// Decision payload. Exactly one shape per decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecisionBody {
    /// "What we did / Why / Trade-off".
    Simple { what_we_did: String },
    /// Options grid with a chosen option referenced by positional letter.
    Options {
        question: Option<String>,
        options: Vec<DecisionOption>,
        chosen: Option<String>,
        why_chosen: Option<String>,
    },
    /// A described approach with bullet items.
    Approach {
        question: Option<String>,
        approach: Approach,
    },
    /// Nothing beyond title, why and trade-off was supplied.
    Bare { question: Option<String> },
}

impl DecisionBody {
    /// The framing question, if this body carries one.
    pub fn question(&self) -> Option<&str> {
        match self {
            Self::Simple { .. } => None,
            Self::Options { question, .. }
            | Self::Approach { question, .. }
            | Self::Bare { question } => question.as_deref(),
        }
    }

    /// Index of the option that `chosen` resolves to, if any.
    ///
    /// Matching is by exact positional label: `"Option A"` is index 0,
    /// `"Option B"` index 1 and so on. Anything else resolves to nothing.
    pub fn chosen_index(&self) -> Option<usize> {
        let Self::Options {
            options, chosen, ..
        } = self
        else {
            return None;
        };
        let chosen = chosen.as_deref()?;
        (0..options.len()).find(|&idx| is_chosen_label(chosen, idx))
    }
}

/// A single design decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignDecision {
    /// Display number, authored explicitly.
    pub number: u32,
    pub title: String,
    pub why_it_mattered: String,
    pub tradeoff: String,
    pub impact: Option<String>,
    /// Authored `whatWeDid` kept next to an options or approach body.
    /// A `Simple` body carries it in its payload instead.
    pub what_we_did: Option<String>,
    /// Alt text for the image, or the placeholder label when there is none.
    pub image_label: String,
    pub image: Option<String>,
    pub body: DecisionBody,
}

impl DesignDecision {
    /// The "what I did" line, whichever shape the decision has.
    pub fn what_i_did(&self) -> Option<&str> {
        match &self.body {
            DecisionBody::Simple { what_we_did } => Some(what_we_did),
            _ => self.what_we_did.as_deref(),
        }
    }
}

/// Letter for the option at `idx`: `A`, `B`, `C`, ...
///
/// Indices past `Z` continue through the following code points, matching
/// how authored `chosen` labels have always been spelled.
pub fn option_letter(idx: usize) -> char {
    u32::try_from(idx)
        .ok()
        .and_then(|offset| char::from_u32(u32::from(b'A') + offset))
        .unwrap_or('?')
}

fn is_chosen_label(chosen: &str, idx: usize) -> bool {
    chosen
        .strip_prefix("Option ")
        .is_some_and(|rest| rest.chars().eq(std::iter::once(option_letter(idx))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_body(count: usize, chosen: Option<&str>) -> DecisionBody {
        DecisionBody::Options {
            question: Some("Which?".to_owned()),
            options: (0..count)
                .map(|i| DecisionOption {
                    label: format!("Label {i}"),
                    description: format!("Description {i}"),
                })
                .collect(),
            chosen: chosen.map(str::to_owned),
            why_chosen: None,
        }
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(1), 'B');
        assert_eq!(option_letter(25), 'Z');
    }

    #[test]
    fn test_chosen_index_matches_positional_label() {
        assert_eq!(options_body(3, Some("Option B")).chosen_index(), Some(1));
        assert_eq!(options_body(3, Some("Option A")).chosen_index(), Some(0));
    }

    #[test]
    fn test_chosen_index_mismatch_marks_nothing() {
        assert_eq!(options_body(3, Some("Option D")).chosen_index(), None);
        assert_eq!(options_body(3, Some("option b")).chosen_index(), None);
        assert_eq!(options_body(3, Some("Label 1")).chosen_index(), None);
        assert_eq!(options_body(3, Some("Option BB")).chosen_index(), None);
        assert_eq!(options_body(3, None).chosen_index(), None);
    }

    #[test]
    fn test_chosen_index_for_non_options_body() {
        let body = DecisionBody::Simple {
            what_we_did: "x".to_owned(),
        };
        assert_eq!(body.chosen_index(), None);
    }

    #[test]
    fn test_what_i_did_from_payload_or_field() {
        let mut decision = DesignDecision {
            number: 1,
            title: "Wizard".to_owned(),
            why_it_mattered: "Drop-off".to_owned(),
            tradeoff: "More steps".to_owned(),
            impact: None,
            what_we_did: Some("Shipped the wizard".to_owned()),
            image_label: String::new(),
            image: None,
            body: options_body(1, Some("Option A")),
        };
        assert_eq!(decision.what_i_did(), Some("Shipped the wizard"));

        decision.what_we_did = None;
        assert_eq!(decision.what_i_did(), None);

        decision.body = DecisionBody::Simple {
            what_we_did: "Merged the steps".to_owned(),
        };
        assert_eq!(decision.what_i_did(), Some("Merged the steps"));
    }

    #[test]
    fn test_question_accessor() {
        assert_eq!(options_body(2, None).question(), Some("Which?"));
        let bare = DecisionBody::Bare { question: None };
        assert_eq!(bare.question(), None);
    }
}
