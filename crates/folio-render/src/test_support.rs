//! Shared fixtures for renderer tests.

use folio_content::{
    CaseStudyDocument, DecisionBody, DecisionOption, DecisionsLayout, DecisionsSection,
    DesignDecision, Feature, FeaturesCopy, HeroImage, Metric, Overview, ResultsSection, TextBlock,
    VideoSection,
};

fn text(headline: &str, description: &str) -> TextBlock {
    TextBlock {
        headline: headline.to_owned(),
        description: description.to_owned(),
    }
}

/// A fully populated long-form document.
pub(crate) fn document() -> CaseStudyDocument {
    CaseStudyDocument {
        overview: Overview {
            company: "Konfront".to_owned(),
            role: "Lead Product Designer".to_owned(),
            timeline: "2023, 6 months".to_owned(),
            team: "2 designers, 5 engineers".to_owned(),
            platform: "Web, iOS".to_owned(),
            confidentiality: Some("Visuals are recreations.".to_owned()),
        },
        description: None,
        tags: vec!["Healthcare".to_owned(), "B2B".to_owned()],
        title: "Scheduling for clinics".to_owned(),
        subtitle: "Fewer no-shows".to_owned(),
        hero: HeroImage {
            label: "Dashboard".to_owned(),
            src: Some("/img/konfront/hero.png".to_owned()),
        },
        product: "A scheduling platform for small clinics.".to_owned(),
        core_problem: text("Calls all day", "Front desks spent hours on the phone."),
        core_impact: text("Self-service booking", "Patients book and reschedule alone."),
        features_copy: FeaturesCopy::default(),
        features: vec![Feature {
            title: "Smart reminders".to_owned(),
            description: "Reminders tuned per patient.".to_owned(),
            description_after_image: None,
            image: Some("/img/konfront/reminders.png".to_owned()),
            images: Vec::new(),
            video: None,
            sub_steps: Vec::new(),
            score: None,
        }],
        video: Some(VideoSection {
            label: "Booking flow".to_owned(),
            src: "/video/konfront.mp4".to_owned(),
        }),
        results: Some(ResultsSection {
            label: None,
            title: "Results".to_owned(),
            subtitle: None,
            summary: None,
            metrics: vec![
                Metric {
                    value: "-32%".to_owned(),
                    description: "No-shows".to_owned(),
                },
                Metric {
                    value: "4.8/5".to_owned(),
                    description: "Satisfaction".to_owned(),
                },
            ],
        }),
        decisions: DecisionsSection {
            layout: DecisionsLayout::LongForm,
            title: DecisionsSection::DEFAULT_TITLE.to_owned(),
            items: vec![
                DesignDecision {
                    number: 1,
                    title: "Calendar first".to_owned(),
                    why_it_mattered: "Staff think in days.".to_owned(),
                    tradeoff: "Lists were faster to build.".to_owned(),
                    impact: Some("Onboarding halved.".to_owned()),
                    what_we_did: None,
                    image_label: "Calendar view".to_owned(),
                    image: None,
                    body: DecisionBody::Options {
                        question: Some("List or calendar?".to_owned()),
                        options: vec![
                            DecisionOption {
                                label: "List".to_owned(),
                                description: "Dense".to_owned(),
                            },
                            DecisionOption {
                                label: "Calendar".to_owned(),
                                description: "Familiar".to_owned(),
                            },
                        ],
                        chosen: Some("Option B".to_owned()),
                        why_chosen: Some("Matches paper habits.".to_owned()),
                    },
                },
                DesignDecision {
                    number: 2,
                    title: "SMS over app".to_owned(),
                    why_it_mattered: "Patients skip installs.".to_owned(),
                    tradeoff: "Per-message cost.".to_owned(),
                    impact: None,
                    what_we_did: None,
                    image_label: "SMS thread".to_owned(),
                    image: Some("/img/konfront/sms.png".to_owned()),
                    body: DecisionBody::Simple {
                        what_we_did: "Confirmations by SMS.".to_owned(),
                    },
                },
            ],
            extra_cards: Vec::new(),
        },
        cta: None,
        learnings: Vec::new(),
        next_study: None,
    }
}

pub(crate) fn profile() -> folio_content::Profile {
    folio_content::Profile {
        name: "Ada Rivera".to_owned(),
        role: "Product Designer".to_owned(),
        location: "Mexico City".to_owned(),
        email: "ada@example.com".to_owned(),
        linkedin: "https://example.com/in/ada".to_owned(),
        resume: Some("/resume.pdf".to_owned()),
        avatar: Some("/img/avatar.jpg".to_owned()),
    }
}
