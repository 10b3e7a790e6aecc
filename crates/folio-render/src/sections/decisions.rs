//! Design decisions, as a card grid or as one long-form section each.

use std::fmt::Write;

use folio_content::{
    Approach, DecisionBody, DecisionOption, DecisionsLayout, DecisionsSection, DesignDecision,
    option_letter,
};

use crate::html::{self, escape, padded_number};

const GEOMETRY_CIRCLE: &str = r#"<div class="geometry" aria-hidden="true"><svg class="geo geo-decision-0" viewBox="0 0 64 64" fill="none"><circle cx="32" cy="32" r="30" stroke="currentColor" stroke-width="1"/></svg></div>"#;

const GEOMETRY_SQUARE: &str = r#"<div class="geometry" aria-hidden="true"><svg class="geo geo-decision-1" viewBox="0 0 56 56" fill="none"><rect x="1" y="1" width="54" height="54" stroke="currentColor" stroke-width="1"/></svg></div>"#;

const GEOMETRY_CROSS: &str = r#"<div class="geometry" aria-hidden="true"><svg class="geo geo-decision-n" viewBox="0 0 80 80" fill="none"><line x1="0" y1="80" x2="80" y2="0" stroke="currentColor" stroke-width="1"/><line x1="0" y1="0" x2="80" y2="80" stroke="currentColor" stroke-width="1"/></svg></div>"#;

/// Render the decisions in the document's layout.
///
/// Card mode produces one section. Long-form mode produces one section per
/// decision, concatenated.
pub fn render_decisions(section: &DecisionsSection) -> String {
    match section.layout {
        DecisionsLayout::Cards => render_cards(section),
        DecisionsLayout::LongForm => section
            .items
            .iter()
            .enumerate()
            .map(|(idx, decision)| render_long_form(idx, decision))
            .collect(),
    }
}

fn render_cards(section: &DecisionsSection) -> String {
    let count = section.items.len() + section.extra_cards.len();
    let mut out = String::with_capacity(512 + 768 * count);
    let _ = write!(
        out,
        "<section class=\"cs-section bg-card\"><div class=\"container\"><div{}>",
        html::reveal(0.0)
    );
    html::section_label(&mut out, "Design decisions");
    let _ = write!(
        out,
        "<h2>{}</h2></div><div class=\"card-grid card-grid-2\">",
        escape(&section.title)
    );

    for (idx, decision) in section.items.iter().enumerate() {
        card_open(&mut out, idx, &padded_number(decision.number), &decision.title);
        if let Some(what_we_did) = decision.what_i_did() {
            out.push_str("<p class=\"card-label\">What I did</p>");
            html::paragraph(&mut out, "card-strong", what_we_did);
        }
        out.push_str("<p class=\"card-label\">Why</p>");
        html::paragraph(&mut out, "card-body", &decision.why_it_mattered);
        out.push_str("<p class=\"card-label\">Trade-off</p>");
        html::paragraph(&mut out, "card-body card-tradeoff", &decision.tradeoff);
        out.push_str("</div>");
    }

    let offset = section.items.len();
    for (idx, card) in section.extra_cards.iter().enumerate() {
        let number = offset + idx + 1;
        card_open(&mut out, number - 1, &padded_number(number), &card.title);
        html::paragraph(&mut out, "card-body", &card.description);
        out.push_str("</div>");
    }

    out.push_str("</div></div></section>");
    out
}

fn card_open(out: &mut String, position: usize, number: &str, title: &str) {
    #[allow(clippy::cast_precision_loss)]
    let delay = position as f64 * 0.08;
    let _ = write!(
        out,
        "<div class=\"card decision-card\"{}><div class=\"card-head\"><span class=\"number-badge\">{number}</span><h3>{}</h3></div>",
        html::reveal(delay),
        escape(title),
    );
}

fn geometry(idx: usize) -> &'static str {
    match idx {
        0 => GEOMETRY_CIRCLE,
        1 => GEOMETRY_SQUARE,
        _ => GEOMETRY_CROSS,
    }
}

fn render_long_form(idx: usize, decision: &DesignDecision) -> String {
    let background = if idx % 2 == 0 { "bg-card" } else { "bg-white" };
    let mut out = String::with_capacity(2048);
    let _ = write!(out, "<section class=\"cs-section {background}\">");
    out.push_str(geometry(idx));
    let _ = write!(
        out,
        "<div class=\"container\"><div{}><div class=\"decision-head\"><span class=\"number-badge\">{}</span>",
        html::reveal(0.0),
        padded_number(decision.number),
    );
    html::section_label(&mut out, &format!("Design Decision {}", decision.number));
    let _ = write!(out, "</div><h3>{}</h3></div>", escape(&decision.title));

    if let Some(question) = decision.body.question() {
        let _ = write!(out, "<div class=\"block\"{}>", html::reveal(0.05));
        html::block_label(&mut out, "The Question");
        let _ = write!(out, "<p class=\"question\">{}</p></div>", escape(question));
    }

    match &decision.body {
        DecisionBody::Simple { what_we_did } => {
            text_block(&mut out, 0.05, "What we did", what_we_did);
            text_block(&mut out, 0.1, "Why", &decision.why_it_mattered);
        }
        DecisionBody::Options {
            options,
            why_chosen,
            ..
        } => {
            text_block(&mut out, 0.05, "Why This Mattered", &decision.why_it_mattered);
            let _ = write!(out, "<div class=\"block\"{}>", html::reveal(0.15));
            html::block_label(&mut out, "Options Considered");
            render_options_grid(&mut out, options, decision.body.chosen_index());
            out.push_str("</div>");
            if let Some(why) = why_chosen {
                text_block(&mut out, 0.2, "Why I Chose This Approach", why);
            }
        }
        DecisionBody::Approach { approach, .. } => {
            text_block(&mut out, 0.05, "Why This Mattered", &decision.why_it_mattered);
            render_approach(&mut out, approach);
        }
        DecisionBody::Bare { .. } => {
            text_block(&mut out, 0.05, "Why This Mattered", &decision.why_it_mattered);
        }
    }

    text_block(&mut out, 0.25, "The Trade-off", &decision.tradeoff);
    if let Some(impact) = &decision.impact {
        text_block(&mut out, 0.3, "The Impact", impact);
    }

    let _ = write!(out, "<div class=\"block-media\"{}>", html::reveal(0.35));
    match &decision.image {
        Some(src) => html::framed_image(&mut out, src, &decision.image_label),
        None => html::image_placeholder(&mut out, &decision.image_label, false),
    }
    out.push_str("</div></div></section>");
    out
}

fn text_block(out: &mut String, delay: f64, label: &str, text: &str) {
    let _ = write!(out, "<div class=\"block\"{}>", html::reveal(delay));
    html::block_label(out, label);
    let _ = write!(out, "<p class=\"body\">{}</p></div>", escape(text));
}

fn render_approach(out: &mut String, approach: &Approach) {
    let _ = write!(out, "<div class=\"block\"{}>", html::reveal(0.15));
    html::block_label(out, "The Design Approach");
    let _ = write!(out, "<p class=\"body\">{}</p>", escape(&approach.intro));
    if !approach.items.is_empty() {
        out.push_str("<ul class=\"bullets\">");
        for item in &approach.items {
            let _ = write!(out, "<li>{}</li>", escape(item));
        }
        out.push_str("</ul>");
    }
    if let Some(follow_up) = &approach.follow_up {
        let _ = write!(out, "<p class=\"body\">{}</p>", escape(follow_up));
    }
    out.push_str("</div>");
}

/// Options grid. Two options get two columns, anything else three.
pub fn render_options_grid(out: &mut String, options: &[DecisionOption], chosen: Option<usize>) {
    let columns = if options.len() == 2 {
        "options-2"
    } else {
        "options-3"
    };
    let _ = write!(out, "<div class=\"options {columns}\">");
    for (idx, option) in options.iter().enumerate() {
        let is_chosen = chosen == Some(idx);
        let _ = write!(
            out,
            "<div class=\"option{}\"><div class=\"option-head\"><span class=\"option-letter\">{}</span>",
            if is_chosen { " is-chosen" } else { "" },
            option_letter(idx),
        );
        if is_chosen {
            out.push_str("<span class=\"chosen-badge\">Chosen</span>");
        }
        let _ = write!(
            out,
            "</div><p class=\"option-label\">{}</p><p class=\"option-description\">{}</p></div>",
            escape(&option.label),
            escape(&option.description),
        );
    }
    out.push_str("</div>");
}
