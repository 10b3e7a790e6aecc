//! Results metrics grid.

use std::fmt::Write;

use folio_content::ResultsSection;

use crate::html::{self, escape};

/// Render the results section, or `None` when there are no metrics.
pub fn render_results(results: &ResultsSection) -> Option<String> {
    if results.metrics.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(512 + 256 * results.metrics.len());
    let _ = write!(
        out,
        "<section class=\"cs-section bg-card\"><div class=\"container\"><div{}>",
        html::reveal(0.0)
    );
    if let Some(label) = &results.label {
        html::section_label(&mut out, label);
    }
    let _ = write!(out, "<h2>{}</h2>", escape(&results.title));
    if let Some(subtitle) = &results.subtitle {
        html::paragraph(&mut out, "subtitle", subtitle);
    }
    if let Some(summary) = &results.summary {
        html::paragraph(&mut out, "lead", summary);
    }
    out.push_str("</div><div class=\"card-grid card-grid-3\">");
    for (idx, metric) in results.metrics.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let delay = idx as f64 * 0.08;
        let _ = write!(
            out,
            "<div class=\"card metric\"{}><span class=\"metric-value\">{}</span><p>{}</p></div>",
            html::reveal(delay),
            escape(&metric.value),
            escape(&metric.description),
        );
    }
    out.push_str("</div></div></section>");
    Some(out)
}

#[cfg(test)]
mod tests {
    use folio_content::Metric;

    use super::*;

    fn results(values: &[&str]) -> ResultsSection {
        ResultsSection {
            label: Some("Impact delivered".to_owned()),
            title: "From design decisions to real-world results".to_owned(),
            subtitle: None,
            summary: None,
            metrics: values
                .iter()
                .map(|v| Metric {
                    value: (*v).to_owned(),
                    description: format!("about {v}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_no_metrics_no_section() {
        assert!(render_results(&results(&[])).is_none());
    }

    #[test]
    fn test_metrics_in_order_verbatim() {
        let html = render_results(&results(&["90%", "70% less time", "25+"])).unwrap();
        let a = html.find(">90%<").unwrap();
        let b = html.find(">70% less time<").unwrap();
        let c = html.find(">25+<").unwrap();
        assert!(a < b && b < c);
        assert_eq!(html.matches("class=\"card metric\"").count(), 3);
    }

    #[test]
    fn test_optional_label() {
        let mut r = results(&["6"]);
        r.label = None;
        assert!(!render_results(&r).unwrap().contains("section-label"));
    }
}
