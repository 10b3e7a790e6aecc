//! Features / design-process section.

use std::fmt::Write;

use folio_content::{Feature, FeaturesCopy};

use crate::gauge::render_score_gauge;
use crate::html::{self, escape};

/// Render the features section, or `None` when there are no features.
pub fn render_features(copy: &FeaturesCopy, features: &[Feature]) -> Option<String> {
    if features.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(1024 * features.len());
    let _ = write!(
        out,
        "<section class=\"cs-section bg-card\"><div class=\"container\"><div{}>",
        html::reveal(0.0)
    );
    if let Some(label) = &copy.label {
        html::section_label(&mut out, label);
    }
    let _ = write!(out, "<h2>{}</h2>", escape(&copy.title));
    if let Some(description) = &copy.description {
        let _ = write!(out, "<p class=\"lead\">{}</p>", escape(description));
    }
    out.push_str("</div><div class=\"features\">");

    for (idx, feature) in features.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let delay = idx as f64 * 0.05;
        render_feature(&mut out, feature, delay);
    }

    out.push_str("</div></div></section>");
    Some(out)
}

fn render_feature(out: &mut String, feature: &Feature, delay: f64) {
    let _ = write!(out, "<article class=\"feature\"{}>", html::reveal(delay));
    let _ = write!(
        out,
        "<h3>{}</h3><p class=\"body pre-line\">{}</p>",
        escape(&feature.title),
        escape(&feature.description)
    );

    if let Some(score) = &feature.score {
        render_score_gauge(out, score);
    }
    if let Some(video) = &feature.video {
        html::video(out, video);
    }
    if let Some(image) = &feature.image {
        html::framed_image(out, image, &feature.title);
    }
    if !feature.images.is_empty() {
        out.push_str("<div class=\"image-stack\">");
        for image in &feature.images {
            out.push_str("<div>");
            html::framed_image(out, &image.src, &image.alt);
            if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
                let _ = write!(out, "<p class=\"caption\">{}</p>", escape(caption));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
    if let Some(after) = &feature.description_after_image {
        html::paragraph(out, "body after-image", after);
    }
    if !feature.sub_steps.is_empty() {
        out.push_str("<div class=\"sub-steps\">");
        for step in &feature.sub_steps {
            let _ = write!(
                out,
                "<div class=\"sub-step\"><h4>{}</h4><p class=\"body\">{}</p>",
                escape(&step.title),
                escape(&step.description)
            );
            if let Some(image) = &step.image {
                html::framed_image(out, image, &step.title);
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
    out.push_str("</article>");
}

#[cfg(test)]
mod tests {
    use folio_content::{FeatureImage, ScoreMetric, SubStep};

    use super::*;

    fn feature(title: &str) -> Feature {
        Feature {
            title: title.to_owned(),
            description: "Line one\nLine two".to_owned(),
            description_after_image: None,
            image: None,
            images: Vec::new(),
            video: None,
            sub_steps: Vec::new(),
            score: None,
        }
    }

    #[test]
    fn test_empty_features_render_nothing() {
        assert!(render_features(&FeaturesCopy::default(), &[]).is_none());
    }

    #[test]
    fn test_default_copy() {
        let html = render_features(&FeaturesCopy::default(), &[feature("Reasoning")]).unwrap();
        assert!(html.contains("<h2>Gen AI experience</h2>"));
        assert!(html.contains("Main Gen AI capabilities"));
        assert!(!html.contains("section-label"));
    }

    #[test]
    fn test_suppressed_description() {
        let copy = FeaturesCopy::resolve(
            None,
            Some("The design process".to_owned()),
            Some(String::new()),
        );
        let html = render_features(&copy, &[feature("Empathize")]).unwrap();
        assert!(html.contains("<h2>The design process</h2>"));
        assert!(!html.contains("<p class=\"lead\">"));
    }

    #[test]
    fn test_feature_block_order() {
        let mut f = feature("Test");
        f.score = Some(ScoreMetric {
            score: 9.0,
            max: 10.0,
            label: "NPS".to_owned(),
        });
        f.video = Some("/v.mp4".to_owned());
        f.image = Some("/single.png".to_owned());
        f.images = vec![FeatureImage {
            src: "/multi.png".to_owned(),
            alt: "Multi".to_owned(),
            caption: Some("A caption".to_owned()),
        }];
        f.description_after_image = Some("Afterwards".to_owned());
        f.sub_steps = vec![SubStep {
            title: "Branding".to_owned(),
            description: "Identity".to_owned(),
            image: None,
        }];

        let html = render_features(&FeaturesCopy::default(), &[f]).unwrap();
        let order = [
            "Line one",
            "class=\"gauge\"",
            "<video",
            "/single.png",
            "/multi.png",
            "A caption",
            "Afterwards",
            "<h4>Branding</h4>",
        ];
        let positions: Vec<usize> = order.iter().map(|p| html.find(p).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_image_without_caption() {
        let mut f = feature("Prototype");
        f.images = vec![FeatureImage {
            src: "/p1.png".to_owned(),
            alt: "Prototype screen 1".to_owned(),
            caption: None,
        }];
        let html = render_features(&FeaturesCopy::default(), &[f]).unwrap();
        assert!(!html.contains("class=\"caption\""));
    }
}
