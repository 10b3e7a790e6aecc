//! Half-circle score gauge.
//!
//! The arc runs left to right over the top of a 200x200 box. It is split
//! into detractor, passive and promoter bands at 60/20/20 of its length, each
//! drawn as a dashed stroke over the same path. The needle pivots below the
//! arc centre and points at `score / max` along the arc.

use std::f64::consts::PI;
use std::fmt::Write;

use folio_content::ScoreMetric;

use crate::html::escape;

const SIZE: f64 = 200.0;
const STROKE_WIDTH: f64 = 20.0;

/// Fractions of the half circle covered by each band, in drawing order.
pub const BAND_FRACTIONS: [f64; 3] = [0.6, 0.2, 0.2];

const BANDS: [(&str, &str, &str); 3] = [
    ("gauge-red", "#DC2626", "#EA580C"),
    ("gauge-yellow", "#F59E0B", "#EAB308"),
    ("gauge-green", "#22C55E", "#16A34A"),
];

/// A dashed band along the arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    /// Visible dash length.
    pub length: f64,
    /// Dash offset; negative values shift the dash along the path.
    pub offset: f64,
}

/// Computed gauge geometry for one score.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeGeometry {
    pub radius: f64,
    pub center: (f64, f64),
    pub half_circle: f64,
    pub segments: [ArcSegment; 3],
    /// Score clamped to `[0, max]`.
    pub clamped_score: f64,
    /// Needle angle in radians: `PI` at zero, `0` at `max`.
    pub needle_angle: f64,
    pub pivot: (f64, f64),
    pub needle_end: (f64, f64),
}

impl GaugeGeometry {
    /// Geometry for `score` out of `max`.
    ///
    /// A non-positive `max` puts the needle at zero.
    pub fn new(score: f64, max: f64) -> Self {
        let radius = (SIZE - STROKE_WIDTH) / 2.0;
        let (cx, cy) = (SIZE / 2.0, SIZE / 2.0);
        let half_circle = PI * radius;

        let mut offset = 0.0;
        let segments = BAND_FRACTIONS.map(|fraction| {
            let length = fraction * half_circle;
            let segment = ArcSegment {
                length,
                offset: -offset,
            };
            offset += length;
            segment
        });

        let clamped_score = if max > 0.0 { score.clamp(0.0, max) } else { 0.0 };
        let ratio = if max > 0.0 { clamped_score / max } else { 0.0 };
        let needle_angle = PI * (1.0 - ratio);

        Self {
            radius,
            center: (cx, cy),
            half_circle,
            segments,
            clamped_score,
            needle_angle,
            pivot: (cx, cy + radius),
            needle_end: (
                cx + radius * needle_angle.cos(),
                cy + radius * needle_angle.sin(),
            ),
        }
    }

    /// SVG path for the upper half circle.
    pub fn arc_path(&self) -> String {
        let (cx, cy) = self.center;
        let r = self.radius;
        format!(
            "M {} {cy} A {r} {r} 0 0 1 {} {cy}",
            fmt_num(cx - r),
            fmt_num(cx + r)
        )
    }
}

/// Render the gauge with its score line and caption.
pub fn render_score_gauge(html: &mut String, metric: &ScoreMetric) {
    let geometry = GaugeGeometry::new(metric.score, metric.max);
    let arc = geometry.arc_path();
    let score = fmt_num(metric.score);
    let max = fmt_num(metric.max);

    html.push_str("<div class=\"gauge\">");
    let _ = write!(
        html,
        "<svg width=\"{SIZE}\" height=\"{SIZE}\" viewBox=\"0 0 {SIZE} {SIZE}\" class=\"gauge-svg\" \
         role=\"img\" aria-label=\"{}: {score} out of {max}\"><defs>",
        escape(&metric.label),
    );
    for (id, from, to) in BANDS {
        let _ = write!(
            html,
            "<linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">\
             <stop offset=\"0%\" stop-color=\"{from}\"/><stop offset=\"100%\" stop-color=\"{to}\"/>\
             </linearGradient>"
        );
    }
    html.push_str(
        "<filter id=\"gauge-shadow\" x=\"-20%\" y=\"-20%\" width=\"140%\" height=\"140%\">\
         <feDropShadow dx=\"0\" dy=\"2\" stdDeviation=\"2\" flood-opacity=\"0.15\"/></filter></defs>",
    );

    for ((id, _, _), segment) in BANDS.iter().zip(geometry.segments) {
        let _ = write!(
            html,
            "<path d=\"{arc}\" fill=\"none\" stroke=\"url(#{id})\" stroke-width=\"{STROKE_WIDTH}\" \
             stroke-linecap=\"round\" stroke-dasharray=\"{} {}\" stroke-dashoffset=\"{}\"/>",
            fmt_num(segment.length),
            fmt_num(geometry.half_circle),
            fmt_num(segment.offset),
        );
    }

    let (px, py) = geometry.pivot;
    let (nx, ny) = geometry.needle_end;
    let _ = write!(
        html,
        "<circle cx=\"{}\" cy=\"{}\" r=\"8\" fill=\"#171717\" filter=\"url(#gauge-shadow)\"/>\
         <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#171717\" stroke-width=\"3\" \
         stroke-linecap=\"round\" filter=\"url(#gauge-shadow)\"/></svg>",
        fmt_num(px),
        fmt_num(py),
        fmt_num(px),
        fmt_num(py),
        fmt_num(nx),
        fmt_num(ny),
    );

    let _ = write!(
        html,
        "<div class=\"gauge-score\"><span class=\"gauge-value\">{score}</span>\
         <span class=\"gauge-max\">/{max} \u{b7} {}</span></div>\
         <p class=\"gauge-caption\">Net Promoter Score from user testing</p></div>",
        escape(&metric.label),
    );
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn fmt_num(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_segments_cover_half_circle() {
        let g = GaugeGeometry::new(9.0, 10.0);
        let total: f64 = g.segments.iter().map(|s| s.length).sum();
        assert!((total - g.half_circle).abs() < EPS);
        assert!((g.segments[0].length - 0.6 * g.half_circle).abs() < EPS);
        assert!((g.segments[1].length - 0.2 * g.half_circle).abs() < EPS);
        assert!((g.segments[2].length - 0.2 * g.half_circle).abs() < EPS);
    }

    #[test]
    fn test_segment_offsets_chain() {
        let g = GaugeGeometry::new(5.0, 10.0);
        assert!(g.segments[0].offset.abs() < EPS);
        assert!((g.segments[1].offset + g.segments[0].length).abs() < EPS);
        assert!(
            (g.segments[2].offset + g.segments[0].length + g.segments[1].length).abs() < EPS
        );
    }

    #[test]
    fn test_radius_and_pivot() {
        let g = GaugeGeometry::new(0.0, 10.0);
        assert!((g.radius - 90.0).abs() < EPS);
        assert_eq!(g.center, (100.0, 100.0));
        assert_eq!(g.pivot, (100.0, 190.0));
    }

    #[test]
    fn test_needle_endpoints() {
        let zero = GaugeGeometry::new(0.0, 10.0);
        assert!((zero.needle_angle - PI).abs() < EPS);
        assert!((zero.needle_end.0 - 10.0).abs() < EPS);

        let full = GaugeGeometry::new(10.0, 10.0);
        assert!(full.needle_angle.abs() < EPS);
        assert!((full.needle_end.0 - 190.0).abs() < EPS);
    }

    #[test]
    fn test_needle_is_linear_in_ratio() {
        let a = GaugeGeometry::new(2.5, 10.0).needle_angle;
        let b = GaugeGeometry::new(5.0, 10.0).needle_angle;
        let c = GaugeGeometry::new(7.5, 10.0).needle_angle;
        assert!(((a - b) - (b - c)).abs() < EPS);
        assert!((b - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_score_is_clamped() {
        assert!((GaugeGeometry::new(14.0, 10.0).clamped_score - 10.0).abs() < EPS);
        assert!(GaugeGeometry::new(-3.0, 10.0).clamped_score.abs() < EPS);
        assert!(GaugeGeometry::new(14.0, 10.0).needle_angle.abs() < EPS);
    }

    #[test]
    fn test_non_positive_max() {
        let g = GaugeGeometry::new(5.0, 0.0);
        assert!((g.needle_angle - PI).abs() < EPS);
    }

    #[test]
    fn test_arc_path() {
        assert_eq!(
            GaugeGeometry::new(1.0, 10.0).arc_path(),
            "M 10 100 A 90 90 0 0 1 190 100"
        );
    }

    #[test]
    fn test_render_label_and_caption() {
        let mut html = String::new();
        render_score_gauge(
            &mut html,
            &ScoreMetric {
                score: 9.0,
                max: 10.0,
                label: "NPS".to_owned(),
            },
        );
        assert!(html.contains("<span class=\"gauge-value\">9</span>"));
        assert!(html.contains("/10 \u{b7} NPS"));
        assert!(html.contains("Net Promoter Score from user testing"));
        assert_eq!(html.matches("stroke-dasharray").count(), 3);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(169.646_003_3), "169.646");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(8.5), "8.5");
    }
}
