//! Decorative background shapes for homepage sections.
//!
//! Each scene maps to one entry/loop effect and a deterministic scatter of
//! outline shapes. Shapes are placed in the left and right bands only
//! (4%-22% in from either edge) so the centre column stays clear. Motion is
//! driven by the stylesheet from the `data-shape-*` attributes and custom
//! properties emitted here.

use std::fmt::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Horizontal inset range, in percent from the nearest edge.
pub const INSET_RANGE: std::ops::RangeInclusive<u8> = 4..=22;
/// Vertical position range, in percent from the top.
const TOP_RANGE: std::ops::RangeInclusive<u8> = 4..=96;
const FIRST_DELAY: f64 = 0.1;
const DELAY_STEP: f64 = 0.02;
const SIZES: [u16; 7] = [32, 40, 48, 56, 64, 80, 96];
const LINE_WIDTHS: [u16; 6] = [48, 56, 64, 80, 96, 128];

/// Homepage sections that carry a shape scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    CaseStudies,
    WhatSetsApart,
    HowIUseAi,
    AboutMe,
    Contact,
}

impl SceneId {
    pub const ALL: [Self; 5] = [
        Self::CaseStudies,
        Self::WhatSetsApart,
        Self::HowIUseAi,
        Self::AboutMe,
        Self::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CaseStudies => "case-studies",
            Self::WhatSetsApart => "what-sets-apart",
            Self::HowIUseAi => "how-i-use-ai",
            Self::AboutMe => "about-me",
            Self::Contact => "contact",
        }
    }

    fn shape_count(self) -> usize {
        match self {
            Self::CaseStudies | Self::WhatSetsApart => 24,
            Self::HowIUseAi | Self::AboutMe | Self::Contact => 23,
        }
    }

    /// Per-scene salt so scenes sharing a seed still differ.
    fn salt(self) -> u64 {
        match self {
            Self::CaseStudies => 0x9E37_79B9_7F4A_7C15,
            Self::WhatSetsApart => 0xBF58_476D_1CE4_E5B9,
            Self::HowIUseAi => 0x94D0_49BB_1331_11EB,
            Self::AboutMe => 0xD6E8_FEB8_6659_FD93,
            Self::Contact => 0xA076_1D64_78BD_642F,
        }
    }

    /// Entry and loop motion for this scene.
    pub fn effect(self) -> ShapeEffect {
        match self {
            Self::CaseStudies => ShapeEffect {
                entry: EntryMotion::FadeScale,
                ambient: LoopMotion::FloatY { amplitude_px: -5.0 },
                loop_secs: 7.0,
                loop_delay_secs: 0.5,
            },
            Self::WhatSetsApart => ShapeEffect {
                entry: EntryMotion::Fade,
                ambient: LoopMotion::Pulse {
                    low: 0.5,
                    high: 0.7,
                },
                loop_secs: 5.0,
                loop_delay_secs: 0.5,
            },
            Self::HowIUseAi => ShapeEffect {
                entry: EntryMotion::SlideFromLeft { offset_px: -8.0 },
                ambient: LoopMotion::DriftX { amplitude_px: 6.0 },
                loop_secs: 9.0,
                loop_delay_secs: 0.5,
            },
            Self::AboutMe => ShapeEffect {
                entry: EntryMotion::FadeScale,
                ambient: LoopMotion::Breathe { scale: 1.02 },
                loop_secs: 6.0,
                loop_delay_secs: 0.5,
            },
            Self::Contact => ShapeEffect {
                entry: EntryMotion::Fade,
                ambient: LoopMotion::FloatY { amplitude_px: -3.0 },
                loop_secs: 10.0,
                loop_delay_secs: 1.0,
            },
        }
    }
}

/// How shapes appear. All entries settle at 0.6 opacity over 0.8s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntryMotion {
    Fade,
    /// Fade in while growing from 0.98 scale.
    FadeScale,
    SlideFromLeft { offset_px: f64 },
}

/// Endless ambient motion after entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopMotion {
    FloatY { amplitude_px: f64 },
    DriftX { amplitude_px: f64 },
    Pulse { low: f64, high: f64 },
    Breathe { scale: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeEffect {
    pub entry: EntryMotion,
    pub ambient: LoopMotion,
    pub loop_secs: f64,
    /// Added to each shape's entry delay before the loop starts.
    pub loop_delay_secs: f64,
}

impl EntryMotion {
    fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::FadeScale => "fade-scale",
            Self::SlideFromLeft { .. } => "slide-x",
        }
    }
}

impl LoopMotion {
    fn name(self) -> &'static str {
        match self {
            Self::FloatY { .. } => "float-y",
            Self::DriftX { .. } => "drift-x",
            Self::Pulse { .. } => "pulse",
            Self::Breathe { .. } => "breathe",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    /// Square turned 45 degrees.
    Diamond,
    Triangle,
    /// Horizontal hairline.
    Line,
    Diagonal,
}

const KINDS: [ShapeKind; 6] = [
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Diamond,
    ShapeKind::Triangle,
    ShapeKind::Line,
    ShapeKind::Diagonal,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A positioned shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedShape {
    pub kind: ShapeKind,
    pub side: Side,
    /// Percent in from `side`.
    pub inset_pct: u8,
    /// Percent down from the top of the section.
    pub top_pct: u8,
    /// Width in pixels; height equals width except for lines.
    pub size_px: u16,
    /// Hidden on narrow screens.
    pub desktop_only: bool,
    pub delay_secs: f64,
}

impl PlacedShape {
    /// Horizontal position of the shape's anchor edge, in percent from the left.
    pub fn left_pct(&self) -> u8 {
        match self.side {
            Side::Left => self.inset_pct,
            Side::Right => 100 - self.inset_pct,
        }
    }
}

/// Deterministic scatter for `scene`. Same inputs, same shapes.
pub fn scatter(scene: SceneId, seed: u64) -> Vec<PlacedShape> {
    let mut rng = StdRng::seed_from_u64(seed ^ scene.salt());
    let count = scene.shape_count();
    let mut shapes = Vec::with_capacity(count);

    for i in 0..count {
        let kind = KINDS[rng.random_range(0..KINDS.len())];
        let size_px = if kind == ShapeKind::Line {
            LINE_WIDTHS[rng.random_range(0..LINE_WIDTHS.len())]
        } else {
            SIZES[rng.random_range(0..SIZES.len())]
        };
        let side = if i % 2 == 0 { Side::Left } else { Side::Right };
        #[allow(clippy::cast_precision_loss)]
        let delay_secs = FIRST_DELAY + DELAY_STEP * i as f64;
        shapes.push(PlacedShape {
            kind,
            side,
            inset_pct: rng.random_range(INSET_RANGE),
            top_pct: rng.random_range(TOP_RANGE),
            size_px,
            desktop_only: kind == ShapeKind::Line || rng.random_bool(0.5),
            delay_secs,
        });
    }
    shapes
}

/// Render the scene's shape layer. Place it first inside a positioned section.
pub fn render_shapes(html: &mut String, scene: SceneId, seed: u64) {
    let effect = scene.effect();
    let _ = write!(
        html,
        "<div class=\"shapes\" aria-hidden=\"true\" data-shape-scene=\"{}\" data-shape-entry=\"{}\" \
         data-shape-loop=\"{}\" style=\"{}\">",
        scene.name(),
        effect.entry.name(),
        effect.ambient.name(),
        effect_style(&effect),
    );
    for shape in scatter(scene, seed) {
        render_shape(html, &shape);
    }
    html.push_str("</div>");
}

fn effect_style(effect: &ShapeEffect) -> String {
    let mut style = format!(
        "--shape-loop-duration:{}s;--shape-loop-delay:{}s",
        effect.loop_secs, effect.loop_delay_secs
    );
    if let EntryMotion::SlideFromLeft { offset_px } = effect.entry {
        let _ = write!(style, ";--shape-entry-offset:{offset_px}px");
    }
    let _ = match effect.ambient {
        LoopMotion::FloatY { amplitude_px } | LoopMotion::DriftX { amplitude_px } => {
            write!(style, ";--shape-amplitude:{amplitude_px}px")
        }
        LoopMotion::Pulse { low, high } => {
            write!(style, ";--shape-opacity-low:{low};--shape-opacity-high:{high}")
        }
        LoopMotion::Breathe { scale } => write!(style, ";--shape-scale:{scale}"),
    };
    style
}

fn render_shape(html: &mut String, shape: &PlacedShape) {
    let side = match shape.side {
        Side::Left => "left",
        Side::Right => "right",
    };
    let height = if shape.kind == ShapeKind::Line {
        1
    } else {
        shape.size_px
    };
    let class = if shape.desktop_only {
        "shape shape-desktop"
    } else {
        "shape"
    };
    let _ = write!(
        html,
        "<div class=\"{class}\" style=\"{side}:{}%;top:{}%;width:{}px;height:{height}px;--shape-delay:{:.2}s\">",
        shape.inset_pct, shape.top_pct, shape.size_px, shape.delay_secs,
    );
    html.push_str(&shape_svg(shape.kind, shape.size_px));
    html.push_str("</div>");
}

fn shape_svg(kind: ShapeKind, size: u16) -> String {
    let s = size;
    let half = f64::from(size) / 2.0;
    let body = match kind {
        ShapeKind::Circle => format!("<circle cx=\"{half}\" cy=\"{half}\" r=\"{}\"/>", half - 2.0),
        ShapeKind::Square => format!(
            "<rect x=\"1\" y=\"1\" width=\"{}\" height=\"{}\"/>",
            s - 2,
            s - 2
        ),
        ShapeKind::Diamond => format!(
            "<polygon points=\"{half},2 {},{half} {half},{} 2,{half}\"/>",
            s - 2,
            s - 2
        ),
        ShapeKind::Triangle => format!(
            "<polygon points=\"{half},2 {},{} 2,{}\"/>",
            s - 2,
            s - 2,
            s - 2
        ),
        ShapeKind::Line => {
            return format!(
                "<svg viewBox=\"0 0 {s} 1\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"1\">\
                 <line x1=\"0\" y1=\"0.5\" x2=\"{s}\" y2=\"0.5\"/></svg>"
            );
        }
        ShapeKind::Diagonal => format!("<line x1=\"0\" y1=\"{s}\" x2=\"{s}\" y2=\"0\"/>"),
    };
    format!(
        "<svg viewBox=\"0 0 {s} {s}\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"1\">{body}</svg>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_is_deterministic() {
        for scene in SceneId::ALL {
            assert_eq!(scatter(scene, 7), scatter(scene, 7));
        }
    }

    #[test]
    fn test_scatter_seed_changes_layout() {
        assert_ne!(
            scatter(SceneId::Contact, 1),
            scatter(SceneId::Contact, 2)
        );
    }

    #[test]
    fn test_shapes_avoid_centre_column() {
        for scene in SceneId::ALL {
            for shape in scatter(scene, 42) {
                let left = shape.left_pct();
                assert!(!(35..=65).contains(&left), "{scene:?} shape at {left}%");
            }
        }
    }

    #[test]
    fn test_shape_counts() {
        assert_eq!(scatter(SceneId::CaseStudies, 0).len(), 24);
        assert_eq!(scatter(SceneId::WhatSetsApart, 0).len(), 24);
        assert_eq!(scatter(SceneId::HowIUseAi, 0).len(), 23);
        assert_eq!(scatter(SceneId::AboutMe, 0).len(), 23);
        assert_eq!(scatter(SceneId::Contact, 0).len(), 23);
    }

    #[test]
    fn test_delays_step() {
        let shapes = scatter(SceneId::AboutMe, 0);
        assert!((shapes[0].delay_secs - 0.1).abs() < 1e-9);
        assert!((shapes[3].delay_secs - 0.16).abs() < 1e-9);
    }

    #[test]
    fn test_effects_table() {
        let contact = SceneId::Contact.effect();
        assert_eq!(contact.ambient, LoopMotion::FloatY { amplitude_px: -3.0 });
        assert!((contact.loop_secs - 10.0).abs() < f64::EPSILON);
        assert!((contact.loop_delay_secs - 1.0).abs() < f64::EPSILON);

        let apart = SceneId::WhatSetsApart.effect();
        assert_eq!(apart.entry, EntryMotion::Fade);
        assert_eq!(apart.ambient, LoopMotion::Pulse { low: 0.5, high: 0.7 });
    }

    #[test]
    fn test_render_shapes_attributes() {
        let mut html = String::new();
        render_shapes(&mut html, SceneId::HowIUseAi, 0);
        assert!(html.starts_with("<div class=\"shapes\" aria-hidden=\"true\""));
        assert!(html.contains("data-shape-scene=\"how-i-use-ai\""));
        assert!(html.contains("data-shape-loop=\"drift-x\""));
        assert!(html.contains("--shape-entry-offset:-8px"));
        assert_eq!(html.matches("<svg").count(), 23);
    }
}
