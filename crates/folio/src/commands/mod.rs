//! CLI command implementations.

mod build;
mod check;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

use folio_config::Config;
use folio_render::RenderOptions;
use folio_render::sections::CtaTarget;

/// Render knobs taken from the configuration.
fn render_options(config: &Config) -> RenderOptions {
    let default_target = CtaTarget::default();
    RenderOptions {
        cta: CtaTarget {
            href: config.cta.href.clone().unwrap_or(default_target.href),
            threshold: config.cta.threshold,
        },
        shape_seed: config.shapes.seed,
    }
}
