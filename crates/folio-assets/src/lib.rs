//! Stylesheet and client script shipped with every Folio site.
//!
//! The renderers only emit `data-*` attributes. Everything that moves on the
//! page (reveal on scroll, shape loops, the CTA slider) lives in [`SCRIPT`]
//! and [`STYLESHEET`].
//!
//! With the default `embed` feature both files are compiled into the binary.
//! Without it they are read from this crate's `static/` directory on every
//! call, so edits show up on the next build without recompiling.

use std::borrow::Cow;

/// Stylesheet file name under the site's asset directory.
pub const STYLESHEET: &str = "site.css";

/// Client script file name under the site's asset directory.
pub const SCRIPT: &str = "site.js";

/// Every file a built site needs, in write order.
pub const FILES: [&str; 2] = [STYLESHEET, SCRIPT];

#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "static"]
struct Embedded;

#[cfg(not(feature = "embed"))]
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Contents of one asset, or `None` for a name outside [`FILES`].
pub fn get(name: &str) -> Option<Cow<'static, [u8]>> {
    if !FILES.contains(&name) {
        return None;
    }
    load(name)
}

#[cfg(feature = "embed")]
fn load(name: &str) -> Option<Cow<'static, [u8]>> {
    Embedded::get(name).map(|file| file.data)
}

#[cfg(not(feature = "embed"))]
fn load(name: &str) -> Option<Cow<'static, [u8]>> {
    let path = std::path::Path::new(STATIC_DIR).join(name);
    std::fs::read(path).ok().map(Cow::Owned)
}

/// Pairs every name in [`FILES`] with its contents.
///
/// A missing file yields `None` in place of its contents rather than being
/// skipped, so callers can report which one is absent.
pub fn bundle() -> impl Iterator<Item = (&'static str, Option<Cow<'static, [u8]>>)> {
    FILES.into_iter().map(|name| (name, load(name)))
}
