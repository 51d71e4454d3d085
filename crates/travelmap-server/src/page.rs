//! The map page served at `/`.
//!
//! The page is resolved once at startup and kept as bytes, so serving it is
//! a reference-count bump.

use std::path::Path;

use axum::body::Bytes;
use tracing::{debug, info};
use travelmap_core::fragment::escape_html;

/// Built-in page bootstrapping the Leaflet map widget.
pub const INDEX_HTML: &str = include_str!("index.html");

/// Name of the page template looked up in the template root.
pub const INDEX_TEMPLATE: &str = "index.html";

/// `<template_root>/index.html` when readable, the built-in page otherwise.
pub fn resolve_index_page(template_root: &Path) -> Bytes {
    let candidate = template_root.join(INDEX_TEMPLATE);
    match std::fs::read(&candidate) {
        Ok(bytes) => {
            info!(path = %candidate.display(), "serving index page from template root");
            Bytes::from(bytes)
        }
        Err(err) => {
            debug!(path = %candidate.display(), error = %err, "no index template, using built-in page");
            Bytes::from_static(INDEX_HTML.as_bytes())
        }
    }
}

/// Adds `<base href="{mount_path}/">` right after the opening `<head>` tag,
/// so the page's relative asset links resolve inside the mount whether it
/// was requested as `/travel` or `/travel/`. An empty mount path returns the
/// page untouched; a page without `<head>` gets the tag prepended.
pub fn with_base_href(page: Bytes, mount_path: &str) -> Bytes {
    if mount_path.is_empty() {
        return page;
    }
    let tag = format!("\n    <base href=\"{}/\">", escape_html(mount_path));
    let at = head_open_end(&page).unwrap_or(0);

    let mut out = Vec::with_capacity(page.len() + tag.len());
    out.extend_from_slice(&page[..at]);
    out.extend_from_slice(tag.as_bytes());
    out.extend_from_slice(&page[at..]);
    Bytes::from(out)
}

/// Byte offset just past the `>` of the opening head tag. `<header>` does not count.
fn head_open_end(page: &[u8]) -> Option<usize> {
    let lower = page.to_ascii_lowercase();
    let mut from = 0;
    while let Some(pos) = lower[from..].windows(5).position(|w| w == b"<head") {
        let after = from + pos + 5;
        match lower.get(after) {
            Some(b'>') => return Some(after + 1),
            Some(c) if c.is_ascii_whitespace() => {
                return lower[after..]
                    .iter()
                    .position(|&b| b == b'>')
                    .map(|p| after + p + 1);
            }
            _ => from = after,
        }
    }
    None
}
