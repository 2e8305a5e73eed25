//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content and used as a
/// cache-busting query string.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Emoji placeholder standing in for a product photo.
///
/// Usage in templates: `{{ product.category|category_emoji }}`
#[askama::filter_fn]
pub fn category_emoji(
    category: impl Display,
    _env: &dyn askama::Values,
) -> askama::Result<&'static str> {
    Ok(emoji_for(&category.to_string()))
}

pub(crate) fn emoji_for(category: &str) -> &'static str {
    match category {
        "Tropical" => "\u{1F34C}",
        "Berries" => "\u{1F353}",
        "Citrus" => "\u{1F34A}",
        _ => "\u{1F34E}",
    }
}
