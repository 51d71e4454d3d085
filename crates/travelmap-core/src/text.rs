// crates/travelmap-core/src/text.rs

/// Convert a string into a folded key suitable for loose comparison.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `西門町` -> `Xi Men Ting`)
/// 2) Drop everything that is not alphanumeric (spaces, punctuation)
/// 3) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use travelmap_core::text::fold_key;
///
/// assert_eq!(fold_key("Straße 101"), "strasse101");
/// assert_eq!(fold_key("  "), "");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
