//! Query-string filter matching.
//!
//! List endpoints accept URL-friendly slugs (`?type=bass-guitar`). A slug is
//! normalized by turning every `-` into a space, then compared against the
//! stored value case-insensitively and in full (no prefix or substring match).
//! Only the filter is normalized; the stored value is compared as-is.

/// Replace every hyphen in a filter slug with a space.
///
/// # Examples
///
/// ```
/// use gg_core::filter::normalize_slug;
///
/// assert_eq!(normalize_slug("bass-guitar"), "bass guitar");
/// assert_eq!(normalize_slug("Amplifier"), "Amplifier");
/// ```
pub fn normalize_slug(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Whether `value` equals the normalized `slug`, ignoring case.
pub fn matches_slug(value: &str, slug: &str) -> bool {
    value.to_lowercase() == normalize_slug(slug).to_lowercase()
}

/// Apply an optional slug filter: `None` matches everything.
pub fn matches_optional_slug(value: &str, slug: Option<&str>) -> bool {
    slug.map_or(true, |s| matches_slug(value, s))
}
