//! Small text helpers shared by the engines

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a display name for comparison
///
/// Decomposes to NFD, drops combining marks (diacritics), lower-cases and
/// trims, so `"En Distribución "` and `"en distribucion"` compare equal.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Trimmed view of `value`, or `None` when it is missing or blank
#[inline]
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_diacritics_and_case() {
        assert_eq!(normalize_name("En Distribución"), "en distribucion");
        assert_eq!(normalize_name("  ENTREGADA "), "entregada");
        assert_eq!(normalize_name("Preparación"), "preparacion");
    }

    #[test]
    fn normalize_keeps_plain_ascii() {
        assert_eq!(normalize_name("pendiente"), "pendiente");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("  x ")), Some("x"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
