// crates/countrydb-core/src/text.rs

/// Canonical form used by every name and field comparison.
///
/// Trims surrounding whitespace and lower-cases the rest. Both the query and
/// the candidate go through this, so matching is case- and
/// whitespace-insensitive by construction.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::normalize;
///
/// assert_eq!(normalize("  Sri Lanka "), "sri lanka");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Like [`normalize`], for optional input. `None` becomes the empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}

/// Canonical form for ISO codes: trimmed and upper-cased.
pub fn normalize_code(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

/// Normalized phone code with a single leading `+` removed ("+94" -> "94").
pub fn normalize_phone(s: &str) -> String {
    let s = s.trim();
    normalize(s.strip_prefix('+').unwrap_or(s))
}

/// Case-insensitive equality on the normalized form.
pub fn equals_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Flag emoji for a two-letter ISO2 code ("LK" -> "🇱🇰").
///
/// Anything that is not exactly two ASCII letters yields an empty string.
pub fn flag_emoji(iso2: &str) -> String {
    const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

    let code = normalize_code(iso2);
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return String::new();
    }
    code.bytes()
        .filter_map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_folds_case() {
        assert_eq!(normalize("\tUnited Kingdom\n"), "united kingdom");
        assert_eq!(normalize("ÉIRE"), "éire");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn missing_input_normalizes_to_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" X ")), "x");
    }

    #[test]
    fn codes_are_upper_cased() {
        assert_eq!(normalize_code(" lk "), "LK");
        assert_eq!(normalize_code("lka"), "LKA");
    }

    #[test]
    fn phone_prefix_is_stripped_once() {
        assert_eq!(normalize_phone("+94"), "94");
        assert_eq!(normalize_phone(" 94 "), "94");
        assert_eq!(normalize_phone("++1"), "+1");
    }

    #[test]
    fn flags_from_iso2() {
        assert_eq!(flag_emoji("LK"), "\u{1F1F1}\u{1F1F0}");
        assert_eq!(flag_emoji(" us "), "🇺🇸");
        assert_eq!(flag_emoji("LKA"), "");
        assert_eq!(flag_emoji("1A"), "");
        assert_eq!(flag_emoji(""), "");
    }

    #[test]
    fn equality_ignores_case_and_padding() {
        assert!(equals_normalized("Asia", " asia "));
        assert!(!equals_normalized("Asia", "Asian"));
    }
}
