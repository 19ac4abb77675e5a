//! Free-form text → path segment.
//!
//! ```text
//! "  Social Media  "  ──make_path──▶  "Social-Media"
//!                     ──make_path_sanitized──▶  "social-media"
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Punctuation kept verbatim by [`unicode_sanitize`].
const PATH_PUNCTUATION: &[char] = &['%', '.', '/', '\\', '_', '-', '#'];

/// Per-call sanitizing policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeConfig {
    /// Keep the original casing in [`make_path_sanitized`].
    pub disable_lowercasing: bool,
    /// Strip diacritics after the allow-list filter.
    pub remove_accents: bool,
}

/// Whether `c` survives [`unicode_sanitize`].
///
/// Letters (`L*`), decimal digits (`Nd`), marks (`M*`) and `% . / \ _ - #`.
/// Other numbers such as `²` or `Ⅻ` and letter-like symbols such as `Ⓐ` are
/// dropped.
#[inline]
pub fn is_path_char(c: char) -> bool {
    match c.general_category_group() {
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark => true,
        GeneralCategoryGroup::Number => c.general_category() == GeneralCategory::DecimalNumber,
        _ => PATH_PUNCTUATION.contains(&c),
    }
}

/// Non-spacing mark (`Mn`), the only marks accent removal strips.
#[inline]
fn is_nonspacing_mark(c: char) -> bool {
    c.general_category() == GeneralCategory::NonspacingMark
}

/// Turn `text` into something usable as a path, preserving case.
///
/// Surrounding whitespace is trimmed and every space becomes `-` before the
/// character filter runs.
pub fn make_path(text: &str, config: SanitizeConfig) -> String {
    unicode_sanitize(&text.trim().replace(' ', "-"), config)
}

/// [`make_path`], lower-cased unless `disable_lowercasing` is set.
pub fn make_path_sanitized(text: &str, config: SanitizeConfig) -> String {
    let path = make_path(text, config);
    if config.disable_lowercasing {
        path
    } else {
        path.to_lowercase()
    }
}

/// Rough inverse of [`make_path`]: hyphens back to spaces.
pub fn make_title(path: &str) -> String {
    path.trim().replace('-', " ")
}

/// Drop every char outside the path allow-list; optionally strip accents.
///
/// Accent removal decomposes (NFD), drops the non-spacing marks and recomposes
/// (NFC), so `é` becomes `e`. Spacing marks such as Devanagari vowel signs
/// are kept.
pub fn unicode_sanitize(text: &str, config: SanitizeConfig) -> String {
    let kept: String = text.chars().filter(|&c| is_path_char(c)).collect();

    if config.remove_accents {
        kept.nfd().filter(|&c| !is_nonspacing_mark(c)).nfc().collect()
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER: SanitizeConfig = SanitizeConfig {
        disable_lowercasing: false,
        remove_accents: false,
    };
    const PRESERVE: SanitizeConfig = SanitizeConfig {
        disable_lowercasing: true,
        remove_accents: false,
    };
    const ASCII: SanitizeConfig = SanitizeConfig {
        disable_lowercasing: false,
        remove_accents: true,
    };

    #[test]
    fn test_make_path() {
        for (input, expected) in [
            ("  Foo bar  ", "Foo-bar"),
            ("Foo.Bar/foo_Bar-Foo", "Foo.Bar/foo_Bar-Foo"),
            ("fOO,bar:foobAR", "fOObarfoobAR"),
            ("FOo/BaR.html", "FOo/BaR.html"),
            ("трям/трям", "трям/трям"),
            ("은행", "은행"),
            ("Банковский кассир", "Банковский-кассир"),
            ("a%b#c\\d", "a%b#c\\d"),
            ("100% (true)!", "100%-true"),
        ] {
            assert_eq!(make_path(input, LOWER), expected, "make_path({input:?})");
        }
    }

    #[test]
    fn test_make_path_output_is_allow_listed() {
        for input in [
            "Hello, World!",
            "  tabs\tand\nnewlines  ",
            "emoji 🎉 party",
            "quotes \"and\" 'apostrophes'",
            "<script>alert(1)</script>",
        ] {
            let path = make_path(input, LOWER);
            assert!(!path.contains(' '), "{path:?} contains a space");
            assert!(path.chars().all(is_path_char), "{path:?} not allow-listed");
        }
    }

    #[test]
    fn test_make_path_drops_non_path_chars() {
        for (input, expected) in [
            ("x²", "x"),
            ("H₂O", "HO"),
            ("½cup", "cup"),
            ("Ⅻc", "c"),
            ("Ⓐb", "b"),
            ("©2024 ™", "2024-"),
            ("a→b=c+d", "abcd"),
            ("emoji 🎉 party", "emoji--party"),
            ("$5 @home", "5-home"),
            // decimal digits of any script are kept
            ("٣x", "٣x"),
            // as are modifier and titlecase letters
            ("ʰǅ", "ʰǅ"),
        ] {
            assert_eq!(make_path(input, LOWER), expected, "make_path({input:?})");
        }
    }

    #[test]
    fn test_make_path_sanitized() {
        assert_eq!(make_path_sanitized("  Foo bar  ", LOWER), "foo-bar");
        assert_eq!(make_path_sanitized("FOo/BaR.html", LOWER), "foo/bar.html");
        assert_eq!(make_path_sanitized("FOo/BaR.html", PRESERVE), "FOo/BaR.html");
        assert_eq!(make_path_sanitized("Банковский кассир", LOWER), "банковский-кассир");
    }

    #[test]
    fn test_make_path_sanitized_idempotent() {
        for config in [LOWER, PRESERVE, ASCII] {
            for input in ["  Foo bar  ", "Été à Paris", "a, b; c", "Банковский кассир"] {
                let once = make_path_sanitized(input, config);
                let twice = make_path_sanitized(&once, config);
                assert_eq!(once, twice, "not idempotent for {input:?} / {config:?}");
            }
        }
    }

    #[test]
    fn test_remove_accents() {
        assert_eq!(make_path_sanitized("Été à Paris", ASCII), "ete-a-paris");
        assert_eq!(unicode_sanitize("Ñandú", ASCII), "Nandu");
        // without the flag accents are letters and survive
        assert_eq!(unicode_sanitize("Ñandú", LOWER), "Ñandú");
    }

    #[test]
    fn test_remove_accents_keeps_spacing_marks() {
        // U+0902 is non-spacing, U+093F and U+0940 are spacing vowel signs
        assert_eq!(unicode_sanitize("हिंदी", ASCII), "हिदी");
        assert_eq!(unicode_sanitize("हिंदी", LOWER), "हिंदी");
        // enclosing marks survive too
        assert_eq!(unicode_sanitize("a\u{20DD}", ASCII), "a\u{20DD}");
    }

    #[test]
    fn test_decomposed_accents_are_marks() {
        // "e" + COMBINING ACUTE ACCENT passes the allow-list as a mark
        let decomposed = "e\u{301}";
        assert_eq!(unicode_sanitize(decomposed, LOWER), decomposed);
        assert_eq!(unicode_sanitize(decomposed, ASCII), "e");
    }

    #[test]
    fn test_make_title() {
        assert_eq!(make_title("  social-media  "), "social media");
        assert_eq!(make_title("no-dashes-at-all"), "no dashes at all");
        // lossy: original hyphens are gone too
        assert_eq!(make_title(&make_path("well-known name", LOWER)), "well known name");
    }
}
