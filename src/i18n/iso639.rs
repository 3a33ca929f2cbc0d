// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 codes, used to sanity-check locale names.
//!
//! Locale names are free-form registry keys. By convention they are an
//! ISO 639-1 code, optionally followed by a region (`es`, `pt-PT`). Names
//! that break the convention are still registered; the CLI only warns.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Sorted, so lookups can binary search.
const CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Whether `code` is a two-letter ISO 639-1 code. Lowercase only.
///
/// # Examples
/// ```
/// assert!(gbs_translate::i18n::is_valid_iso639_1("es"));
/// assert!(!gbs_translate::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    CODES.binary_search(&code).is_ok()
}

/// Whether a locale name follows the `xx` / `xx-YY` convention, where `xx`
/// is ISO 639-1 and `YY` an uppercase two-letter region.
pub fn is_conventional_locale_tag(tag: &str) -> bool {
    let mut parts = tag.splitn(2, '-');
    let language = parts.next().unwrap_or("");
    if !is_valid_iso639_1(language) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(region) => region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(CODES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn codes() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("pt"));
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1("EN"));
        assert!(!is_valid_iso639_1("eng"));
        assert!(!is_valid_iso639_1(""));
    }

    #[test]
    fn locale_tags() {
        assert!(is_conventional_locale_tag("es"));
        assert!(is_conventional_locale_tag("pt-PT"));
        assert!(!is_conventional_locale_tag("pt-pt"));
        assert!(!is_conventional_locale_tag("pt-BRA"));
        assert!(!is_conventional_locale_tag("klingon"));
        assert!(!is_conventional_locale_tag("es-"));
    }
}
