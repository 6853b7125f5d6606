//! Charset alias resolution
//!
//! Maps the many spellings of a charset found in mail and HTTP headers
//! (`latin1`, `l1`, `csisolatin1`, ...) onto the canonical name the codec
//! understands (`ISO-8859-1`).

mod table;

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

use table::CHARSET_ALIASES;

/// Lowercase alias -> canonical name, indexed on first use
static ALIAS_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let index: HashMap<_, _> = CHARSET_ALIASES.iter().copied().collect();
    debug_assert_eq!(index.len(), CHARSET_ALIASES.len(), "duplicate alias key");
    log::debug!("Indexed {} charset aliases", index.len());
    index
});

/// Spellings accepted by [`is_utf8_alias`]. Case-sensitive.
pub const UTF8_ALIASES: [&str; 4] = ["utf8", "utf-8", "UTF8", "UTF-8"];

/// Look up the canonical name for `name`, ignoring case.
///
/// Returns `None` when the table has no entry.
pub fn lookup(name: &str) -> Option<&'static str> {
    ALIAS_INDEX.get(name.to_lowercase().as_str()).copied()
}

/// Resolve a declared charset name to its canonical spelling.
///
/// Unknown names pass through unchanged, on the assumption that they are
/// already acceptable to the codec.
pub fn resolve_alias(name: &str) -> &str {
    lookup(name).unwrap_or(name)
}

/// Exact membership test against [`UTF8_ALIASES`].
///
/// This is a fast check that does not normalize: `utf_8` or `Utf-8` are not
/// recognized. Use [`resolve_alias`] for anything more forgiving.
pub fn is_utf8_alias(alias: &str) -> bool {
    UTF8_ALIASES.contains(&alias)
}

/// All `(alias, canonical)` pairs in table order
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    CHARSET_ALIASES.iter().copied()
}

/// Every alias mapping to exactly `canonical`
pub fn aliases_for(canonical: &str) -> Vec<&'static str> {
    aliases()
        .filter(|(_, target)| *target == canonical)
        .map(|(alias, _)| alias)
        .collect()
}

/// Distinct canonical names, sorted
pub fn canonical_names() -> Vec<&'static str> {
    aliases()
        .map(|(_, canonical)| canonical)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_case(s: &str) -> String {
        s.chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect()
    }

    #[test]
    fn test_keys_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (alias, _) in aliases() {
            assert_eq!(alias, alias.to_lowercase(), "key not lowercase: {}", alias);
            assert!(seen.insert(alias), "duplicate key: {}", alias);
        }
        assert!(seen.len() > 250);
    }

    #[test]
    fn test_lookup_ignores_case() {
        for (alias, canonical) in aliases() {
            assert_eq!(resolve_alias(alias), canonical);
            assert_eq!(resolve_alias(&alias.to_uppercase()), canonical);
            assert_eq!(resolve_alias(&mixed_case(alias)), canonical);
        }
    }

    #[test]
    fn test_common_aliases() {
        for name in ["latin1", "iso-8859-1", "l1", "csisolatin1", "ISO_8859-1", "IBM819"] {
            assert_eq!(resolve_alias(name), "ISO-8859-1");
        }
        assert_eq!(resolve_alias("shift_jis"), "Shift_JIS");
        assert_eq!(resolve_alias("cp932"), "Shift_JIS");
        assert_eq!(resolve_alias("ks_c_5601-1987"), "EUC-KR");
        assert_eq!(resolve_alias("gbk"), "x-gbk");
        assert_eq!(resolve_alias("ANSI-1251"), "windows-1251");
    }

    #[test]
    fn test_historically_mixed_case_keys_resolve() {
        assert_eq!(resolve_alias("csMacintosh"), "x-mac-roman");
        assert_eq!(resolve_alias("csIBM866"), "IBM866");
        assert_eq!(resolve_alias("csibm864"), "IBM864");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(resolve_alias("not-a-real-charset"), "not-a-real-charset");
        assert_eq!(resolve_alias("Not-A-Real-Charset"), "Not-A-Real-Charset");
        assert_eq!(lookup("not-a-real-charset"), None);
        assert_eq!(resolve_alias(""), "");
    }

    #[test]
    fn test_canonical_names_are_fixed_points() {
        for canonical in canonical_names() {
            let once = resolve_alias(canonical);
            assert_eq!(resolve_alias(once), once);
            assert_eq!(once, canonical);
        }
    }

    #[test]
    fn test_canonical_names_without_own_key() {
        // These pass through rather than resolve, which still keeps them stable.
        assert_eq!(lookup("ISO-8859-12"), None);
        assert_eq!(lookup("VIQR"), None);
        assert_eq!(lookup("iso885912"), Some("ISO-8859-12"));
    }

    #[test]
    fn test_utf8_alias_is_exact() {
        assert!(is_utf8_alias("utf-8"));
        assert!(is_utf8_alias("UTF-8"));
        assert!(is_utf8_alias("utf8"));
        assert!(is_utf8_alias("UTF8"));
        assert!(!is_utf8_alias("utf_8"));
        assert!(!is_utf8_alias("Utf-8"));
        assert!(!is_utf8_alias("unicode-1-1-utf-8"));
    }

    #[test]
    fn test_aliases_for() {
        let latin1 = aliases_for("ISO-8859-1");
        for alias in ["iso-8859-1", "latin1", "l1", "csisolatin1", "iso88591"] {
            assert!(latin1.contains(&alias), "missing {}", alias);
        }
        assert!(aliases_for("iso-8859-1").is_empty());
        assert!(aliases_for("nope").is_empty());
    }

    #[test]
    fn test_canonical_names_sorted_and_distinct() {
        let names = canonical_names();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.contains(&"UTF-8"));
        assert!(names.contains(&"Shift_JIS"));
    }
}
