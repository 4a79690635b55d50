// src/generators/mutations.rs
use crate::models::PersonalInfo;

/// Letter substitutions used for leetspeak variants
pub const LEET_TABLE: &[(char, &[&str])] = &[
    ('a', &["@", "4"]),
    ('e', &["3"]),
    ('i', &["1", "!"]),
    ('o', &["0"]),
    ('s', &["5", "$"]),
    ('t', &["7"]),
    ('l', &["1"]),
    ('b', &["8"]),
];

pub const COMMON_SUFFIXES: &[&str] = &[
    "!", "@", "#", "$", "%", "^", "&", "*", "123", "1234", "!123",
];

/// Generic account words injected regardless of personal info
pub const COMMON_BASES: &[&str] = &["admin", "password", "welcome", "login", "user", "pass"];

/// Upper-case the first character and lower-case the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The word as given, lower-cased, upper-cased and capitalized
pub fn case_variants(word: &str) -> [String; 4] {
    [
        word.to_string(),
        word.to_lowercase(),
        word.to_uppercase(),
        capitalize(word),
    ]
}

/// Leetspeak variants of a word.
///
/// Each table letter found in the lower-cased word yields one variant per
/// substitute, with every occurrence of that letter replaced, plus its
/// capitalized form. Letters are substituted one at a time starting from
/// the original word, never combined.
pub fn leet_variants(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    let mut variants = Vec::new();

    for (letter, substitutes) in LEET_TABLE {
        if !lower.contains(*letter) {
            continue;
        }
        for substitute in *substitutes {
            let variant = lower.replace(*letter, substitute);
            let capitalized = capitalize(&variant);
            variants.push(variant);
            variants.push(capitalized);
        }
    }

    variants
}

/// The word and its lower-case form, each followed by every common suffix
pub fn suffix_variants(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    COMMON_SUFFIXES
        .iter()
        .flat_map(|suffix| [format!("{word}{suffix}"), format!("{lower}{suffix}")])
        .collect()
}

/// Name combinations plus generic admin/password style words.
///
/// The six name combinations are only produced when both the first and
/// last name are present.
pub fn common_patterns(info: &PersonalInfo) -> Vec<String> {
    let mut patterns = Vec::new();

    let first = info.first_name.trim();
    let last = info.last_name.trim();
    if let (Some(first_initial), Some(last_initial)) = (first.chars().next(), last.chars().next()) {
        patterns.push(format!("{first}{last}"));
        patterns.push(format!("{first}.{last}"));
        patterns.push(format!("{first}_{last}"));
        patterns.push(format!("{first_initial}{last}"));
        patterns.push(format!("{first}{last_initial}"));
        patterns.push(format!("{last}{first}"));
    }

    for base in COMMON_BASES {
        patterns.push(base.to_string());
        patterns.push(format!("{base}123"));
        patterns.push(format!("{base}!"));
        patterns.push(format!("{}123", capitalize(base)));
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ann"), "Ann");
        assert_eq!(capitalize("Ann"), "Ann");
        assert_eq!(capitalize("mcDONALD"), "Mcdonald");
        assert_eq!(capitalize("@nn"), "@nn");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_case_variants() {
        assert_eq!(case_variants("Ann"), ["Ann", "ann", "ANN", "Ann"].map(String::from));
    }

    #[test]
    fn test_leet_replaces_every_occurrence() {
        let variants = leet_variants("test");
        assert!(variants.contains(&"7es7".to_string()));
        assert!(variants.contains(&"t3st".to_string()));
        assert!(variants.contains(&"T3st".to_string()));
        assert!(variants.contains(&"te5t".to_string()));
        assert!(variants.contains(&"te$t".to_string()));
        // One letter per variant, never combined
        assert!(!variants.contains(&"73s7".to_string()));
        // e, s (two substitutes), t: 4 variants, each with a capitalized twin
        assert_eq!(variants.len(), 8);
    }

    #[test]
    fn test_leet_works_from_lowercase() {
        let variants = leet_variants("BOB");
        assert!(variants.contains(&"b0b".to_string()));
        assert!(variants.contains(&"8o8".to_string()));
        assert!(leet_variants("xyz").is_empty());
    }

    #[test]
    fn test_suffix_variants() {
        let variants = suffix_variants("Ann");
        assert_eq!(variants.len(), COMMON_SUFFIXES.len() * 2);
        assert!(variants.contains(&"Ann!123".to_string()));
        assert!(variants.contains(&"ann^".to_string()));
    }

    #[test]
    fn test_common_patterns_with_full_name() {
        let info = PersonalInfo {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            ..PersonalInfo::default()
        };
        let patterns = common_patterns(&info);
        for expected in ["AnnLee", "Ann.Lee", "Ann_Lee", "ALee", "AnnL", "LeeAnn"] {
            assert!(patterns.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(patterns.contains(&"Welcome123".to_string()));
        assert_eq!(patterns.len(), 6 + COMMON_BASES.len() * 4);
    }

    #[test]
    fn test_common_patterns_without_last_name() {
        let info = PersonalInfo {
            first_name: "Ann".to_string(),
            ..PersonalInfo::default()
        };
        let patterns = common_patterns(&info);
        assert_eq!(patterns.len(), COMMON_BASES.len() * 4);
        assert!(patterns.contains(&"admin!".to_string()));
    }
}
