// src/generators/base_words.rs
use chrono::NaiveDate;

use crate::models::PersonalInfo;

/// Birthdate layouts, tried in order until one parses
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y%m%d"];

/// Parse a birthdate against [`DATE_FORMATS`], first match wins
pub fn parse_birthdate(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Year, short year, month, day, month+day and day+month of a date
pub fn date_fragments(date: NaiveDate) -> [String; 6] {
    ["%Y", "%y", "%m", "%d", "%m%d", "%d%m"].map(|fmt| date.format(fmt).to_string())
}

/// Collect the literal words a wordlist is seeded from.
///
/// Order follows the record: names, nickname, pet name, birthdate
/// fragments, city, company. Repeats are dropped, blank fields skipped.
/// A birthdate that matches none of the known layouts adds nothing.
pub fn extract_base_words(info: &PersonalInfo) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut push = |word: &str| {
        let word = word.trim();
        if !word.is_empty() && !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    };

    push(&info.first_name);
    push(&info.last_name);
    push(&info.nickname);
    push(&info.pet_name);

    if !info.birthdate.trim().is_empty() {
        match parse_birthdate(&info.birthdate) {
            Some(date) => {
                for fragment in date_fragments(date) {
                    push(&fragment);
                }
            }
            None => log::debug!("Skipping unparseable birthdate '{}'", info.birthdate),
        }
    }

    push(&info.city);
    push(&info.company);

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_with_birthdate(birthdate: &str) -> PersonalInfo {
        PersonalInfo {
            birthdate: birthdate.to_string(),
            ..PersonalInfo::default()
        }
    }

    #[test]
    fn test_iso_birthdate_fragments() {
        let words = extract_base_words(&info_with_birthdate("1990-05-15"));
        assert_eq!(words, vec!["1990", "90", "05", "15", "0515", "1505"]);
    }

    #[test]
    fn test_format_order() {
        // Day-first wins when both readings are valid
        assert_eq!(parse_birthdate("05/06/1990"), NaiveDate::from_ymd_opt(1990, 6, 5));
        // Falls through to month-first when day-first is impossible
        assert_eq!(parse_birthdate("12/31/1990"), NaiveDate::from_ymd_opt(1990, 12, 31));
        assert_eq!(parse_birthdate("19900515"), NaiveDate::from_ymd_opt(1990, 5, 15));
        assert_eq!(parse_birthdate(" 1990-05-15 "), NaiveDate::from_ymd_opt(1990, 5, 15));
    }

    #[test]
    fn test_unparseable_birthdate_is_skipped() {
        assert_eq!(parse_birthdate("sometime in May"), None);
        assert_eq!(parse_birthdate("1990-02-30"), None);

        let mut info = info_with_birthdate("not a date");
        info.first_name = "Ann".to_string();
        assert_eq!(extract_base_words(&info), vec!["Ann"]);
    }

    #[test]
    fn test_field_order_and_dedup() {
        let info = PersonalInfo {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            nickname: "Ann".to_string(),
            pet_name: "Rex".to_string(),
            birthdate: String::new(),
            city: "  ".to_string(),
            company: "Acme".to_string(),
        };
        assert_eq!(extract_base_words(&info), vec!["Ann", "Lee", "Rex", "Acme"]);
    }
}
