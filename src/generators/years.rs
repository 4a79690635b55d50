// src/generators/years.rs
use std::collections::HashSet;

use indexmap::IndexSet;

/// Separators placed between a word and an appended year
pub const YEAR_SEPARATORS: [&str; 4] = ["", "-", "_", "."];

// Full and two-digit year for each separator
const FORMS_PER_YEAR: usize = YEAR_SEPARATORS.len() * 2;

/// Lazy word × year × separator expansion.
///
/// For every word and every year in `start..=end` this yields
/// `word{sep}{YYYY}` and `word{sep}{YY}` for each separator in
/// [`YEAR_SEPARATORS`]. The distinct endings for the range are built once
/// up front; words are pulled from the source one at a time.
///
/// The output never repeats itself. An ending the range already produced
/// (1920 and 2020 both give `20`) is used once, and a string an earlier
/// word already spelled with some ending is skipped.
pub struct YearExpansion<I> {
    words: I,
    suffixes: IndexSet<String>,
    suffix_lengths: Vec<usize>,
    previous: HashSet<String>,
    current: Option<String>,
    next_suffix: usize,
}

impl<I> YearExpansion<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    pub fn new(words: I, start: i32, end: i32) -> Self {
        let suffixes = year_suffixes(start, end);
        let mut suffix_lengths: Vec<usize> = suffixes.iter().map(String::len).collect();
        suffix_lengths.sort_unstable();
        suffix_lengths.dedup();

        Self {
            words,
            suffixes,
            suffix_lengths,
            previous: HashSet::new(),
            current: None,
            next_suffix: 0,
        }
    }

    // Whether an earlier word plus one of the endings spells `candidate`
    fn produced_earlier(&self, candidate: &str) -> bool {
        if self.previous.is_empty() {
            return false;
        }
        self.suffix_lengths.iter().any(|&length| {
            let Some(cut) = candidate.len().checked_sub(length) else {
                return false;
            };
            if !candidate.is_char_boundary(cut) {
                return false;
            }
            let (prefix, suffix) = candidate.split_at(cut);
            self.previous.contains(prefix) && self.suffixes.contains(suffix)
        })
    }
}

/// Last two digits of a year as written, e.g. "90" for 1990
pub fn short_year(year: i32) -> String {
    let full = year.to_string();
    full.get(2..).unwrap_or_default().to_string()
}

/// Every distinct separator and year ending for `start..=end`, in the order
/// they are appended
pub fn year_suffixes(start: i32, end: i32) -> IndexSet<String> {
    let mut suffixes = IndexSet::new();
    for year in start..=end {
        let full = year.to_string();
        let short = short_year(year);
        for separator in YEAR_SEPARATORS {
            suffixes.insert(format!("{separator}{full}"));
            suffixes.insert(format!("{separator}{short}"));
        }
    }
    suffixes
}

impl<I> Iterator for YearExpansion<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.suffixes.is_empty() {
            return None;
        }

        loop {
            let Some(word) = &self.current else {
                self.current = Some(self.words.next()?.into());
                self.next_suffix = 0;
                continue;
            };

            let Some(suffix) = self.suffixes.get_index(self.next_suffix) else {
                if let Some(done) = self.current.take() {
                    self.previous.insert(done);
                }
                continue;
            };
            self.next_suffix += 1;

            let candidate = format!("{word}{suffix}");
            if !self.produced_earlier(&candidate) {
                return Some(candidate);
            }
        }
    }
}

/// Upper bound on the number of strings the expansion can produce
pub fn expansion_bound(word_count: usize, start: i32, end: i32) -> usize {
    if start > end {
        return 0;
    }
    let years = (i64::from(end) - i64::from(start) + 1) as usize;
    word_count.saturating_mul(years).saturating_mul(FORMS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_two_years() {
        let words: Vec<String> = YearExpansion::new(["ann"].into_iter(), 2020, 2021).collect();
        for expected in [
            "ann2020", "ann20", "ann2021", "ann21",
            "ann-2020", "ann-20", "ann_2020", "ann_21", "ann.2020", "ann.21",
        ] {
            assert!(words.contains(&expected.to_string()), "missing {expected}");
        }
        assert_eq!(words.len(), 16);
        assert_eq!(words[0], "ann2020");
        assert_eq!(words[1], "ann20");
    }

    #[test]
    fn test_multiple_words_in_order() {
        let words: Vec<String> =
            YearExpansion::new(vec!["a".to_string(), "b".to_string()].into_iter(), 1999, 1999)
                .collect();
        assert_eq!(words.len(), 16);
        assert_eq!(words[0], "a1999");
        assert_eq!(words[8], "b1999");
        assert_eq!(words[15], "b.99");
    }

    #[test]
    fn test_century_span_has_no_repeats() {
        let words: Vec<String> = YearExpansion::new(["x"].into_iter(), 1920, 2020).collect();
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
        // 101 years of full forms, 100 distinct two-digit values
        assert_eq!(words.len(), 101 * 4 + 100 * 4);
        assert!(words.contains(&"x2020".to_string()));
        assert!(words.contains(&"x_20".to_string()));
    }

    #[test]
    fn test_five_digit_years_keep_their_endings() {
        let words: Vec<String> = YearExpansion::new(["x"].into_iter(), 9920, 10020).collect();
        for expected in ["x20", "x9920", "x10020", "x020", "x-020", "x_020", "x.020"] {
            assert!(words.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_extreme_years_terminate() {
        let words: Vec<String> = YearExpansion::new(["x"].into_iter(), i32::MAX, i32::MAX)
            .take(20)
            .collect();
        assert_eq!(words.len(), FORMS_PER_YEAR);
        assert_eq!(words[0], "x2147483647");

        let words: Vec<String> = YearExpansion::new(["x"].into_iter(), i32::MIN, i32::MIN)
            .take(20)
            .collect();
        assert_eq!(words.len(), FORMS_PER_YEAR);
        assert_eq!(expansion_bound(1, i32::MIN, i32::MIN), FORMS_PER_YEAR);
    }

    #[test]
    fn test_earlier_word_collisions_are_skipped() {
        // "ann" + "2020" and "ann20" + "20" spell the same string
        let words: Vec<String> =
            YearExpansion::new(["ann", "ann20"].into_iter(), 2020, 2020).collect();
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
        assert_eq!(words.len(), 15);
        assert_eq!(words.iter().filter(|w| *w == "ann2020").count(), 1);
        assert!(words.contains(&"ann202020".to_string()));
    }

    #[test]
    fn test_repeated_input_word_adds_nothing() {
        let words: Vec<String> =
            YearExpansion::new(["ann", "ann"].into_iter(), 2020, 2020).collect();
        assert_eq!(words.len(), FORMS_PER_YEAR);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(YearExpansion::new(["x"].into_iter(), 2021, 2020).count(), 0);
        assert_eq!(YearExpansion::new(Vec::<String>::new().into_iter(), 2000, 2001).count(), 0);
        assert_eq!(expansion_bound(3, 2021, 2020), 0);
        assert_eq!(expansion_bound(3, 2020, 2021), 48);
    }

    #[test]
    fn test_short_year() {
        assert_eq!(short_year(1990), "90");
        assert_eq!(short_year(2005), "05");
        assert_eq!(short_year(10020), "020");
    }
}
