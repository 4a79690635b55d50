// src/generators/wordlist.rs
use std::cmp::Reverse;
use std::rc::Rc;

use indexmap::IndexSet;

use crate::models::{GenerationOptions, PersonalInfo};
use super::base_words::extract_base_words;
use super::mutations::{case_variants, common_patterns, leet_variants, suffix_variants};
use super::years::{expansion_bound, YearExpansion};

/// A case-sensitive set of candidate passwords that remembers insertion order
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: IndexSet<String>,
}

impl Wordlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, returning false if it was already present
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in the order they were first inserted
    pub fn into_insertion_order(self) -> Vec<String> {
        self.words.into_iter().collect()
    }

    /// Longest words first; equal lengths keep insertion order
    pub fn into_sorted(self) -> Vec<String> {
        let mut words = self.into_insertion_order();
        words.sort_by_key(|word| Reverse(word.chars().count()));
        words
    }
}

impl Extend<String> for Wordlist {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.words.extend(iter);
    }
}

impl FromIterator<String> for Wordlist {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Expands personal information into candidate passwords.
///
/// Stages, each adding to one growing set:
/// 1. base words from the record (names, pet, city, company, birthdate parts)
/// 2. case variants of every base word
/// 3. leetspeak variants, if enabled
/// 4. suffixed variants, if enabled
/// 5. every word so far with each year of the range appended, if enabled
/// 6. generic admin/password words and name combinations, if enabled
///
/// Stages 1 to 4 run once in [`new`](Self::new); the year stage is only
/// evaluated by [`generate`](Self::generate) or [`stream`](Self::stream).
pub struct WordlistGenerator<'a> {
    info: &'a PersonalInfo,
    options: &'a GenerationOptions,
    seeds: Vec<String>,
}

impl<'a> WordlistGenerator<'a> {
    pub fn new(info: &'a PersonalInfo, options: &'a GenerationOptions) -> Self {
        let mut seeds = Wordlist::new();

        for word in extract_base_words(info) {
            seeds.extend(case_variants(&word));

            if options.leet_speak {
                seeds.extend(leet_variants(&word));
            }

            if options.common_suffixes {
                seeds.extend(suffix_variants(&word));
            }
        }

        Self {
            info,
            options,
            seeds: seeds.into_insertion_order(),
        }
    }

    /// Words produced by stages 1 to 4, deduplicated in insertion order
    pub fn seed_words(&self) -> &[String] {
        &self.seeds
    }

    fn pattern_words(&self) -> Vec<String> {
        if self.options.common_patterns {
            common_patterns(self.info)
        } else {
            Vec::new()
        }
    }

    /// Upper bound on the number of words [`generate`](Self::generate) returns
    pub fn estimate_size(&self) -> usize {
        let seeds = self.seeds.len();
        let years = if self.options.append_years {
            expansion_bound(seeds, self.options.start_year, self.options.end_year)
        } else {
            0
        };
        seeds + years + self.pattern_words().len()
    }

    /// Run every enabled stage and collect the result into one set
    pub fn generate(&self) -> Wordlist {
        log::debug!("{} seed words before year expansion", self.seeds.len());

        let mut wordlist: Wordlist = self.seeds.iter().cloned().collect();

        if self.options.append_years {
            wordlist.extend(YearExpansion::new(
                self.seeds.iter(),
                self.options.start_year,
                self.options.end_year,
            ));
            log::debug!("{} words after year expansion", wordlist.len());
        }

        wordlist.extend(self.pattern_words());
        wordlist
    }

    /// Generate and order longest first
    pub fn sorted(&self) -> Vec<String> {
        let wordlist = self.generate();
        log::info!("Generated wordlist with {} words", wordlist.len());
        wordlist.into_sorted()
    }

    /// Produce the same words as [`generate`](Self::generate) lazily.
    ///
    /// Seed words come first, then pattern words, then the year expansion.
    /// Only the seeds and patterns are kept in memory. The output is not
    /// length ordered but holds no duplicates.
    pub fn stream(self) -> impl Iterator<Item = String> + 'a {
        let patterns = self.pattern_words();
        let options = self.options;

        let mut known: IndexSet<String> = self.seeds.into_iter().collect();
        let seed_count = known.len();
        known.extend(patterns);
        let known = Rc::new(known);

        let years = options.append_years.then(|| {
            let source = Rc::clone(&known);
            let seen = Rc::clone(&known);
            YearExpansion::new(
                (0..seed_count).map(move |index| source[index].clone()),
                options.start_year,
                options.end_year,
            )
            .filter(move |word| !seen.contains(word))
        });

        (0..known.len())
            .map(move |index| known[index].clone())
            .chain(years.into_iter().flatten())
    }
}

/// Generate a wordlist ordered longest first with no repeated entries
pub fn generate_wordlist(info: &PersonalInfo, options: &GenerationOptions) -> Vec<String> {
    WordlistGenerator::new(info, options).sorted()
}
