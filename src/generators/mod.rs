// src/generators/mod.rs
pub mod base_words;
pub mod mutations;
pub mod wordlist;
pub mod years;

pub use base_words::{extract_base_words, parse_birthdate};
pub use wordlist::{generate_wordlist, Wordlist, WordlistGenerator};
pub use years::YearExpansion;
