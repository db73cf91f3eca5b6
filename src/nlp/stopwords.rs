//! Stopword filtering
//!
//! Stopwords carry no topical signal and would dominate sentence similarity
//! if left in the TF-IDF vocabulary. Lists come from the `stop-words` crate,
//! keyed by language code, with support for custom lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from extracted terms
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language
    ///
    /// Accepts two-letter codes or English names (en, de, fr, es, it, pt,
    /// nl, ru, sv, no, da, fi, hu, tr, pl, ar). Unknown languages fall back
    /// to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create an empty filter (no terms are removed)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add words to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    ///
    /// Lookup is case-insensitive; already-lowercase input avoids the
    /// allocation for the folded copy.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        if word.chars().any(char::is_uppercase) {
            return self.stopwords.contains(word.to_lowercase().as_str());
        }
        false
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
