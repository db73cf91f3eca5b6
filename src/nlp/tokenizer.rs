//! Term extraction for sentence feature vectors
//!
//! Terms are maximal alphanumeric runs of at least two characters,
//! lowercased, with stopwords removed. Punctuation, single letters, and
//! symbols never enter the vocabulary.

use super::stopwords::StopwordFilter;

/// Minimum term length in characters
const MIN_TERM_LEN: usize = 2;

/// Extract the content terms of a sentence
///
/// Returns lowercase terms in occurrence order, duplicates included
/// (term frequency is counted downstream).
pub fn extract_terms(text: &str, stopwords: &StopwordFilter) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                current.push(lower);
            }
        } else if !current.is_empty() {
            push_term(&mut terms, std::mem::take(&mut current), stopwords);
        }
    }
    if !current.is_empty() {
        push_term(&mut terms, current, stopwords);
    }

    terms
}

fn push_term(terms: &mut Vec<String>, term: String, stopwords: &StopwordFilter) {
    if term.chars().count() >= MIN_TERM_LEN && !stopwords.is_stopword(&term) {
        terms.push(term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_extraction() {
        let stopwords = StopwordFilter::empty();
        let terms = extract_terms("Hello, world!", &stopwords);

        assert_eq!(terms, vec!["hello", "world"]);
    }

    #[test]
    fn test_stopwords_removed() {
        let stopwords = StopwordFilter::new("en");
        let terms = extract_terms("The quick brown fox", &stopwords);

        assert_eq!(terms, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn test_single_characters_dropped() {
        let stopwords = StopwordFilter::empty();
        let terms = extract_terms("I bought a TV", &stopwords);

        assert_eq!(terms, vec!["bought", "tv"]);
    }

    #[test]
    fn test_numbers_kept() {
        let stopwords = StopwordFilter::empty();
        let terms = extract_terms("covid 19 pandemic", &stopwords);

        assert_eq!(terms, vec!["covid", "19", "pandemic"]);
    }

    #[test]
    fn test_punctuation_splits_terms() {
        let stopwords = StopwordFilter::empty();
        let terms = extract_terms("state-of-the-art; don't", &stopwords);

        assert_eq!(terms, vec!["state", "of", "the", "art", "don"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let stopwords = StopwordFilter::empty();
        let terms = extract_terms("data beats data", &stopwords);

        assert_eq!(terms, vec!["data", "beats", "data"]);
    }

    #[test]
    fn test_empty_input() {
        let stopwords = StopwordFilter::empty();
        assert!(extract_terms("", &stopwords).is_empty());
        assert!(extract_terms("... !!", &stopwords).is_empty());
    }
}
