//! Sentence segmentation
//!
//! Splits normalized text into sentences at `.`, `!`, and `?` boundaries.
//! Segmentation is lazy: [`SentenceSegmenter::segment`] returns a single-pass
//! iterator that yields trimmed, non-empty sentence slices in document order.
//!
//! The default [`RuleSegmenter`] loads its abbreviation set once at
//! construction and is immutable afterwards, so one instance can be shared
//! across threads behind an `Arc`. Callers with a statistical sentence
//! detector can substitute it through the trait.

use rustc_hash::FxHashSet;

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "rep", "st", "jr", "sr", "vs", "etc",
    "inc", "ltd", "co", "corp", "dept", "univ", "est", "fig", "vol", "approx", "al",
];

/// Splits text into sentences
///
/// Implementations must yield trimmed, non-empty sentences in document order
/// and an empty iterator for empty input. The returned iterator is
/// single-pass; segment again to re-read a document.
pub trait SentenceSegmenter: Send + Sync {
    /// Lazily iterate over the sentences of `text`
    fn segment<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// Rule-based sentence segmenter
///
/// Detects boundaries at runs of `.`, `!`, `?` followed by whitespace or end
/// of input. A lone period is not a boundary when it follows a known
/// abbreviation or a single-letter initial, and periods inside tokens such
/// as `3.14` never split because no whitespace follows them.
///
/// Sentences ending in an abbreviation merge with the following sentence;
/// that miss is the usual tradeoff of punctuation-rule segmentation.
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    /// Lowercase words whose trailing period is kept inside the sentence
    abbreviations: FxHashSet<String>,
}

impl Default for RuleSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSegmenter {
    /// Create a segmenter with the built-in English abbreviation set
    pub fn new() -> Self {
        Self::from_abbreviations(ABBREVIATIONS)
    }

    /// Create a segmenter with a custom abbreviation set
    pub fn from_abbreviations(words: &[&str]) -> Self {
        let abbreviations = words.iter().map(|w| w.to_lowercase()).collect();
        Self { abbreviations }
    }

    /// Add abbreviations to the set
    pub fn add_abbreviations(&mut self, words: &[&str]) {
        for word in words {
            self.abbreviations.insert(word.to_lowercase());
        }
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(SentenceIter {
            text,
            chars: text.char_indices().peekable(),
            start: 0,
            abbreviations: &self.abbreviations,
        })
    }
}

/// Lazy iterator over sentence slices
struct SentenceIter<'a> {
    text: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Byte offset where the current sentence begins
    start: usize,
    abbreviations: &'a FxHashSet<String>,
}

impl<'a> SentenceIter<'a> {
    /// Check whether the word ending at `period_idx` blocks the boundary
    fn is_abbreviation_before(&self, period_idx: usize) -> bool {
        let word = preceding_word(self.text, period_idx);
        if word.is_empty() {
            return false;
        }
        // Single letters are initials ("John F. Kennedy", "e.g.")
        if word.chars().count() == 1 {
            return true;
        }
        self.abbreviations.contains(word.to_lowercase().as_str())
    }
}

impl<'a> Iterator for SentenceIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some((idx, ch)) = self.chars.next() {
            if !is_terminator(ch) {
                continue;
            }

            // Fold a run of terminators ("?!", "...") into one candidate
            let mut end = idx + ch.len_utf8();
            let mut run_len = 1;
            while let Some(&(next_idx, next_ch)) = self.chars.peek() {
                if !is_terminator(next_ch) {
                    break;
                }
                end = next_idx + next_ch.len_utf8();
                run_len += 1;
                self.chars.next();
            }

            // A boundary requires whitespace or end of input after the run
            let followed_by_space = match self.chars.peek() {
                None => true,
                Some(&(_, next_ch)) => next_ch.is_whitespace(),
            };
            if !followed_by_space {
                continue;
            }

            if ch == '.' && run_len == 1 && self.is_abbreviation_before(idx) {
                continue;
            }

            let sentence = self.text[self.start..end].trim();
            self.start = end;
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }

        // Trailing text without a terminator is still a sentence
        if self.start < self.text.len() {
            let sentence = self.text[self.start..].trim();
            self.start = self.text.len();
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }

        None
    }
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// The alphabetic word immediately before `end`, or `""` if none
fn preceding_word(text: &str, end: usize) -> &str {
    let head = &text[..end];
    head.char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map(|(i, _)| &head[i..])
        .unwrap_or("")
}
