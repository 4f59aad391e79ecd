//! Signal extraction - lexical and structural scans over raw text
//!
//! Every scan is a pure function of the input text:
//! - Scans are independent and order-insensitive
//! - The only shared state is the immutable lexicons
//! - Structural patterns compile once into process-wide statics

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Lexicons;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

// (Author, 2020) style parentheticals
static CITATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\d{4}[^)]*\)").unwrap());

// "according to" followed by the attributed party, up to a comma or period
static ATTRIBUTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)according to [^,.]+").unwrap());

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

static PUNCTUATION_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[!?]{2,}").unwrap());

// Spans delimited by typographic double quotes, either mark on either side
static QUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{201C}\u{201D}][^\u{201C}\u{201D}]+[\u{201C}\u{201D}]").unwrap());

/// Sentiment label derived from fixed positive/negative word sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Signals extracted from one text sample, consumed by the aggregator.
/// Owned by the scoring call that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalBundle {
    /// Total character count, whitespace and punctuation included
    pub char_count: usize,
    /// Maximal runs of word characters
    pub word_count: usize,
    /// Misinformation-indicator hits
    pub misinfo_hits: usize,
    /// Credibility-indicator hits, unweighted
    pub credibility_hits: usize,
    pub sentiment: Sentiment,
    /// URLs + citation parentheticals + attribution clauses
    pub source_count: usize,
    pub weasel_hits: usize,
    pub factual_hits: usize,
    /// Uppercase letters over total characters, 0 for empty text
    pub uppercase_ratio: f64,
    /// Maximal runs of two or more '!'/'?' characters
    pub punctuation_runs: usize,
    /// Quoted spans between typographic double quotes
    pub quote_count: usize,
}

/// Count of maximal word-character runs, Unicode-aware
pub fn word_count(text: &str) -> usize {
    WORD_REGEX.find_iter(text).count()
}

/// Uppercase letters divided by total character count; 0 for empty text
pub fn uppercase_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}

/// Count of maximal runs of two or more '!'/'?' characters.
/// Mixed runs count once: "!?!" is a single run.
pub fn excessive_punctuation_runs(text: &str) -> usize {
    PUNCTUATION_RUN_REGEX.find_iter(text).count()
}

/// Count of spans delimited by typographic double quotes that hold
/// at least one non-quote character
pub fn quotation_count(text: &str) -> usize {
    QUOTE_REGEX.find_iter(text).count()
}

/// Sum of URL, parenthetical-citation, and attribution-clause counts.
/// Sub-patterns are counted independently: a span matching more than
/// one pattern counts once per pattern.
pub fn count_sources(text: &str) -> usize {
    URL_REGEX.find_iter(text).count()
        + CITATION_REGEX.find_iter(text).count()
        + ATTRIBUTION_REGEX.find_iter(text).count()
}

/// Converts a text sample into a [`SignalBundle`] using immutable
/// lexicons. Shareable across threads; extraction holds no state.
#[derive(Debug, Clone, Default)]
pub struct SignalExtractor {
    lexicons: Lexicons,
}

impl SignalExtractor {
    pub fn new(lexicons: Lexicons) -> Self {
        Self { lexicons }
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Run every scan over the text and collect the results
    pub fn extract(&self, text: &str) -> SignalBundle {
        let bundle = SignalBundle {
            char_count: text.chars().count(),
            word_count: word_count(text),
            misinfo_hits: self.lexicons.misinformation.count_hits(text),
            credibility_hits: self.lexicons.credibility.count_hits(text),
            sentiment: self.sentiment_label(text),
            source_count: count_sources(text),
            weasel_hits: self.lexicons.weasel.count_hits(text),
            factual_hits: self.lexicons.factual.count_hits(text),
            uppercase_ratio: uppercase_ratio(text),
            punctuation_runs: excessive_punctuation_runs(text),
            quote_count: quotation_count(text),
        };

        debug!(
            words = bundle.word_count,
            misinfo = bundle.misinfo_hits,
            credibility = bundle.credibility_hits,
            sources = bundle.source_count,
            "extracted signals"
        );

        bundle
    }

    /// Positive vs negative word counts; ties resolve to Neutral
    pub fn sentiment_label(&self, text: &str) -> Sentiment {
        let positive = self.lexicons.positive.count_hits(text);
        let negative = self.lexicons.negative.count_hits(text);

        match positive.cmp(&negative) {
            Ordering::Greater => Sentiment::Positive,
            Ordering::Less => Sentiment::Negative,
            Ordering::Equal => Sentiment::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("one two three"), 3);
        // Apostrophes split word runs
        assert_eq!(word_count("won't"), 2);
        assert_eq!(word_count("snake_case stays whole"), 3);
    }

    #[test]
    fn test_uppercase_ratio_empty_text() {
        assert_eq!(uppercase_ratio(""), 0.0);
    }

    #[test]
    fn test_uppercase_ratio() {
        // 4 uppercase out of 9 chars, space included
        let ratio = uppercase_ratio("ABcd EFgh");
        assert!((ratio - 4.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_punctuation_runs() {
        assert_eq!(excessive_punctuation_runs("Fine."), 0);
        assert_eq!(excessive_punctuation_runs("What! Really?"), 0);
        assert_eq!(excessive_punctuation_runs("What!! Really??"), 2);
        // A mixed run counts once
        assert_eq!(excessive_punctuation_runs("No way!?!"), 1);
        assert_eq!(excessive_punctuation_runs("!!!!"), 1);
    }

    #[test]
    fn test_quotation_count() {
        assert_eq!(quotation_count("\u{201C}quoted\u{201D} text"), 1);
        assert_eq!(quotation_count("\u{201C}one\u{201D} and \u{201C}two\u{201D}"), 2);
        // Straight quotes do not count
        assert_eq!(quotation_count("\"quoted\" text"), 0);
        // Empty span does not count
        assert_eq!(quotation_count("\u{201C}\u{201D}"), 0);
    }

    #[test]
    fn test_count_sources() {
        assert_eq!(count_sources("no sources here"), 0);
        assert_eq!(count_sources("see https://example.com/report"), 1);
        assert_eq!(count_sources("the numbers (Smith, 2020) show"), 1);
        assert_eq!(count_sources("According to the ministry, rates fell."), 1);
    }

    #[test]
    fn test_count_sources_no_dedup() {
        // A URL inside a citation-like parenthetical counts for both
        // sub-patterns
        let text = "(see https://example.com/2020-report)";
        assert_eq!(count_sources(text), 2);
    }

    #[test]
    fn test_sentiment_tie_is_neutral() {
        let extractor = SignalExtractor::default();
        assert_eq!(extractor.sentiment_label("good but bad"), Sentiment::Neutral);
        assert_eq!(extractor.sentiment_label(""), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_labels() {
        let extractor = SignalExtractor::default();
        assert_eq!(extractor.sentiment_label("a wonderful, happy day"), Sentiment::Positive);
        assert_eq!(extractor.sentiment_label("a terrible, awful day"), Sentiment::Negative);
        assert_eq!(extractor.sentiment_label("nothing notable"), Sentiment::Neutral);
    }

    #[test]
    fn test_extract_empty_text() {
        let extractor = SignalExtractor::default();
        let bundle = extractor.extract("");
        assert_eq!(bundle, SignalBundle::default());
    }

    #[test]
    fn test_extract_counts_indicators() {
        let extractor = SignalExtractor::default();
        let bundle = extractor.extract("A shocking secret hoax, allegedly.");
        assert_eq!(bundle.misinfo_hits, 3);
        assert_eq!(bundle.credibility_hits, 0);
        assert_eq!(bundle.weasel_hits, 1);
    }
}
