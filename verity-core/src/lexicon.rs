//! Phrase lexicons for credibility scoring
//!
//! Lexicons are immutable configuration data, built once at startup:
//! - Misinformation and credibility indicators shift the score
//! - Weasel words flag hedged, unverifiable claims
//! - Factual phrases flag reporting-style attribution
//! - Positive/negative word sets drive the sentiment label
//!
//! Each category compiles into a trie-based multi-pattern matcher.
//! Matching is case-insensitive and word-boundary delimited, and
//! overlapping occurrences of different phrases each count, exactly
//! as independent per-phrase scans would.

use aho_corasick::{AhoCorasick, MatchKind};
use serde::Deserialize;
use thiserror::Error;

/// Phrases whose presence suggests misinformation
pub const MISINFORMATION_INDICATORS: &[&str] = &[
    "conspiracy",
    "hoax",
    "fraud",
    "scam",
    "fake",
    "clickbait",
    "shocking",
    "you won't believe",
    "secret",
    "they don't want you to know",
    "miraculous",
    "cure",
    "exclusive",
    "anonymous sources",
    "hidden truth",
    "cover-up",
    "what they don't tell you",
    "mainstream media won't report",
    "doctors hate this",
    "one weird trick",
    "without a prescription",
    "banned",
    "censored",
    "the truth about",
    "they refused to publish",
    "what the government doesn't want you to know",
    "shocking revelation",
    "suppressed",
    "exposed",
    "wake up",
    "sheeple",
    "mind control",
    "plandemic",
];

/// Phrases whose presence suggests credible reporting
pub const CREDIBILITY_INDICATORS: &[&str] = &[
    "research",
    "study",
    "evidence",
    "according to experts",
    "scientists",
    "verified",
    "official",
    "fact check",
    "investigation",
    "confirmed",
    "source",
    "data",
    "peer-reviewed",
    "published in",
    "journal",
    "university",
    "professor",
    "expert",
    "analyzed",
    "statistics",
    "survey",
    "clinical trial",
    "experiment",
    "meta-analysis",
    "research paper",
    "findings suggest",
    "evidence indicates",
    "researchers found",
    "according to the study",
    "multiple sources confirmed",
    "citation",
    "reference",
    "statistical significance",
    "correlation",
    "causation",
];

/// Hedging terms that flag unverified claims
pub const WEASEL_WORDS: &[&str] = &[
    "may",
    "might",
    "could",
    "possibly",
    "allegedly",
    "reportedly",
    "some say",
    "they say",
    "many people",
    "sources say",
    "rumored",
    "supposedly",
];

/// Reporting-style attribution phrases
pub const FACTUAL_PHRASES: &[&str] = &[
    "according to",
    "stated that",
    "reported by",
    "confirms that",
    "found that",
];

/// Positive sentiment words
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "happy",
    "wonderful",
    "beneficial",
];

/// Negative sentiment words
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "negative",
    "sad",
    "horrible",
    "harmful",
];

/// Errors raised while building lexicons from configuration
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A configured lexicon contained an empty phrase
    #[error("lexicon contains an empty phrase")]
    EmptyPhrase,

    /// The phrase matcher could not be compiled
    #[error("failed to compile phrase matcher")]
    Build(#[from] aho_corasick::BuildError),
}

/// An immutable, ordered set of phrases with a compiled matcher
#[derive(Debug, Clone)]
pub struct PhraseSet {
    phrases: Vec<String>,
    matcher: AhoCorasick,
}

impl PhraseSet {
    /// Compile a phrase set. Phrases are lowercased on entry and
    /// matched literally: regex metacharacters carry no meaning.
    pub fn new<I, S>(phrases: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .collect();

        if phrases.iter().any(|p| p.is_empty()) {
            return Err(LexiconError::EmptyPhrase);
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&phrases)?;

        Ok(Self { phrases, matcher })
    }

    /// Number of phrases in the set
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The phrases, in their configured order
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Count phrase occurrences in `text`: case-insensitive, word
    /// boundaries required at both ends of every match. Overlapping
    /// occurrences of different phrases each count; no dedup.
    pub fn count_hits(&self, text: &str) -> usize {
        self.matcher
            .find_overlapping_iter(text)
            .filter(|m| at_word_boundaries(text, m.start(), m.end()))
            .count()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A word boundary sits between a word char and a non-word char
/// (text edges count as non-word).
fn is_boundary(outside: Option<char>, inside: Option<char>) -> bool {
    let outside = outside.map(is_word_char).unwrap_or(false);
    let inside = inside.map(is_word_char).unwrap_or(false);
    outside != inside
}

fn at_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    if start == end {
        return false;
    }
    let first = text[start..].chars().next();
    let last = text[..end].chars().next_back();
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    is_boundary(before, first) && is_boundary(after, last)
}

/// Substitute phrase lists, one optional entry per category.
/// Categories left unset fall back to the built-in lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct LexiconConfig {
    pub misinformation: Option<Vec<String>>,
    pub credibility: Option<Vec<String>>,
    pub weasel: Option<Vec<String>>,
    pub factual: Option<Vec<String>>,
    pub positive: Option<Vec<String>>,
    pub negative: Option<Vec<String>>,
}

/// The full set of scoring lexicons, read-only after construction
#[derive(Debug, Clone)]
pub struct Lexicons {
    pub misinformation: PhraseSet,
    pub credibility: PhraseSet,
    pub weasel: PhraseSet,
    pub factual: PhraseSet,
    pub positive: PhraseSet,
    pub negative: PhraseSet,
}

impl Lexicons {
    /// The built-in lexicons
    pub fn builtin() -> Self {
        Self::from_config(LexiconConfig::default())
            .expect("built-in lexicons always compile")
    }

    /// Build lexicons from configuration, falling back to the
    /// built-in list for every unset category
    pub fn from_config(config: LexiconConfig) -> Result<Self, LexiconError> {
        fn build(
            custom: Option<Vec<String>>,
            builtin: &[&str],
        ) -> Result<PhraseSet, LexiconError> {
            match custom {
                Some(phrases) => PhraseSet::new(phrases),
                None => PhraseSet::new(builtin),
            }
        }

        Ok(Self {
            misinformation: build(config.misinformation, MISINFORMATION_INDICATORS)?,
            credibility: build(config.credibility, CREDIBILITY_INDICATORS)?,
            weasel: build(config.weasel, WEASEL_WORDS)?,
            factual: build(config.factual, FACTUAL_PHRASES)?,
            positive: build(config.positive, POSITIVE_WORDS)?,
            negative: build(config.negative, NEGATIVE_WORDS)?,
        })
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::builtin()
    }
}
