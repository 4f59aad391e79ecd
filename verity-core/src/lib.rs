//! Verity Core - signal extraction and confidence scoring for text credibility
//!
//! This crate provides the scoring engine:
//! - Immutable phrase lexicons with compiled multi-pattern matchers
//! - Lexical and structural signal extraction
//! - Ordered additive aggregation into a bounded confidence score
//!
//! The engine is stateless per call: scoring is a pure function of the
//! input text, safe to invoke concurrently from any number of callers.

pub mod lexicon;
pub mod score;
pub mod signals;

pub use lexicon::*;
pub use score::*;
pub use signals::*;

/// Baseline confidence before any adjustment
pub const BASELINE_CONFIDENCE: f64 = 65.0;

/// Minimum confidence
pub const MIN_CONFIDENCE: f64 = 0.0;

/// Maximum confidence
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Weight applied to credibility-indicator hits in the indicator ratio
pub const CREDIBILITY_WEIGHT: f64 = 3.0;

/// Confidence at or above which the verdict is "True"
pub const VERDICT_THRESHOLD: f64 = 50.0;

/// The scoring engine: one text sample in, confidence plus metrics out
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    extractor: SignalExtractor,
}

impl Analyzer {
    /// Analyzer backed by the built-in lexicons
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer backed by substitute lexicons
    pub fn with_lexicons(lexicons: Lexicons) -> Self {
        Self {
            extractor: SignalExtractor::new(lexicons),
        }
    }

    /// Score a text sample. Pure and infallible: any input, empty
    /// included, yields a clamped confidence and a metrics breakdown.
    pub fn score(&self, text: &str) -> ConfidenceReport {
        aggregate(&self.extractor.extract(text))
    }
}
