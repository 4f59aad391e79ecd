//! Confidence aggregation - ordered additive adjustments to a baseline
//!
//! Each adjustment reads only the extracted signals, never another
//! adjustment's output. The final value is clamped to [0, 100] and
//! rounded to two decimals, so every input produces a valid score.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{
    Sentiment, SignalBundle, BASELINE_CONFIDENCE, CREDIBILITY_WEIGHT, MAX_CONFIDENCE,
    MIN_CONFIDENCE, VERDICT_THRESHOLD,
};

/// Display metrics derived from the signal bundle
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    /// Word count of the analyzed text
    pub content_length: usize,
    /// Misinformation-indicator hits
    pub fake_indicators: usize,
    /// Credibility-indicator hits, unweighted
    pub truth_indicators: usize,
    pub sentiment: Sentiment,
    pub sources_count: usize,
    pub weasel_words: usize,
    pub factual_phrases: usize,
    /// Uppercase percentage with one decimal, e.g. "12.5%"
    pub all_caps: String,
}

impl Metrics {
    fn from_signals(signals: &SignalBundle) -> Self {
        Self {
            content_length: signals.word_count,
            fake_indicators: signals.misinfo_hits,
            truth_indicators: signals.credibility_hits,
            sentiment: signals.sentiment,
            sources_count: signals.source_count,
            weasel_words: signals.weasel_hits,
            factual_phrases: signals.factual_hits,
            all_caps: format!("{:.1}%", signals.uppercase_ratio * 100.0),
        }
    }
}

/// Final confidence in [0, 100] plus display metrics
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceReport {
    pub confidence: f64,
    pub metrics: Metrics,
}

/// Verdict label, derived deterministically from the confidence value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    True,
    False,
}

impl Verdict {
    /// `True` at or above the 50-point threshold
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= VERDICT_THRESHOLD {
            Verdict::True
        } else {
            Verdict::False
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::True => write!(f, "True"),
            Verdict::False => write!(f, "False"),
        }
    }
}

/// Combine extracted signals into a bounded confidence score
pub fn aggregate(signals: &SignalBundle) -> ConfidenceReport {
    let mut confidence = BASELINE_CONFIDENCE;

    // Indicator ratio. Credibility hits carry a 3x weight that the
    // ratio divides back out; displayed metrics stay unweighted.
    let fake = signals.misinfo_hits as f64;
    let truth = signals.credibility_hits as f64 * CREDIBILITY_WEIGHT;
    let total = fake + truth / CREDIBILITY_WEIGHT;
    if total > 0.0 {
        let truth_fraction = (truth / CREDIBILITY_WEIGHT) / total;
        // First match wins; exactly 0.5 lands in the second branch
        if truth_fraction >= 0.7 {
            confidence += 20.0;
        } else if truth_fraction >= 0.5 {
            confidence += 10.0;
        } else if truth_fraction <= 0.3 {
            confidence -= 35.0;
        } else {
            confidence -= 20.0;
        }
    }

    // Content length
    if signals.word_count < 20 {
        confidence -= 15.0;
    } else if signals.word_count > 100 {
        confidence += 10.0;
    }

    // Shouting, only judged past a minimum length
    if signals.char_count > 50 {
        if signals.uppercase_ratio > 0.3 {
            confidence -= 25.0;
        } else if signals.uppercase_ratio > 0.2 {
            confidence -= 15.0;
        }
    }

    // Excessive punctuation
    if signals.punctuation_runs > 3 {
        confidence -= 25.0;
    } else if signals.punctuation_runs > 1 {
        confidence -= 15.0;
    }

    // Weasel words; absence in a substantial text earns a boost
    if signals.weasel_hits > 4 {
        confidence -= 20.0;
    } else if signals.weasel_hits > 2 {
        confidence -= 10.0;
    } else if signals.weasel_hits == 0 && signals.word_count > 50 {
        confidence += 10.0;
    }

    // Cited sources
    if signals.source_count >= 3 {
        confidence += 20.0;
    } else if signals.source_count >= 1 {
        confidence += 15.0;
    }

    // Factual attribution phrases
    if signals.factual_hits >= 2 {
        confidence += 15.0;
    } else if signals.factual_hits >= 1 {
        confidence += 10.0;
    }

    // Quotations
    if signals.quote_count >= 2 {
        confidence += 10.0;
    } else if signals.quote_count >= 1 {
        confidence += 5.0;
    }

    let confidence =
        (confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) * 100.0).round() / 100.0;

    debug!(confidence, "aggregated confidence");

    ConfidenceReport {
        confidence,
        metrics: Metrics::from_signals(signals),
    }
}
