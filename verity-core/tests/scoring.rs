//! End-to-end scoring properties exercised through the public API.

use verity_core::Analyzer;

#[test]
fn confidence_is_always_clamped() {
    let analyzer = Analyzer::new();
    let samples = [
        "",
        " ",
        "!!!???!!!???",
        "SHOCKING SECRET HOAX FRAUD SCAM FAKE CONSPIRACY!!! WAKE UP SHEEPLE!!! \
         THEY DON'T WANT YOU TO KNOW THE HIDDEN TRUTH!!! BANNED CENSORED SUPPRESSED!!!",
        "Peer-reviewed research, verified evidence, official statistics, and data \
         published in a university journal (Nguyen, 2021). According to experts, \
         according to the study, multiple sources confirmed the findings. \
         See https://example.org/study and https://example.org/data.",
        "no signals at all in this plain sentence",
        "\u{201C}quote one\u{201D} \u{201C}quote two\u{201D} \u{201C}quote three\u{201D}",
    ];

    for text in samples {
        let report = analyzer.score(text);
        assert!(
            (0.0..=100.0).contains(&report.confidence),
            "confidence {} out of bounds for {text:?}",
            report.confidence
        );
    }
}

#[test]
fn empty_text_scores_fifty() {
    let report = Analyzer::new().score("");
    // Baseline 65 minus the short-text penalty, nothing else fires
    assert_eq!(report.confidence, 50.0);
    assert_eq!(report.metrics.content_length, 0);
    assert_eq!(report.metrics.fake_indicators, 0);
    assert_eq!(report.metrics.truth_indicators, 0);
    assert_eq!(report.metrics.sources_count, 0);
    assert_eq!(report.metrics.weasel_words, 0);
    assert_eq!(report.metrics.factual_phrases, 0);
    assert_eq!(report.metrics.all_caps, "0.0%");
}

#[test]
fn scoring_is_idempotent() {
    let analyzer = Analyzer::new();
    let text = "According to the report (Okafor, 2019), the figures were verified. \
                See https://example.com/figures for the data.";

    let first = analyzer.score(text);
    let second = analyzer.score(text);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.metrics.sources_count, second.metrics.sources_count);
    assert_eq!(first.metrics.all_caps, second.metrics.all_caps);
}

#[test]
fn credibility_indicators_outscore_misinformation() {
    let analyzer = Analyzer::new();
    // Same structure, two indicator hits each, opposite lexicons
    let credible = "The study presented new evidence yesterday.";
    let dubious = "The hoax presented new clickbait yesterday.";

    let high = analyzer.score(credible);
    let low = analyzer.score(dubious);
    assert_eq!(high.metrics.truth_indicators, 2);
    assert_eq!(low.metrics.fake_indicators, 2);
    assert!(high.confidence > low.confidence);
}

#[test]
fn shouting_clickbait_clamps_to_zero() {
    let text = "BREAKING!!! You won't believe this SHOCKING secret!!!";
    let report = Analyzer::new().score(text);

    // Misinformation hits, all-caps ratio, punctuation runs, and the
    // short-text penalty together push the raw score below zero
    assert_eq!(report.metrics.fake_indicators, 3);
    assert_eq!(report.confidence, 0.0);
}

#[test]
fn sourced_passage_clamps_to_one_hundred() {
    let text = "According to the Lancet commission, vaccination coverage rose steadily \
                between 2010 and 2018 across all surveyed regions. The peer-reviewed \
                study, published in a respected journal (Morales, 2020), tracked more \
                than forty thousand participants over eight years and compared outcomes \
                across twelve countries. Researchers at the University of Toronto \
                analyzed hospital records, insurance data, and regional statistics to \
                measure long-term effects. \u{201C}The evidence is consistent across \
                every cohort we examined,\u{201D} said lead author Dr. Elena Morales. \
                According to the research team, the findings held even after adjusting \
                for income, age, and access to care. \u{201C}We see the same pattern in \
                every region,\u{201D} she added. The authors call for continued \
                monitoring and publication of annual coverage statistics in open \
                repositories.";

    let report = Analyzer::new().score(text);
    assert!(report.metrics.content_length > 100);
    assert_eq!(report.metrics.weasel_words, 0);
    assert_eq!(report.metrics.fake_indicators, 0);
    // Two attribution clauses plus one parenthetical citation
    assert_eq!(report.metrics.sources_count, 3);
    assert_eq!(report.metrics.factual_phrases, 2);
    assert_eq!(report.confidence, 100.0);
}

#[test]
fn sources_count_round_trip() {
    // 2 URLs + 1 parenthetical citation + 2 attribution clauses
    let text = "Details at https://example.com/a and https://example.org/b were \
                checked. One analysis (Lee, 2019) concurs. According to the \
                commission, rates fell. According to the auditors, they rose.";

    let report = Analyzer::new().score(text);
    assert_eq!(report.metrics.sources_count, 5);
}

#[test]
fn report_serializes_with_display_field_names() {
    let report = Analyzer::new().score("A verified study.");
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["confidence"].is_number());
    let metrics = &json["metrics"];
    for field in [
        "content_length",
        "fake_indicators",
        "truth_indicators",
        "sentiment",
        "sources_count",
        "weasel_words",
        "factual_phrases",
        "all_caps",
    ] {
        assert!(!metrics[field].is_null(), "missing metrics field {field}");
    }
}
