//! Verity CLI
//!
//! Heuristic credibility scoring for free text. The engine lives in
//! verity-core; this binary only acquires text and renders the report.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use verity_core::{
    Analyzer, ConfidenceReport, LexiconConfig, Lexicons, Verdict, CREDIBILITY_INDICATORS,
    FACTUAL_PHRASES, MISINFORMATION_INDICATORS, NEGATIVE_WORDS, POSITIVE_WORDS, WEASEL_WORDS,
};

#[derive(Parser)]
#[command(name = "verity")]
#[command(author, version, about = "Verity: heuristic credibility scoring for text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a text sample
    Score {
        /// Text to score, inline
        #[arg(short, long)]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Substitute lexicons from a TOML file
        #[arg(long)]
        lexicons: Option<PathBuf>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in lexicon categories
    Lexicons,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match cli.command {
        Commands::Score {
            text,
            file,
            lexicons,
            json,
        } => run_score(text, file, lexicons, json),
        Commands::Lexicons => {
            list_lexicons();
            Ok(())
        }
    }
}

fn run_score(
    text: Option<String>,
    file: Option<PathBuf>,
    lexicons: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let content = read_input(text, file)?;

    let analyzer = match lexicons {
        Some(path) => Analyzer::with_lexicons(load_lexicons(&path)?),
        None => Analyzer::new(),
    };

    let report = analyzer.score(&content);
    let verdict = Verdict::from_confidence(report.confidence);

    if json {
        let payload = serde_json::json!({
            "confidence": report.confidence,
            "verdict": verdict,
            "metrics": report.metrics,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_report(&report, verdict);
    }

    Ok(())
}

/// Exactly one text source: inline, file, or stdin
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => bail!("pass either --text or --file, not both"),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display())),
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn load_lexicons(path: &Path) -> Result<Lexicons> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading lexicon file {}", path.display()))?;
    let config: LexiconConfig = toml::from_str(&raw)
        .with_context(|| format!("parsing lexicon file {}", path.display()))?;
    Ok(Lexicons::from_config(config)?)
}

fn print_report(report: &ConfidenceReport, verdict: Verdict) {
    let m = &report.metrics;

    println!("Verdict: {verdict} ({:.2}% confidence)", report.confidence);
    println!();
    println!("Content length:    {} words", m.content_length);
    println!("Fake indicators:   {}", m.fake_indicators);
    println!("Truth indicators:  {}", m.truth_indicators);
    println!("Sentiment:         {}", m.sentiment);
    println!("Sources cited:     {}", m.sources_count);
    println!("Weasel words:      {}", m.weasel_words);
    println!("Factual phrases:   {}", m.factual_phrases);
    println!("All caps:          {}", m.all_caps);
}

fn list_lexicons() {
    let categories: &[(&str, &[&str])] = &[
        ("misinformation", MISINFORMATION_INDICATORS),
        ("credibility", CREDIBILITY_INDICATORS),
        ("weasel", WEASEL_WORDS),
        ("factual", FACTUAL_PHRASES),
        ("positive", POSITIVE_WORDS),
        ("negative", NEGATIVE_WORDS),
    ];

    for (name, phrases) in categories {
        println!("{name:<16} {} phrases", phrases.len());
    }
}
