//! Score command — 0–100 readability score with level and audience.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readscore_core::config::Config;
use readscore_core::readability::{self, ReadabilityReport};

use super::{is_markup_file, read_input};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to score (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Minimum acceptable score (0-100).
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Strip markdown/HTML before scoring (default for .md and .html files).
    #[arg(long)]
    pub strip_markup: bool,

    /// Show the sub-scores and text statistics behind the score.
    #[arg(long)]
    pub breakdown: bool,
}

/// Score the readability of a file or stdin.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing score command");

    let content = read_input(&args.file, config.input_limit())?;

    let strip_markup = args.strip_markup || config.strip_markup || is_markup_file(&args.file);
    let min_score = args.min_score.or(config.min_score);

    let report = readability::check_readability(&content, strip_markup, min_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.below_min {
        let min = report.min_score.unwrap_or(0.0);
        bail!(
            "{} scores {:.1} (min: {:.0}). Use shorter sentences and simpler words.",
            args.file,
            report.score,
            min,
        );
    }

    if let Some(min) = report.min_score {
        println!(
            "{} {} scores {:.1} (min: {:.0})",
            "PASS:".green(),
            args.file,
            report.score,
            min,
        );
    } else {
        println!("{:.1}", report.score);
    }
    print_labels(&report);
    if args.breakdown {
        print_breakdown(&report);
    }

    Ok(())
}

fn print_labels(report: &ReadabilityReport) {
    println!("{}: {}", "Level".dimmed(), report.level);
    println!("{}: {}", "Audience".dimmed(), report.audience);
    println!(
        "{}: {} ({})",
        "Badge".dimmed(),
        report.badge,
        report.letter_grade
    );
}

fn print_breakdown(report: &ReadabilityReport) {
    println!();
    println!("{}", "Breakdown".bold().underline());
    match report.breakdown {
        Some(b) => {
            println!("{}: {:.1}", "Flesch base".dimmed(), b.base);
            println!("{}: {:.0}", "Sentence bonus".dimmed(), b.sentence_bonus);
            println!(
                "{}: {:.0} ({} paragraphs)",
                "Paragraph bonus".dimmed(),
                b.paragraph_bonus,
                b.paragraph_count
            );
            println!("{}: {:.1}%", "Complex words".dimmed(), b.complex_penalty);
        }
        None => println!("{}", "(no text to analyze)".dimmed()),
    }
    if let Some(m) = report.metrics {
        println!(
            "{}: {} sentences, {} words, {} syllables",
            "Counts".dimmed(),
            m.sentence_count,
            m.word_count,
            m.syllable_count
        );
        println!(
            "{}: {:.1} words/sentence, {:.2} syllables/word",
            "Averages".dimmed(),
            m.avg_words_per_sentence,
            m.avg_syllables_per_word
        );
    }
    println!(
        "{}: {} characters, {} words",
        "Content".dimmed(),
        report.stats.characters,
        report.stats.words
    );
}
