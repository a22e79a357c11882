use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use poker_hand::cards::ParseOptions;
use poker_hand::deck::Deck;
use poker_hand::detection::{Detection, FrameGrader, DEFAULT_MIN_CONFIDENCE};
use poker_hand::evaluator::{classify, classify_hand};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Classify five-card poker hands.")]
struct Cli {
    /// Upper-case card tokens before parsing ("kh" reads as "KH").
    #[clap(long, global = true)]
    fold_case: bool,
    /// Only accept the suits C, D, H and S.
    #[clap(long, global = true)]
    strict_suits: bool,
    /// Minimum confidence for a detection to count.
    #[clap(long, global = true, env = "POKER_HAND_MIN_CONFIDENCE",
        default_value_t = DEFAULT_MIN_CONFIDENCE, value_parser = parse_confidence)]
    min_confidence: f32,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify five card tokens, e.g. `grade KH AH QH JH 10H`.
    Grade {
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Grade frames of detections, one frame per line of `LABEL:CONFIDENCE` items.
    Frames {
        /// Input file, stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Deal random hands from a shuffled deck and classify them.
    Deal {
        /// Shuffle seed, random when omitted.
        #[clap(long)]
        seed: Option<u64>,
        /// Number of hands to deal.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
        count: u8,
    },
}

fn parse_confidence(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is not in 0.0..=1.0"))
    }
}

fn parse_frame(line: &str) -> Result<Vec<Detection>> {
    line.split_whitespace()
        .map(|item| {
            let (label, conf) = item
                .rsplit_once(':')
                .with_context(|| format!("expected LABEL:CONFIDENCE, got '{item}'"))?;
            let confidence =
                conf.parse::<f32>().with_context(|| format!("bad confidence in '{item}'"))?;
            Ok(Detection::new(label, confidence))
        })
        .collect()
}

/// Grades every frame; frames that do not form a valid hand are logged and
/// turn the whole run into an error once the input is exhausted.
fn run_frames(reader: impl BufRead, grader: FrameGrader) -> Result<()> {
    let mut invalid = 0;
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let detections = parse_frame(&line).with_context(|| format!("frame {}", n + 1))?;
        match grader.grade(&detections) {
            Ok(Some(report)) => {
                println!("{}: {} [{}]", n + 1, report.evaluation, report.labels.join(" "))
            }
            Ok(None) => info!("frame {}: no hand", n + 1),
            Err(e) => {
                warn!("frame {}: {e}", n + 1);
                invalid += 1;
            }
        }
    }
    ensure!(invalid == 0, "{invalid} frame(s) did not form a valid hand");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let options = ParseOptions { fold_case: cli.fold_case, standard_suits_only: cli.strict_suits };

    match cli.command {
        Command::Grade { cards } => {
            let eval = classify(cards.as_slice(), options)?;
            println!("{eval}");
        }
        Command::Frames { file } => {
            let grader = FrameGrader::new(cli.min_confidence, options);
            match file {
                Some(path) => {
                    let f = File::open(&path)
                        .with_context(|| format!("opening {}", path.display()))?;
                    run_frames(BufReader::new(f), grader)?;
                }
                None => run_frames(io::stdin().lock(), grader)?,
            }
        }
        Command::Deal { seed, count } => {
            let mut deck = Deck::standard();
            match seed {
                Some(seed) => {
                    info!("dealing {count} hand(s) with seed {seed}");
                    deck.shuffle_seeded(seed);
                }
                None => deck.shuffle_with(&mut rand::rng()),
            }
            for _ in 0..count {
                let hand = deck.deal_hand().context("deck ran out of cards")?;
                println!("{hand}: {}", classify_hand(&hand));
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
