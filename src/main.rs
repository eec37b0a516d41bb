mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::input::{discover_frames, load_percentages, read_image};
use crate::model::confidence::{ConfidenceSource, FixedConfidence, RandomConfidence};
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage4_score::{compare, compare_sequence, score};
use crate::pipeline::stage5_report::{
    write_analysis_reports, write_comparison_reports, write_timelapse_reports,
};
use crate::pipeline::{AnalyzedFrame, analyze_frame};
use crate::report::json::{render_classes_json, render_verdict_json};

#[derive(Debug, Parser)]
#[command(
    name = "canopyqc",
    version,
    about = "Land-cover estimation and deforestation scoring for satellite imagery"
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Seed for the confidence jitter.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pin the confidence jitter to this fraction of its span (0..1).
    #[arg(long, global = true, conflicts_with = "seed")]
    confidence_offset: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate land cover for one image and score it.
    Analyze {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compare a before/after image pair for forest loss.
    Compare {
        #[arg(long)]
        before: PathBuf,
        #[arg(long)]
        after: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Analyse a directory of historical frames in name order.
    Timelapse {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Score class percentages from a JSON file.
    Score {
        #[arg(long)]
        percentages: PathBuf,
    },
    /// Print the class catalogue and legend colours.
    Classes,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn confidence_source(cli: &Cli) -> Box<dyn ConfidenceSource> {
    match cli.confidence_offset {
        Some(frac) => Box::new(FixedConfidence(frac)),
        None => Box::new(RandomConfidence::new(cli.seed)),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let thresholds = ThresholdProfile::default_v1();
    let mut confidence = confidence_source(&cli);
    let confidence = confidence.as_mut();

    match cli.command {
        Command::Analyze { input, out } => {
            let source = read_image(&input).map_err(|e| e.to_string())?;
            let frame = analyze_frame(&source.name, source.bytes(), &thresholds, confidence)
                .map_err(|e| e.to_string())?;
            write_analysis_reports(&frame, &thresholds, &out).map_err(|e| e.to_string())?;
        }
        Command::Compare { before, after, out } => {
            let before_src = read_image(&before).map_err(|e| e.to_string())?;
            let after_src = read_image(&after).map_err(|e| e.to_string())?;
            let before_frame = analyze_frame(
                &before_src.name,
                before_src.bytes(),
                &thresholds,
                confidence,
            )
            .map_err(|e| e.to_string())?;
            let after_frame = analyze_frame(
                &after_src.name,
                after_src.bytes(),
                &thresholds,
                confidence,
            )
            .map_err(|e| e.to_string())?;

            let verdict = compare(
                &before_frame.prediction.class_percentages,
                &after_frame.prediction.class_percentages,
                &thresholds,
            );
            crate::info!(
                "forest loss {:.2} points; detected={} confidence={}%",
                verdict.forest_loss,
                verdict.detected,
                verdict.confidence_percent
            );
            write_comparison_reports(&before_frame, &after_frame, &verdict, &thresholds, &out)
                .map_err(|e| e.to_string())?;
        }
        Command::Timelapse { input, out } => {
            let paths = discover_frames(&input).map_err(|e| e.to_string())?;
            crate::info!("discovered {} frames in {}", paths.len(), input.display());

            let mut frames: Vec<AnalyzedFrame> = Vec::with_capacity(paths.len());
            for path in &paths {
                let source = read_image(path).map_err(|e| e.to_string())?;
                let frame =
                    analyze_frame(&source.name, source.bytes(), &thresholds, confidence)
                        .map_err(|e| e.to_string())?;
                frames.push(frame);
            }

            let percentages = frames
                .iter()
                .map(|f| f.prediction.class_percentages)
                .collect::<Vec<_>>();
            let transitions = compare_sequence(&percentages, &thresholds);
            write_timelapse_reports(&frames, &transitions, &thresholds, &out)
                .map_err(|e| e.to_string())?;
        }
        Command::Score { percentages } => {
            let values = load_percentages(&percentages).map_err(|e| e.to_string())?;
            let verdict = score(&values, &thresholds, confidence);
            let json = render_verdict_json(&values, &verdict).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Command::Classes => {
            let json = render_classes_json().map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
