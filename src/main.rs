mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::input::{DEFAULT_HEADER_ROW, DEFAULT_JOB_SHEET};
use crate::model::thresholds::RiskParams;
use crate::pipeline::{RunConfig, run_pipeline};
use crate::report::text::render_summary_text;

/// Burnout risk of each job for each personality color profile.
#[derive(Debug, Parser)]
#[command(name = "kira-burnout", version, about, long_about = None)]
struct Cli {
    /// Directory that relative input/output paths are resolved against
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Person scores CSV (RED/BLUE/WHITE/YELLOW Score, Final color)
    #[arg(long, default_value = "color_score.csv")]
    persons: PathBuf,

    /// Job scores workbook (Red_Score .. Yellow_Score, Row Labels)
    #[arg(long, default_value = "job_score.xlsx")]
    jobs: PathBuf,

    /// Worksheet holding the job scores
    #[arg(long, default_value = DEFAULT_JOB_SHEET)]
    sheet: String,

    /// 0-based sheet row with the job headers
    #[arg(long, default_value_t = DEFAULT_HEADER_ROW)]
    header_row: u32,

    /// Output CSV, overwritten on every successful run
    #[arg(long, default_value = "burnout_risk_report.csv")]
    out: PathBuf,

    /// Minimum excess of job demand over a profile to count as stress
    #[arg(long, default_value_t = RiskParams::DEFAULT_MARGIN, value_parser = parse_margin)]
    margin: f64,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = build_config(&cli);
    match run_pipeline(&config) {
        Ok(summary) => print!("{}", render_summary_text(&summary)),
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }
}

fn build_config(cli: &Cli) -> RunConfig {
    RunConfig {
        persons_path: cli.base_dir.join(&cli.persons),
        jobs_path: cli.base_dir.join(&cli.jobs),
        job_sheet: cli.sheet.clone(),
        header_row: cli.header_row,
        output_path: cli.base_dir.join(&cli.out),
        params: RiskParams::with_margin(cli.margin),
    }
}

fn parse_margin(raw: &str) -> Result<f64, String> {
    let margin: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid margin: {raw}"))?;
    if !margin.is_finite() || margin < 0.0 {
        return Err(format!("margin must be a finite non-negative number, got {raw}"));
    }
    Ok(margin)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
