mod display;
mod input;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use docketwatch_core::{DeadlineCalculator, DeadlineKind, DocketAnalyzer, analyze_case_docket};
use tracing::Level;

#[derive(Parser)]
#[command(name = "docketwatch", version, about = "Federal docket deadline tracker")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Litigant is represented by counsel (no Rule 6(d) extra days).
    #[arg(long, global = true, env = "DOCKETWATCH_REPRESENTED")]
    represented: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse a docket file and print the deadline report.
    Analyze {
        /// JSON file: an array of entries, or a docket index with an `entries` array.
        file: PathBuf,

        /// Only analyse entries whose `case_id` matches.
        #[arg(long)]
        case: Option<String>,

        /// Reference date for alerts (defaults to today).
        #[arg(long, env = "DOCKETWATCH_AS_OF")]
        as_of: Option<NaiveDate>,

        /// Print the full analysis as JSON instead of the text report.
        #[arg(long)]
        json: bool,

        /// Also print how each entry was classified.
        #[arg(long)]
        entries: bool,
    },
    /// Classify a single docket entry text.
    Classify { text: String },
    /// Compute one deadline.
    Deadline {
        /// Rule name, e.g. motion_response, appeal, rule_59_motion.
        rule: String,

        /// Triggering date (YYYY-MM-DD).
        #[arg(long)]
        from: NaiveDate,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("docketwatch v{}", env!("CARGO_PKG_VERSION"));

    let pro_se = !cli.represented;

    match cli.command {
        Command::Analyze {
            file,
            case,
            as_of,
            json,
            entries,
        } => {
            let docket = input::load_docket(&file, case.as_deref())?;
            let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
            let analysis = DocketAnalyzer::new(pro_se)
                .analyze_entries_as_of(&docket, as_of)
                .with_context(|| format!("analysing {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
                return Ok(());
            }
            if entries {
                display::print_entries(&analysis.classified_entries);
            }
            let case_label = case.unwrap_or_else(|| input::case_label(&file));
            println!("{}", analyze_case_docket(&case_label, &analysis));
        }
        Command::Classify { text } => {
            display::print_classification(&text);
        }
        Command::Deadline { rule, from } => {
            let kind: DeadlineKind = rule.parse()?;
            let info = DeadlineCalculator::new(pro_se).calculate(from, kind);
            display::print_deadline(from, &info);
        }
    }

    Ok(())
}
