use std::io;
use std::path::PathBuf;

use clap::Parser;
use gloss_stats::io_utils::gloss_cli_error;
use gloss_stats::logging::init_tracing;
use gloss_stats::{
    count_glossary, write_report, Config, EmptyTermPolicy, OutputFormat, DEFAULT_GLOSSARY_PATH,
};

/// Count glossary entries by the first letter of their term.
#[derive(Parser)]
struct Args {
    /// Glossary CSV table
    #[arg(long, env = "GLOSSARY_PATH", default_value = DEFAULT_GLOSSARY_PATH)]
    input: PathBuf,
    /// Count terms without Latin letters under `other` instead of skipping them
    #[arg(long)]
    other: bool,
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            empty_terms: if self.other {
                EmptyTermPolicy::Sentinel
            } else {
                EmptyTermPolicy::Skip
            },
            format: self.format,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config();
    config
        .validate()
        .map_err(|e| gloss_cli_error("invalid arguments", e))?;

    let tally = count_glossary(&config).map_err(|e| gloss_cli_error("counting glossary", e))?;
    if tally.skipped > 0 {
        tracing::warn!(
            skipped = tally.skipped,
            "entries without latin letters were left out (use --other to count them)"
        );
    }

    write_report(&tally.counter, config.format, io::stdout().lock())
        .map_err(|e| gloss_cli_error("writing report", e))?;
    Ok(())
}
