use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use gloss_stats::io_utils::gloss_cli_error;
use gloss_stats::logging::init_tracing;
use gloss_stats::{
    master_sorted, render_master, tally_chapters, GlossaryReader, DEFAULT_GLOSSARY_PATH,
};

/// Per-chapter views of the glossary table.
#[derive(Parser)]
struct Args {
    /// Glossary CSV table
    #[arg(long, env = "GLOSSARY_PATH", default_value = DEFAULT_GLOSSARY_PATH)]
    input: PathBuf,
    /// Print the consolidated glossary instead of chapter counts
    #[arg(long)]
    list: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
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
    let reader =
        GlossaryReader::open(&args.input).map_err(|e| gloss_cli_error("reading glossary", e))?;

    let out = if args.list {
        let entries =
            master_sorted(reader.entries()).map_err(|e| gloss_cli_error("sorting glossary", e))?;
        tracing::info!(entries = entries.len(), "glossary sorted");
        render_master(&entries)
    } else {
        let tally =
            tally_chapters(reader.entries()).map_err(|e| gloss_cli_error("counting chapters", e))?;
        tracing::info!(entries = tally.total(), "chapters counted");
        tally
            .iter()
            .map(|(chapter, count)| format!("{chapter} {count}\n"))
            .collect()
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
