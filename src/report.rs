use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::counter::LetterCounter;
use crate::error::Result;

#[derive(Serialize)]
struct Row {
    bucket: String,
    count: u64,
}

/// One `<letter> <count>` line per bucket, ascending by letter.
pub fn render_text(counter: &LetterCounter) -> String {
    counter
        .iter()
        .map(|(bucket, count)| format!("{bucket} {count}\n"))
        .collect()
}

pub fn render_json(counter: &LetterCounter) -> Result<String> {
    let rows: Vec<Row> = counter
        .iter()
        .map(|(bucket, count)| Row {
            bucket: bucket.to_string(),
            count,
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&rows)?;
    out.push('\n');
    Ok(out)
}

/// Render the whole report before writing so a failed render prints
/// nothing.
pub fn write_report<W: Write>(counter: &LetterCounter, format: OutputFormat, mut out: W) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(counter),
        OutputFormat::Json => render_json(counter)?,
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
