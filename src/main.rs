mod error;
mod extract;
mod layout;
mod parser;
mod record;
mod report;
mod search;
mod settings;
mod writer;

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::layout::DEFAULT_TEMPLATE;
use crate::report::{RunSummary, SearchOutcome};
use crate::writer::WriteOutcome;

#[derive(Parser)]
#[command(
    name = "roster_extractor",
    about = "Extract student enrollment rosters from published list PDFs into styled XLSX workbooks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, parse and write the roster workbook
    Run {
        /// Source PDF (default from settings / ROSTER_PDF)
        #[arg(long)]
        pdf: Option<String>,
        /// Destination workbook (default from settings / ROSTER_XLSX)
        #[arg(long)]
        out: Option<String>,
        /// Also search the extracted lines for this name
        #[arg(long)]
        find: Option<String>,
        /// Print the run summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the filtered candidate lines without parsing them
    Lines {
        /// Source PDF (default from settings / ROSTER_PDF)
        #[arg(long)]
        pdf: Option<String>,
        /// Stop after this many lines
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Search the extracted lines for a name
    Find {
        /// Source PDF (default from settings / ROSTER_PDF)
        #[arg(long)]
        pdf: Option<String>,
        /// Case-insensitive substring to look for
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let started = Instant::now();
    let cli = Cli::parse();
    let settings = settings::load();

    let result = match cli.command {
        Commands::Run { pdf, out, find, json } => run(
            pdf.unwrap_or(settings.pdf),
            out.unwrap_or(settings.xlsx),
            find,
            json,
        ),
        Commands::Lines { pdf, limit } => lines(pdf.unwrap_or(settings.pdf), limit),
        Commands::Find { pdf, query } => find(pdf.unwrap_or(settings.pdf), &query),
    };

    let elapsed = started.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    result
}

fn run(pdf: String, out: String, find: Option<String>, json: bool) -> anyhow::Result<()> {
    let mut summary = RunSummary::default();

    println!("Step 1: extracting lines from {pdf}");
    let extracted = extract::read_lines(&pdf, &DEFAULT_TEMPLATE)
        .with_context(|| format!("failed to read {pdf}"))?;
    summary.pages_scanned = extracted.pages_scanned;
    summary.pages_unreadable = extracted.pages_unreadable;
    summary.lines_extracted = extracted.lines.len();
    println!(
        "  {} candidate lines from {} pages\n",
        extracted.lines.len(),
        extracted.pages_scanned
    );

    println!("Step 2: parsing lines into records");
    let parsed = parser::parse_lines(&extracted.lines, &DEFAULT_TEMPLATE);
    summary.records_parsed = parsed.records.len();
    summary.drops = parsed.drops;
    summary.lines_dropped = summary.drops.total();
    println!(
        "  {} records ({} lines dropped)\n",
        parsed.records.len(),
        summary.lines_dropped
    );

    println!("Step 3: writing {out}");
    let outcome = writer::save_roster(&out, &parsed.records, &DEFAULT_TEMPLATE)
        .with_context(|| format!("failed to write {out}"))?;
    match outcome {
        WriteOutcome::Written(count) => {
            summary.records_written = count;
            println!("  saved {count} records\n");
        }
        WriteOutcome::NoData => println!("  no valid student data to save\n"),
    }

    if let Some(query) = find {
        println!("Step 4: searching for '{query}'");
        let matched = search::find_line(&extracted.lines, &query).map(str::to_string);
        match &matched {
            Some(line) => println!("  found: {line}\n"),
            None => println!("  '{query}' not found\n"),
        }
        summary.search = Some(SearchOutcome {
            query,
            matched_line: matched,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.render());
    }
    Ok(())
}

fn lines(pdf: String, limit: Option<usize>) -> anyhow::Result<()> {
    let extracted = extract::read_lines(&pdf, &DEFAULT_TEMPLATE)
        .with_context(|| format!("failed to read {pdf}"))?;
    let shown = limit.unwrap_or(extracted.lines.len());
    for line in extracted.lines.iter().take(shown) {
        println!("{line}");
    }
    if extracted.lines.len() > shown {
        println!("... {} more", extracted.lines.len() - shown);
    }
    Ok(())
}

fn find(pdf: String, query: &str) -> anyhow::Result<()> {
    let extracted = extract::read_lines(&pdf, &DEFAULT_TEMPLATE)
        .with_context(|| format!("failed to read {pdf}"))?;
    match search::find_line(&extracted.lines, query) {
        Some(line) => println!("Found: {line}"),
        None => println!("'{query}' not found in {} lines", extracted.lines.len()),
    }
    Ok(())
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
