use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use threatscope_core::analysis::{analyze, require_description};
use threatscope_core::catalog::{CategoryTable, bundled_catalog, load_catalog};
use threatscope_core::error::AnalysisError;
use threatscope_core::export::{export_script_bundle, write_report};
use threatscope_core::report::render;

mod args;

use args::{AnalyzeArgs, Command, ExportScriptArgs, OutputFormat};

fn main() -> Result<()> {
    let args = args::Args::parse();
    init_tracing(args.verbose);

    let table = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => bundled_catalog()?,
    };
    debug!(categories = table.len(), "catalog ready");

    match args.command {
        Command::Analyze(analyze_args) => run_analyze(&table, analyze_args),
        Command::ExportScript(export_args) => run_export(&table, export_args),
        Command::Categories => {
            print!("{}", render_categories(&table));
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_analyze(table: &CategoryTable, args: AnalyzeArgs) -> Result<()> {
    let raw = if args.description.is_empty() {
        read_description()?
    } else {
        args.description.join(" ")
    };

    // The gate trims, but reports carry the description as entered.
    match require_description(&raw) {
        Ok(_) => {}
        Err(AnalysisError::EmptyDescription) => {
            warn!("empty description, nothing to analyze");
            eprintln!("error: {}", AnalysisError::EmptyDescription);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }
    let description = raw.as_str();

    let result = match args.seed {
        Some(seed) => analyze(description, table, &mut StdRng::seed_from_u64(seed))?,
        None => analyze(description, table, &mut rand::rng())?,
    };

    let now = Utc::now();
    let output = match args.format {
        OutputFormat::Text => render::render_text(&result),
        OutputFormat::Markdown => render::render_markdown(&result, description, now),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&result)?;
            json.push('\n');
            json
        }
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    if let Some(dir) = args.report_dir {
        let path = write_report(&dir, &result, description, now)?;
        eprintln!("report written to {}", path.display());
    }

    Ok(())
}

/// Read one line from stdin, prompting when attached to a terminal.
///
/// Only the line terminator is removed.
fn read_description() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Describe the application or system to analyze:");
        eprint!("> ");
        io::stderr().flush()?;
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn run_export(table: &CategoryTable, args: ExportScriptArgs) -> Result<()> {
    let files = export_script_bundle(&args.dir, table)?;
    println!("{}", files.script.display());
    println!("{}", files.data.display());
    Ok(())
}

fn render_categories(table: &CategoryTable) -> String {
    let mut out = String::new();
    for (name, category) in table.iter() {
        out.push_str(&format!(
            "{name}\tkeywords={}\tthreats={}\n",
            category.keywords.len(),
            category.threats.len()
        ));
    }
    out
}
