use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use seqren::{RenameEntry, RenameReport, rename_sequentially_with};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_summary<W: Write>(out: &mut W, report: &RenameReport) -> io::Result<()> {
    if report.is_empty() {
        writeln!(out, "No files found in the folder.")
    } else if report.dry_run {
        writeln!(
            out,
            "Dry run: {} of {} files would be renamed.",
            report.files - report.unchanged,
            report.files
        )
    } else {
        writeln!(out, "All files have been renamed successfully.")
    }
}

/// Run one pass and write its status lines (or JSON report) to `out`.
pub fn run_with_output<W: Write>(args: &CliArgs, out: &mut W) -> Result<(), AppError> {
    let params = args.params();
    let verb = if params.dry_run { "Would rename" } else { "Renamed" };

    // Lines are written as each file settles, so a failure later in the pass
    // still leaves a record of what was already renamed.
    let mut write_error: Option<io::Error> = None;
    let result = rename_sequentially_with(&args.folder, &params, |entry: &RenameEntry| {
        if args.json || write_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(
            out,
            "{}: {} -> {}",
            verb,
            entry.original.to_string_lossy(),
            entry.renamed.to_string_lossy()
        ) {
            write_error = Some(e);
        }
    });

    let report = result?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        print_summary(out, &report)?;
    }

    info!(
        "Done: {} files, {} renamed, {} unchanged",
        report.files, report.renamed, report.unchanged
    );
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(&args, &mut out)
}
