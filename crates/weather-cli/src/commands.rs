use anyhow::{Context, Result};
use tracing::{info, info_span};

use weather_ingest::read_csv_table;
use weather_output::write_processed;
use weather_transform::{CleanError, CleanOutcome, TableCleaner};

use crate::cli::CleanArgs;
use crate::types::RunResult;

/// Exit code for a schema mismatch.
pub const EXIT_SCHEMA: i32 = 2;
/// Exit code for a value that cannot be coerced.
pub const EXIT_TYPE_COERCION: i32 = 3;
/// Exit code for every other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Loads, cleans and writes the weather table.
///
/// Output is written only after every cleaning stage has succeeded.
pub fn run_clean(args: &CleanArgs) -> Result<RunResult> {
    let span = info_span!(
        "run",
        input = %args.input.display(),
        output_dir = %args.output_dir.display()
    );
    let _guard = span.enter();

    let source = read_csv_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    info!(
        rows = source.data.height(),
        columns = source.headers.len(),
        "loaded source table"
    );

    let cleaner = TableCleaner::new(args.options());
    let CleanOutcome { table, report } = cleaner
        .clean(&source.headers.columns, &source.data)
        .with_context(|| format!("clean {}", args.input.display()))?;

    let output = write_processed(&table, &args.output_dir)
        .with_context(|| format!("write output to {}", args.output_dir.display()))?;

    Ok(RunResult {
        input: args.input.clone(),
        output,
        table,
        report,
    })
}

/// Maps a failed run to the process exit code.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    let clean_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CleanError>());
    match clean_error {
        Some(CleanError::Schema(_)) => EXIT_SCHEMA,
        Some(CleanError::TypeCoercion(_)) => EXIT_TYPE_COERCION,
        _ => EXIT_FAILURE,
    }
}
