//! Scaffold command handlers.

use serde_json::json;

use courseforge_scaffold::{
    BatchSummary, Outcome, OverwritePolicy, Scaffolder, StdinConfirm,
};

use crate::cli::args::{GenerateArgs, OutputFormat};
use crate::cli::commands::load_catalog;
use crate::error::CourseforgeError;

/// Execute `scaffold generate`.
///
/// Runs the batch driver over the requested range, prints the per-module
/// summary, and fails with a non-zero exit code if any module failed.
///
/// # Errors
///
/// Returns `CourseforgeError::Catalog` if the catalog file cannot be
/// loaded and `CourseforgeError::BatchFailed` if any module in the range
/// failed to generate.
pub fn generate(args: &GenerateArgs) -> Result<(), CourseforgeError> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let policy = if args.overwrite {
        if args.yes {
            OverwritePolicy::Force
        } else {
            OverwritePolicy::Ask
        }
    } else {
        OverwritePolicy::Keep
    };

    let confirm = StdinConfirm;
    let scaffolder = Scaffolder::new(&catalog, &args.out, &confirm)
        .with_template_module(args.template)
        .with_policy(policy);

    tracing::info!(
        range = %format!("{}-{}", args.range.start(), args.range.end()),
        out = %args.out.display(),
        "generating module pages"
    );

    let summary = scaffolder.generate_all(args.range.clone());

    match args.format {
        OutputFormat::Human => print_summary(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary_json(&summary))?),
    }

    if summary.has_failures() {
        return Err(CourseforgeError::BatchFailed {
            failed: summary.failed(),
        });
    }

    Ok(())
}

/// Print the tabulated module → outcome summary.
fn print_summary(summary: &BatchSummary) {
    println!("module  outcome");
    println!("------  -------");
    for record in &summary.results {
        match &record.result {
            Ok(Outcome::Created(path)) => {
                println!("    {:02}  created {}", record.module, path.display());
            }
            Ok(Outcome::Skipped(reason)) => {
                println!("    {:02}  skipped ({reason})", record.module);
            }
            Err(e) => {
                println!("    {:02}  FAILED: {e}", record.module);
            }
        }
    }
    println!();
    println!(
        "{} created, {} skipped, {} failed",
        summary.created(),
        summary.skipped(),
        summary.failed()
    );
}

/// Build the JSON representation of the batch summary.
fn summary_json(summary: &BatchSummary) -> serde_json::Value {
    let modules: Vec<serde_json::Value> = summary
        .results
        .iter()
        .map(|record| match &record.result {
            Ok(Outcome::Created(path)) => json!({
                "module": record.module,
                "outcome": "created",
                "path": path.display().to_string(),
            }),
            Ok(Outcome::Skipped(reason)) => json!({
                "module": record.module,
                "outcome": "skipped",
                "reason": reason.to_string(),
            }),
            Err(e) => json!({
                "module": record.module,
                "outcome": "failed",
                "error": e.to_string(),
            }),
        })
        .collect();

    json!({
        "created": summary.created(),
        "skipped": summary.skipped(),
        "failed": summary.failed(),
        "modules": modules,
    })
}
