//! Catalog command handlers: completeness validation and module listing.

use serde_json::json;

use courseforge_core::{difficulty_stars, track_display_name};

use crate::cli::args::{CatalogListArgs, CatalogValidateArgs, OutputFormat};
use crate::cli::commands::load_catalog;
use crate::error::CourseforgeError;

/// Execute `catalog validate`.
///
/// Checks that every module in the range has an entry in all five tables
/// and that tracks follow the blocks-of-five convention. Missing entries
/// are errors; convention breaks are warnings (errors under `--strict`).
///
/// # Errors
///
/// Returns `CourseforgeError::Validation` when errors are found, or when
/// warnings are found in strict mode.
pub fn validate(args: &CatalogValidateArgs) -> Result<(), CourseforgeError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let numbers: Vec<u8> = args.range.clone().collect();
    let validation = catalog.validate(&numbers);

    for entry in &validation.missing {
        eprintln!(
            "ERROR: module {} has no {} entry",
            entry.module, entry.table
        );
    }

    for warning in &validation.track_warnings {
        eprintln!(
            "WARNING: module {} has track '{}' but its block uses '{}'",
            warning.module, warning.track, warning.expected
        );
    }

    let mut errors = validation.missing.len();
    if args.strict {
        errors += validation.track_warnings.len();
    }

    if errors > 0 {
        eprintln!("\n{errors} error(s) found");
        return Err(CourseforgeError::Validation { errors });
    }

    eprintln!("Validation passed");
    Ok(())
}

/// Execute `catalog list`.
///
/// # Errors
///
/// Returns `CourseforgeError::Catalog` if the catalog file cannot be
/// loaded; modules with incomplete descriptors are listed with a dash in
/// the affected columns rather than failing the listing.
pub fn list(args: &CatalogListArgs) -> Result<(), CourseforgeError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let numbers = catalog.module_numbers();

    match args.format {
        OutputFormat::Human => {
            println!("{:>6}  {:<12}  {:<44}  {:<5}  {:>8}", "module", "track", "title", "stars", "minutes");
            for number in numbers {
                let track = catalog
                    .tracks
                    .get(&number)
                    .map_or("-", |t| track_display_name(t));
                let title = catalog.titles.get(&number).map_or("-", String::as_str);
                let stars = catalog.difficulties.get(&number).map_or_else(
                    || "-".to_string(),
                    |d| "⭐".repeat(usize::from(difficulty_stars(d))),
                );
                let duration = catalog
                    .durations
                    .get(&number)
                    .map_or_else(|| "-".to_string(), ToString::to_string);
                println!("{number:>6}  {track:<12}  {title:<44}  {stars:<5}  {duration:>8}");
            }
        }
        OutputFormat::Json => {
            let modules: Vec<serde_json::Value> = numbers
                .into_iter()
                .map(|number| {
                    catalog.descriptor(number).map_or_else(
                        |_| json!({ "number": number, "incomplete": true }),
                        |descriptor| json!(descriptor),
                    )
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&modules)?);
        }
    }

    Ok(())
}
