//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod catalog;
pub mod completions;
pub mod scaffold;
pub mod version;

use std::path::Path;

use courseforge_core::Catalog;

use crate::cli::args::{CatalogSubcommand, Cli, Commands, ScaffoldSubcommand};
use crate::error::CourseforgeError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), CourseforgeError> {
    match cli.command {
        Commands::Scaffold(cmd) => {
            let ScaffoldSubcommand::Generate(args) = cmd.subcommand;
            scaffold::generate(&args)
        }
        Commands::Catalog(cmd) => match cmd.subcommand {
            CatalogSubcommand::Validate(args) => catalog::validate(&args),
            CatalogSubcommand::List(args) => catalog::list(&args),
        },
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Load the catalog from a file, or fall back to the built-in curriculum.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CourseforgeError> {
    match path {
        Some(p) => {
            tracing::debug!(catalog = %p.display(), "loading catalog file");
            Ok(Catalog::load(p)?)
        }
        None => Ok(Catalog::builtin()),
    }
}
