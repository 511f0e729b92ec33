//! CLI argument definitions.
//!
//! All Clap derive structs for courseforge command-line parsing.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use courseforge_scaffold::parse_range;

// ============================================================================
// Root CLI
// ============================================================================

/// Workshop module scaffolder for Docusaurus training sites.
#[derive(Parser, Debug)]
#[command(name = "courseforge", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "COURSEFORGE_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate module pages from the catalog.
    Scaffold(ScaffoldCommand),

    /// Inspect and validate the module catalog.
    Catalog(CatalogCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Scaffold Command
// ============================================================================

/// Scaffolding commands.
#[derive(Args, Debug)]
pub struct ScaffoldCommand {
    /// Scaffold subcommand.
    #[command(subcommand)]
    pub subcommand: ScaffoldSubcommand,
}

/// Scaffold subcommands.
#[derive(Subcommand, Debug)]
pub enum ScaffoldSubcommand {
    /// Generate module pages for a range of module numbers.
    Generate(GenerateArgs),
}

/// Arguments for `scaffold generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Module range to generate (`2-30`, or a single number like `7`).
    #[arg(long, default_value = "2-30", value_parser = parse_range_arg)]
    pub range: RangeInclusive<u8>,

    /// Output directory for generated module pages.
    #[arg(short, long, default_value = "docs/modules")]
    pub out: PathBuf,

    /// YAML catalog file overriding the built-in module tables.
    #[arg(long, env = "COURSEFORGE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Module treated as the hand-authored template; always skipped.
    #[arg(long, default_value_t = 1)]
    pub template: u8,

    /// Replace existing module directories (asks per module unless --yes).
    #[arg(long)]
    pub overwrite: bool,

    /// Assume "yes" for overwrite confirmations.
    #[arg(short = 'y', long, requires = "overwrite")]
    pub yes: bool,

    /// Output format for the batch summary.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Catalog Command
// ============================================================================

/// Catalog management commands.
#[derive(Args, Debug)]
pub struct CatalogCommand {
    /// Catalog subcommand.
    #[command(subcommand)]
    pub subcommand: CatalogSubcommand,
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogSubcommand {
    /// Check catalog completeness and conventions.
    Validate(CatalogValidateArgs),

    /// List the modules in the catalog.
    List(CatalogListArgs),
}

/// Arguments for `catalog validate`.
#[derive(Args, Debug)]
pub struct CatalogValidateArgs {
    /// YAML catalog file overriding the built-in module tables.
    #[arg(long, env = "COURSEFORGE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Module range the catalog must cover.
    #[arg(long, default_value = "1-30", value_parser = parse_range_arg)]
    pub range: RangeInclusive<u8>,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `catalog list`.
#[derive(Args, Debug)]
pub struct CatalogListArgs {
    /// YAML catalog file overriding the built-in module tables.
    #[arg(long, env = "COURSEFORGE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

/// Clap value parser for module ranges.
fn parse_range_arg(value: &str) -> Result<RangeInclusive<u8>, String> {
    parse_range(value).map_err(|e| e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
