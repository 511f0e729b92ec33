//! courseforge scaffold — module page rendering and the filesystem
//! scaffolding engine.
//!
//! Rendering (`frontmatter`, `page`) is pure string building; all
//! filesystem side effects live in `scaffolder`.

pub mod error;
pub mod frontmatter;
pub mod page;
pub mod range;
pub mod scaffolder;

pub use error::ScaffoldError;
pub use range::parse_range;
pub use scaffolder::{
    BatchSummary, ConfirmPrompt, ModuleResult, Outcome, OverwritePolicy, Scaffolder, SkipReason,
    StdinConfirm,
};
