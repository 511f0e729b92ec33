//! courseforge core — module catalog and descriptor types.
//!
//! The catalog holds the five lookup tables (track, title, description,
//! difficulty, duration) keyed by module number, plus the built-in
//! reference data for the 30-module workshop curriculum.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, DescriptorTable};
pub use types::{Difficulty, ModuleDescriptor, Track, difficulty_stars, track_display_name};
