//! courseforge — workshop module scaffolder for Docusaurus training sites.
//!
//! This crate provides the command-line surface; the catalog lives in
//! `courseforge-core` and the rendering/scaffolding engine in
//! `courseforge-scaffold`.

pub mod cli;
pub mod error;
pub mod observability;
