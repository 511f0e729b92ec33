//! Command-line surface: argument definitions and command dispatch.

pub mod args;
pub mod commands;
