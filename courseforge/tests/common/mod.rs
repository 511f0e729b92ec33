//! Shared helpers for spawning the courseforge binary in integration
//! tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Runs the courseforge binary with the given arguments.
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_courseforge"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to spawn courseforge")
}

/// Stdout of an `Output` as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of an `Output` as UTF-8.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Extracts the YAML frontmatter block of a generated page and parses it.
pub fn parse_frontmatter(page: &str) -> serde_yaml::Value {
    let rest = page
        .strip_prefix("---\n")
        .expect("page should start with frontmatter");
    let end = rest.find("\n---").expect("frontmatter should be closed");
    serde_yaml::from_str(&rest[..end]).expect("frontmatter should parse as YAML")
}

/// Writes a five-table catalog YAML covering modules 2..=6, optionally
/// omitting the title entry for one module.
pub fn write_small_catalog(path: &Path, missing_title: Option<u8>) {
    let mut yaml = String::new();

    yaml.push_str("tracks:\n");
    for n in 2..=6u8 {
        let track = if n == 6 { "intermediate" } else { "fundamentals" };
        yaml.push_str(&format!("  {n}: {track}\n"));
    }

    yaml.push_str("titles:\n");
    for n in 2..=6u8 {
        if Some(n) == missing_title {
            continue;
        }
        let title = if n == 6 {
            "API Development with AI".to_string()
        } else {
            format!("Sample Module {n}")
        };
        yaml.push_str(&format!("  {n}: {title}\n"));
    }

    yaml.push_str("descriptions:\n");
    for n in 2..=6u8 {
        yaml.push_str(&format!("  {n}: One-sentence summary for module {n}.\n"));
    }

    yaml.push_str("difficulties:\n");
    for n in 2..=6u8 {
        let difficulty = if n == 6 { "application" } else { "foundation" };
        yaml.push_str(&format!("  {n}: {difficulty}\n"));
    }

    yaml.push_str("durations:\n");
    for n in 2..=6u8 {
        let duration = if n == 6 { 150 } else { 120 };
        yaml.push_str(&format!("  {n}: {duration}\n"));
    }

    std::fs::write(path, yaml).expect("failed to write catalog fixture");
}
