mod common;

use std::fs;
use std::path::Path;

use common::{parse_frontmatter, run, stderr, stdout, write_small_catalog};

fn generate(out: &Path, extra: &[&str]) -> std::process::Output {
    let out_str = out.to_str().unwrap();
    let mut args = vec!["--quiet", "scaffold", "generate", "--out", out_str];
    args.extend_from_slice(extra);
    run(&args)
}

// ============================================================================
// completeness
// ============================================================================

#[test]
fn full_range_produces_twenty_nine_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("docs/modules");

    let output = generate(&out, &[]);
    assert!(
        output.status.success(),
        "generate should exit 0: {}",
        stderr(&output)
    );

    for n in 2..=30u8 {
        let index = out.join(format!("module-{n:02}/index.md"));
        assert!(index.is_file(), "missing {}", index.display());
    }
    assert!(
        !out.join("module-01").exists(),
        "template module must not be generated"
    );

    let entries = fs::read_dir(&out).unwrap().count();
    assert_eq!(entries, 29, "exactly one directory per generated module");
}

// ============================================================================
// determinism
// ============================================================================

#[test]
fn regeneration_with_overwrite_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("docs/modules");

    let first_run = generate(&out, &["--range", "2-10"]);
    assert!(first_run.status.success());
    let first: Vec<Vec<u8>> = (2..=10u8)
        .map(|n| fs::read(out.join(format!("module-{n:02}/index.md"))).unwrap())
        .collect();

    let second_run = generate(&out, &["--range", "2-10", "--overwrite", "--yes"]);
    assert!(second_run.status.success());
    for (i, n) in (2..=10u8).enumerate() {
        let second = fs::read(out.join(format!("module-{n:02}/index.md"))).unwrap();
        assert_eq!(first[i], second, "module {n} should regenerate identically");
    }
}

// ============================================================================
// idempotent skip
// ============================================================================

#[test]
fn second_run_without_overwrite_skips_and_preserves_edits() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("docs/modules");

    assert!(generate(&out, &["--range", "5"]).status.success());
    let index = out.join("module-05/index.md");
    fs::write(&index, "hand edited\n").unwrap();

    let output = generate(&out, &["--range", "5"]);
    assert!(output.status.success(), "skip is not an error");
    assert!(
        stdout(&output).contains("skipped (already exists)"),
        "summary should report the skip: {}",
        stdout(&output)
    );
    assert_eq!(fs::read_to_string(&index).unwrap(), "hand edited\n");
}

#[test]
fn overwrite_without_yes_declines_on_closed_stdin() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("docs/modules");

    assert!(generate(&out, &["--range", "5"]).status.success());
    let index = out.join("module-05/index.md");
    fs::write(&index, "hand edited\n").unwrap();

    // stdin is null, so the y/N prompt reads EOF and defaults to "no"
    let output = generate(&out, &["--range", "5", "--overwrite"]);
    assert!(output.status.success(), "declined overwrite is a skip");
    assert!(
        stdout(&output).contains("skipped (overwrite declined)"),
        "summary should report the declined overwrite: {}",
        stdout(&output)
    );
    assert_eq!(fs::read_to_string(&index).unwrap(), "hand edited\n");
}

// ============================================================================
// missing-descriptor isolation
// ============================================================================

#[test]
fn missing_title_fails_one_module_and_continues() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("docs/modules");
    let catalog = tmp.path().join("catalog.yaml");
    write_small_catalog(&catalog, Some(4));

    let output = generate(
        &out,
        &["--range", "2-6", "--catalog", catalog.to_str().unwrap()],
    );
    assert_eq!(
        output.status.code(),
        Some(1),
        "batch with a failure should exit 1: {}",
        stderr(&output)
    );

    for n in [2u8, 3, 5, 6] {
        assert!(
            out.join(format!("module-{n:02}/index.md")).is_file(),
            "module {n} should still generate"
        );
    }
    assert!(!out.join("module-04").exists());

    let text = stdout(&output);
    assert!(
        text.contains("no title entry"),
        "summary should name the missing table: {text}"
    );
    assert!(text.contains("4 created, 0 skipped, 1 failed"), "{text}");
}

// ============================================================================
// frontmatter validity
// ============================================================================

#[test]
fn every_generated_page_has_valid_frontmatter() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("docs/modules");
    assert!(generate(&out, &[]).status.success());

    for n in 2..=30u8 {
        let page = fs::read_to_string(out.join(format!("module-{n:02}/index.md"))).unwrap();
        let fm = parse_frontmatter(&page);

        let title = fm["title"].as_str().unwrap_or_default();
        assert!(
            title.starts_with(&format!("Module {n:02}: ")),
            "module {n} title: {title}"
        );
        assert!(
            !fm["description"].as_str().unwrap_or_default().is_empty(),
            "module {n} description should be non-empty"
        );
        assert_eq!(
            fm["sidebar_position"].as_u64(),
            Some(u64::from(n)),
            "module {n} sidebar_position"
        );
        assert!(
            fm["tags"].as_sequence().is_some_and(|t| t.len() == 2),
            "module {n} should have track and difficulty tags"
        );
    }
}

// ============================================================================
// concrete module 6 scenario
// ============================================================================

#[test]
fn module_six_reference_output() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("docs/modules");
    assert!(generate(&out, &["--range", "6"]).status.success());

    let page = fs::read_to_string(out.join("module-06/index.md")).unwrap();

    let fm = parse_frontmatter(&page);
    assert_eq!(
        fm["title"].as_str(),
        Some("Module 06: API Development with AI")
    );
    assert_eq!(fm["sidebar_position"].as_u64(), Some(6));

    assert_eq!(
        page.matches("⭐⭐").count(),
        1,
        "two-star badge should appear exactly once"
    );
    assert!(page.contains("../module-07/"), "closing link target");
}

// ============================================================================
// JSON summary
// ============================================================================

#[test]
fn json_summary_is_parseable() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("docs/modules");

    let output = generate(&out, &["--range", "2-4", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["created"], 3);
    assert_eq!(value["failed"], 0);
    assert_eq!(value["modules"].as_array().map(Vec::len), Some(3));
}
