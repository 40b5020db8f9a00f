use lsext::cli::ListingOptions;
use lsext::run_listing;
use lsext::scanner::ScanError;
use lsext::terminal::TerminalWidth;
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        File::create(dir.join(name)).unwrap();
    }
}

fn listing(dir: &Path, columns: u16) -> anyhow::Result<String> {
    let options = ListingOptions {
        directory: dir.to_path_buf(),
        width: Some(columns),
    };
    let mut out = Vec::new();
    run_listing(&options, TerminalWidth::new(columns), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_listing_single_row() {
    let dir = tempdir().unwrap();
    touch_all(dir.path(), &["x.a", "y.bb", "z.ccc"]);

    let out = listing(dir.path(), 80).unwrap();
    assert_eq!(out, ".a       .bb      .ccc     \n");
}

#[test]
fn test_listing_case_variants_collapse() {
    let dir = tempdir().unwrap();
    touch_all(dir.path(), &["one.txt", "two.TXT", "three.md"]);

    let out = listing(dir.path(), 80).unwrap();
    let shown: Vec<&str> = out.split_whitespace().collect();
    assert_eq!(shown, [".md", ".TXT"]);
}

#[test]
fn test_listing_no_extension_placeholder() {
    let dir = tempdir().unwrap();
    touch_all(dir.path(), &["a.txt", "b", ".gitignore"]);

    let out = listing(dir.path(), 80).unwrap();
    let shown: Vec<&str> = out.split_whitespace().collect();
    assert_eq!(shown, ["(none)", ".txt"]);
}

#[test]
fn test_listing_wraps_rows() {
    let dir = tempdir().unwrap();
    touch_all(dir.path(), &["1.a", "2.b", "3.c", "4.d", "5.e"]);

    // Labels are 2 wide, fields 7 wide: 20 columns fit 2 per row.
    let out = listing(dir.path(), 20).unwrap();
    let rows: Vec<Vec<&str>> = out
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(rows, vec![vec![".a", ".b"], vec![".c", ".d"], vec![".e"]]);
    assert!(out.lines().all(|line| line.len() <= 20));
}

#[test]
fn test_listing_ignores_subdirectories() {
    let dir = tempdir().unwrap();
    touch_all(dir.path(), &["top.rs"]);
    let sub = dir.path().join("nested.d");
    fs::create_dir(&sub).unwrap();
    touch_all(&sub, &["deep.py"]);

    let out = listing(dir.path(), 80).unwrap();
    assert_eq!(out.split_whitespace().collect::<Vec<_>>(), [".rs"]);
}

#[test]
fn test_listing_is_idempotent() {
    let dir = tempdir().unwrap();
    touch_all(
        dir.path(),
        &["a.JSON", "b.json", "c.yaml", "d", "e.Yaml", "f.lock", "g.rs"],
    );

    let first = listing(dir.path(), 30).unwrap();
    let second = listing(dir.path(), 30).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_listing_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = listing(&missing, 80).unwrap_err();
    match err.downcast_ref::<ScanError>() {
        Some(ScanError::NotFound(path)) => assert_eq!(path, &missing),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert!(format!("{:#}", err).contains("does-not-exist"));
}
