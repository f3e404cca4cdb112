//! Architecture tests for file size limits.
//!
//! - Files >600 LOC get a warning.
//! - Files >900 LOC are presumed mis-scoped and fail the test.
//!
//! Walks every .rs file under `crates/` and counts non-blank, non-comment lines.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const WARNING_THRESHOLD: usize = 600;
const FAILURE_THRESHOLD: usize = 900;

/// Files allowed past the failure threshold, as (path suffix, justification).
const EXCLUDED_FILES: &[(&str, &str)] = &[(
    "side_effects_tests.rs",
    "One mock-backed test per command; splitting would duplicate the harness",
)];

#[test]
fn file_size_limits() {
    let workspace_root = find_workspace_root();
    let crates_dir = workspace_root.join("crates");
    assert!(crates_dir.exists(), "crates/ directory not found at {crates_dir:?}");

    let rust_files = find_rust_files(&crates_dir);
    let mut failures = Vec::new();

    for file_path in &rust_files {
        let loc = count_loc(&fs::read_to_string(file_path).expect("Failed to read file"));
        let relative = file_path.strip_prefix(&workspace_root).unwrap_or(file_path);
        let relative = relative.to_string_lossy();
        let excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !excluded {
            failures.push(format!("  - {relative}: {loc} lines"));
        } else if loc > WARNING_THRESHOLD {
            eprintln!("[architecture] warning: {relative} has {loc} LOC (>{WARNING_THRESHOLD})");
        }
    }

    assert!(
        failures.is_empty(),
        "\nFiles exceeding {FAILURE_THRESHOLD} LOC must be split or added to EXCLUDED_FILES:\n{}\n",
        failures.join("\n")
    );
    eprintln!("[architecture] Checked {} Rust files for size limits.", rust_files.len());
}

/// Count lines of code, skipping blank lines and `//` comment lines.
///
/// Block comments are handled simplistically: continuation lines starting
/// with `*` are skipped.
fn count_loc(content: &str) -> usize {
    let mut count = 0;
    let mut in_block_comment = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("/*") {
            in_block_comment = true;
        }
        if trimmed.ends_with("*/") {
            in_block_comment = false;
            continue;
        }
        if (in_block_comment && trimmed.starts_with('*')) || trimmed.starts_with("//") {
            continue;
        }
        count += 1;
    }
    count
}

/// All .rs files under `dir`, skipping build output and this crate.
fn find_rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Walk up from the current directory to the Cargo.toml with `[workspace]`.
fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");
    let mut dir = current_dir.as_path();
    loop {
        if let Ok(content) = fs::read_to_string(dir.join("Cargo.toml"))
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

#[test]
fn test_count_loc_basic() {
    let source = r#"// This is a comment
fn main() {
    let x = 5; // inline comment

    // Another comment
    println!("Hello");
}
"#;
    assert_eq!(count_loc(source), 4);
}

#[test]
fn test_count_loc_doc_and_block_comments() {
    let source = r#"//! Module documentation

/// Function documentation
fn test() {
    /* block
     * continued
     */
    let x = 1;
}
"#;
    assert_eq!(count_loc(source), 3);
}

#[test]
fn test_find_rust_files_skips_target() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/src")).unwrap();
    fs::create_dir_all(dir.path().join("target/debug")).unwrap();
    fs::write(dir.path().join("a/src/lib.rs"), "").unwrap();
    fs::write(dir.path().join("a/src/notes.md"), "").unwrap();
    fs::write(dir.path().join("target/debug/build.rs"), "").unwrap();

    let files = find_rust_files(dir.path());
    assert_eq!(files, vec![dir.path().join("a/src/lib.rs")]);
}
