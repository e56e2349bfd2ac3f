//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the canvas crate's production sources for patterns the
//! engine must not contain. Each pattern has a budget (zero). Raising a
//! budget requires removing an existing occurrence first.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `canvas/src/`, excluding `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_none_or(|e| e != "rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Assert that `pattern` appears on at most `max` lines across production sources.
fn assert_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the canvas crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect();
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

// Panics — these abort the WASM instance.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0);
}

// Silent loss — discards errors without inspecting.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0);
}

// Output goes through the `log` facade.

#[test]
fn println_budget() {
    assert_budget("println!(", 0);
}

#[test]
fn dbg_budget() {
    assert_budget("dbg!(", 0);
}

// Style / structure.

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0);
}
