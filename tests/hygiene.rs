//! Hygiene — enforces coding standards at test time
//!
//! These tests scan `src/` for antipatterns that violate project standards.
//! Each has a budget (ideally zero). If you must add one, you have to fix an
//! existing one first — the budget never grows.

use std::fs;
use std::path::Path;

/// (pattern, budget) pairs for production code.
const BUDGETS: &[(&str, usize)] = &[
    // Panics — these take the whole page script down.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 0),
    (".ok()", 0),
    // Output goes through the `log` facade.
    ("println!(", 0),
    ("eprintln!(", 0),
    ("#[allow(dead_code)]", 0),
];

/// Files allowed to leak closures for the page lifetime.
const FORGET_ALLOWED: &[&str] = &["dom.rs", "nav_highlighter.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            failures.push(format!("{pattern} budget exceeded: found {count}, max {budget}.\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn closure_forget_is_confined() {
    let files = source_files();
    let stray: Vec<_> = hits(&files, ".forget()")
        .into_iter()
        .filter(|(path, _)| !FORGET_ALLOWED.iter().any(|allowed| path.ends_with(allowed)))
        .collect();
    assert!(stray.is_empty(), "closures leaked outside util/dom.rs:\n{}", format_hits(&stray));
}

#[test]
fn state_modules_stay_browser_free() {
    let files: Vec<_> = source_files()
        .into_iter()
        .filter(|f| f.path.replace('\\', "/").contains("src/state/"))
        .collect();
    assert!(!files.is_empty());
    for pattern in ["web_sys", "wasm_bindgen", "js_sys"] {
        let found = hits(&files, pattern);
        assert!(found.is_empty(), "state modules must not use {pattern}:\n{}", format_hits(&found));
    }
}

#[test]
fn tag_bootstrap_failure_does_not_abort_tracking() {
    let files = source_files();
    let found = hits(&files, "gtag::install(id)?");
    assert!(found.is_empty(), "tag bootstrap failures must be logged, not propagated:\n{}", format_hits(&found));
    let analytics = files.iter().find(|f| f.path.replace('\\', "/").ends_with("components/analytics.rs"));
    assert!(analytics.is_some_and(|f| f.content.contains("gtag::install(")));
}

#[test]
fn accordion_syncs_markup_on_mount() {
    let files = source_files();
    let binding = files.iter().find(|f| f.path.replace('\\', "/").ends_with("components/accordion.rs"));
    assert!(binding.is_some_and(|f| f.content.contains("view.apply(&group.snapshot())")));
}
