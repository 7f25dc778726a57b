//! Lint: detect bracket-key text (`[X]`) rendered without click registration.
//!
//! Every `[X]`-style key hint shown on screen must also be tappable:
//! overlay actions go through `OverlayPanel`, tab labels through `TabBar`,
//! and list rows through `ClickableList::push_clickable` — all of which
//! register click targets. Plain `cl.push(...)` renders the text but makes
//! it un-clickable, a recurring source of tap bugs on mobile.
//!
//! This test scans all `render.rs` files under `src/games/` (and the
//! menu) and flags `push(` calls whose string arguments contain
//! bracket-key patterns.

use std::fs;
use std::path::Path;

/// Whether a line contains a bracket-key pattern like `[R]`, `[S]`, `[1]`.
fn contains_bracket_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    for i in 0..bytes.len() - 2 {
        if bytes[i] == b'[' && bytes[i + 2] == b']' {
            let ch = bytes[i + 1];
            if ch.is_ascii_alphanumeric() {
                return true;
            }
        }
    }
    false
}

/// Scan source for non-clickable `push(` calls containing bracket keys.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with("//") || trimmed.starts_with("///") {
            continue;
        }
        if !contains_bracket_key(line) {
            continue;
        }

        let has_push = line.contains(".push(");
        let has_clickable = line.contains("push_clickable(");
        if has_push && !has_clickable {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

fn visit_render_files(dir: &Path, all_violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_render_files(&path, all_violations);
        } else if path.file_name().is_some_and(|n| n == "render.rs" || n == "menu.rs") {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_num, line) in find_bracket_key_in_push(&source) {
                all_violations.push((path.display().to_string(), line_num, line));
            }
        }
    }
}

#[test]
fn no_bracket_keys_in_non_clickable_push() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut all_violations = Vec::new();

    visit_render_files(&src_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found bracket-key text [X] in non-clickable cl.push() calls.\n\
             Key hints shown on screen must register a click target — use\n\
             push_clickable(), TabBar, or OverlayPanel instead.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[test]
fn bracket_key_detection() {
    assert!(contains_bracket_key("label \"[R] Play Again\""));
    assert!(contains_bracket_key("[1]"));
    assert!(!contains_bracket_key("[] empty"));
    assert!(!contains_bracket_key("array[idx]"));
    assert!(!contains_bracket_key("no brackets at all"));
}

#[test]
fn push_scan_flags_only_non_clickable_lines() {
    let source = r#"
        cl.push(Line::from("[R] restart hint"));
        cl.push_clickable(Line::from("[R] restart hint"), RESTART);
        cl.push(Line::from("plain text"));
        // cl.push(Line::from("[X] commented out"));
    "#;
    let violations = find_bracket_key_in_push(source);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].0, 2); // only the first push line
}
