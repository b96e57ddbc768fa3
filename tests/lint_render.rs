//! Lint for the Thirty Days renderer.
//!
//! Two rules keep every button tappable on mobile:
//!
//! * A function in `render.rs` that draws key-hint text (`[M]`, or a
//!   `" [{}] "` template) must register a click target itself, through
//!   `push_clickable`, `add_click_target` or `add_row_target`. Panels that
//!   only call `push_choice` never build the hint text and pass this check.
//! * Every click ID declared in `actions.rs` is used by the renderer, so no
//!   action is reachable from the keyboard alone.

use std::fs;
use std::path::Path;

const REGISTRATIONS: [&str; 3] = ["push_clickable(", "add_click_target(", "add_row_target("];

fn game_file(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/game").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}

/// Source before the `#[cfg(test)]` module.
fn non_test(source: &str) -> &str {
    match source.find("#[cfg(test)]") {
        Some(i) => &source[..i],
        None => source,
    }
}

/// Contents of the string literals on one line.
fn string_literals(line: &str) -> Vec<String> {
    let mut literals = Vec::new();
    let mut current = String::new();
    let mut inside = false;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if !inside {
            inside = c == '"';
            continue;
        }
        match c {
            '\\' => current.extend(chars.next()),
            '"' => {
                literals.push(std::mem::take(&mut current));
                inside = false;
            }
            _ => current.push(c),
        }
    }
    literals
}

/// A string literal holding a key hint such as `[M]` or `[1]`, or the `[{}]` template.
fn has_key_hint(line: &str) -> bool {
    string_literals(line).iter().any(|lit| {
        lit.contains("[{}]")
            || lit.as_bytes().windows(3).any(|w| {
                w[0] == b'[' && w[2] == b']' && (w[1].is_ascii_alphanumeric() || w[1] == b'-')
            })
    })
}

struct RenderFn {
    name: String,
    start_line: usize,
    body: Vec<String>,
}

/// Split top-level `fn` items. Bodies end where the next item begins.
fn split_functions(source: &str) -> Vec<RenderFn> {
    let mut fns: Vec<RenderFn> = Vec::new();
    for (i, line) in source.lines().enumerate() {
        let header = line.strip_prefix("pub fn ").or_else(|| line.strip_prefix("fn "));
        if let Some(rest) = header {
            let name = rest.split(['(', '<']).next().unwrap_or(rest).to_string();
            fns.push(RenderFn { name, start_line: i + 1, body: Vec::new() });
            continue;
        }
        if let Some(current) = fns.last_mut() {
            let code = line.trim_start();
            if !code.starts_with("//") {
                current.body.push(code.to_string());
            }
        }
    }
    fns
}

/// Functions that draw key hints without registering a click target.
fn unregistered_key_hints(source: &str) -> Vec<(String, usize)> {
    split_functions(non_test(source))
        .into_iter()
        .filter(|f| {
            let draws_hint = f.body.iter().any(|l| has_key_hint(l));
            let registers = f
                .body
                .iter()
                .any(|l| REGISTRATIONS.iter().any(|r| l.contains(r)));
            draws_hint && !registers
        })
        .map(|f| (f.name, f.start_line))
        .collect()
}

/// `pub const NAME: u16` items.
fn click_ids(actions_source: &str) -> Vec<String> {
    actions_source
        .lines()
        .filter_map(|l| l.trim().strip_prefix("pub const "))
        .filter_map(|rest| rest.split_once(": u16"))
        .map(|(name, _)| name.to_string())
        .collect()
}

fn uses_word(source: &str, word: &str) -> bool {
    source.match_indices(word).any(|(i, _)| {
        let before = source[..i].chars().next_back();
        let after = source[i + word.len()..].chars().next();
        let ident = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
        !ident(before) && !ident(after)
    })
}

#[test]
fn key_hints_register_click_targets() {
    let source = game_file("render.rs");
    let violations = unregistered_key_hints(&source);
    if !violations.is_empty() {
        let mut msg = String::from(
            "render.rs functions draw [X] key hints without registering a click target.\n\
             Use push_choice() or register the row/cell in the same function.\n\n",
        );
        for (name, line) in &violations {
            msg.push_str(&format!("  render.rs:{}: fn {}\n", line, name));
        }
        panic!("{}", msg);
    }
}

#[test]
fn every_click_id_is_rendered() {
    let ids = click_ids(&game_file("actions.rs"));
    assert!(!ids.is_empty());
    let render = game_file("render.rs");
    let missing: Vec<_> = ids
        .iter()
        .filter(|id| !uses_word(non_test(&render), id))
        .collect();
    assert!(missing.is_empty(), "click IDs never drawn: {:?}", missing);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_hint_in_plain_push() {
        let source = r#"
fn render_location() {
    cl.push(Line::from(" [M] Move  [S] Stats"));
}
"#;
        let violations = unregistered_key_hints(source);
        assert_eq!(violations, vec![("render_location".to_string(), 2)]);
    }

    #[test]
    fn template_hint_needs_registration() {
        let source = r#"
fn render_footer() {
    let key_span = Span::raw(format!(" [{}] ", key));
}

fn push_choice() {
    let key_span = Span::raw(format!(" [{}] ", key));
    cl.push_clickable(Line::from(key_span), action_id);
}
"#;
        let violations = unregistered_key_hints(source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].0, "render_footer");
    }

    #[test]
    fn cell_targets_count_as_registration() {
        let source = r#"
fn render_keypad() {
    spans.push(Span::raw("[7]"));
    cs.add_click_target(Rect::new(x, y, 6, 1), id);
}
"#;
        assert!(unregistered_key_hints(source).is_empty());
    }

    #[test]
    fn comments_and_tests_are_ignored() {
        let source = r#"
fn render_move() {
    // cl.push(Line::from(" [Q] Walk out"));
    push_choice(&mut cl, "1", "Downtown", TRAVEL_BASE, false);
}

#[cfg(test)]
fn fixture() {
    cl.push(Line::from(" [R] Play again"));
}
"#;
        assert!(unregistered_key_hints(source).is_empty());
    }

    #[test]
    fn key_hint_detection() {
        assert!(has_key_hint(r#"Line::from(" [M] Move")"#));
        assert!(has_key_hint(r#"Span::raw("[1]")"#));
        assert!(has_key_hint(r#"Span::raw("[-] Back")"#));
        assert!(has_key_hint(r#"format!(" [{}] ", key)"#));
        assert!(!has_key_hint(r#"Span::raw("[]")"#));
        assert!(!has_key_hint(r#"Span::raw("[MM]")"#));
        assert!(!has_key_hint("let (x, y) = (chunks[0], rows[r]);"));
        assert!(!has_key_hint(r#"format!("{}", rows[0])"#));
    }

    #[test]
    fn literals_handle_escapes() {
        assert_eq!(
            string_literals(r#"say("\"[Q]\" quits", "b")"#),
            vec!["\"[Q]\" quits".to_string(), "b".to_string()]
        );
        assert!(string_literals("chunks[1]").is_empty());
    }

    #[test]
    fn reads_click_ids() {
        let source = "pub const OPEN_MOVE: u16 = 30;\npub const MAX: usize = 4;\n\
                      pub const SUBMIT: u16 = 72; // keypad";
        assert_eq!(click_ids(source), vec!["OPEN_MOVE", "SUBMIT"]);
    }

    #[test]
    fn word_match_respects_identifiers() {
        assert!(uses_word("push_choice(&mut cl, \"-\", \"Back\", BACK);", "BACK"));
        assert!(!uses_word("KEYPAD_BASE + 1", "BASE"));
        assert!(!uses_word("BACKGROUND", "BACK"));
    }
}
