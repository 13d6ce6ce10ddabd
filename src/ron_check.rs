//! Lightweight structural check for RON theme files.
//!
//! COSMIC applet themes ship as `.ron` files. This module does not parse
//! RON; it only verifies that brackets and parentheses balance outside of
//! string literals, which catches the truncated-download and hand-edit
//! mistakes seen in practice without pulling in a full RON parser.

use std::fs;
use std::path::Path;

/// Check that brackets, braces, and parentheses balance in a RON file.
///
/// String literals (double-quoted, with backslash escapes) are skipped, so
/// brackets inside strings do not count. An unterminated string is not
/// itself an error; only bracket balance is verified. Returns `false` if
/// the file is missing or unreadable.
#[must_use]
pub fn check_ron_syntax(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };

    let mut stack = Vec::new();
    let mut in_string = false;
    let mut escape = false;

    for ch in content.chars() {
        if escape {
            escape = false;
            continue;
        }
        match ch {
            '\\' => escape = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '(' | '[' | '{' => stack.push(ch),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}
