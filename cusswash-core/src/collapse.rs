// cusswash-core/src/collapse.rs
//! Run collapsing for elongated letters and stretched whitespace.
//!
//! Elongation ("shiiiit") and padded spacing ("sh   it") both reduce to runs
//! of identical characters. The single-run functions collapse only the first
//! maximal run they find; the plural forms re-apply that step until the
//! string stops changing, which is the fully normalized form the matcher and
//! pipeline rely on.
//!
//! License: MIT OR Apache-2.0

/// Collapses the first maximal run of two or more identical alphanumeric
/// characters to a single character. Later runs are left untouched.
pub fn collapse_first_letter_run(s: &str) -> String {
    collapse_first_run(s, |c| c.is_alphanumeric())
}

/// Collapses the first maximal run of two or more identical whitespace
/// characters to a single character. Operates phrase-wide, across words.
pub fn collapse_first_whitespace_run(s: &str) -> String {
    collapse_first_run(s, |c| c.is_whitespace())
}

/// Re-applies [`collapse_first_letter_run`] until a fixpoint is reached, so
/// every repeated-letter run in the string is collapsed.
pub fn collapse_letter_runs(s: &str) -> String {
    fixpoint(s, collapse_first_letter_run)
}

/// Re-applies [`collapse_first_whitespace_run`] until a fixpoint is reached.
pub fn collapse_whitespace_runs(s: &str) -> String {
    fixpoint(s, collapse_first_whitespace_run)
}

fn fixpoint(s: &str, step: fn(&str) -> String) -> String {
    let mut current = s.to_string();
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Single linear scan for the first run of 2+ identical characters accepted
/// by `is_member`. Returns the input with that run reduced to one character,
/// or an unchanged copy when no run exists.
fn collapse_first_run(s: &str, is_member: impl Fn(char) -> bool) -> String {
    let mut iter = s.char_indices().peekable();
    while let Some((start, c)) = iter.next() {
        if !is_member(c) {
            continue;
        }
        let mut run_len = 1;
        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = iter.peek() {
            if next != c {
                break;
            }
            run_len += 1;
            end = idx + next.len_utf8();
            iter.next();
        }
        if run_len > 1 {
            let mut out = String::with_capacity(s.len());
            out.push_str(&s[..start]);
            out.push(c);
            out.push_str(&s[end..]);
            return out;
        }
    }
    s.to_string()
}
