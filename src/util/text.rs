use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// SEC-001: Flattens feed text for single-line terminal output.
///
/// Feed values are attacker-controlled. This drops ANSI escape sequences
/// (CSI `\x1b[..final` and OSC `\x1b]..BEL|ST`) and every other control
/// character, and collapses whitespace runs (including newlines) to one
/// space. Leading and trailing whitespace is removed.
///
/// Returns `Cow::Borrowed` when the input is already clean.
pub fn flatten_for_terminal(s: &str) -> Cow<'_, str> {
    let clean = !s.contains(|c: char| c.is_control() || c == '\u{1b}')
        && !s.contains("  ")
        && s.trim().len() == s.len();
    if clean {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let mut pending_space = false;

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Parameters run until the final byte in 0x40..=0x7e
                    for c in chars.by_ref() {
                        if ('\u{40}'..='\u{7e}').contains(&c) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(c) = chars.next() {
                        if c == '\u{07}' {
                            break;
                        }
                        if c == '\u{1b}' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if c.is_control() {
            continue;
        }

        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    Cow::Owned(out)
}

/// Truncates `s` to at most `max_width` terminal columns, ending in `...`
/// when something was cut.
///
/// Wide (CJK, emoji) characters count as two columns. Widths of three or
/// less have no room for the ellipsis and simply cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if UnicodeWidthStr::width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let ellipsis = if max_width > ELLIPSIS.len() { ELLIPSIS } else { "" };
    let budget = max_width - ellipsis.len();

    let mut used = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + c.len_utf8();
    }

    Cow::Owned(format!("{}{}", &s[..end], ellipsis))
}
