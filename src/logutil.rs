//! Helpers for putting raw player input into log records.
//! Every record stays on one line, whatever the player typed.

/// Longest command echoed into a log record before it is cut with an ellipsis.
const MAX_LOGGED_CHARS: usize = 120;

/// Render a typed command for a single-line log record.
///
/// The input is read the way the command parser reads it: surrounding
/// whitespace is dropped and inner runs of whitespace (tabs and line breaks
/// included) collapse to one space. Blank input shows as `<empty>`. Other
/// control characters become `\xNN`, a backslash is doubled, and anything past
/// [`MAX_LOGGED_CHARS`] characters is cut with `…`.
pub fn escape_log(input: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(input.len().min(MAX_LOGGED_CHARS) + 4);
    let mut shown = 0;
    for (w, word) in input.split_whitespace().enumerate() {
        if w > 0 {
            if shown == MAX_LOGGED_CHARS {
                out.push('…');
                return out;
            }
            out.push(' ');
            shown += 1;
        }
        for ch in word.chars() {
            if shown == MAX_LOGGED_CHARS {
                out.push('…');
                return out;
            }
            match ch {
                '\\' => out.push_str("\\\\"),
                c if c.is_control() => {
                    let _ = write!(out, "\\x{:02X}", c as u32);
                }
                c => out.push(c),
            }
            shown += 1;
        }
    }

    if out.is_empty() {
        out.push_str("<empty>");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn collapses_whitespace_like_the_parser() {
        assert_eq!(escape_log("  go   north\r\n"), "go north");
        assert_eq!(escape_log("get\tcursed\nmirror"), "get cursed mirror");
    }

    #[test]
    fn blank_input_is_marked() {
        assert_eq!(escape_log(""), "<empty>");
        assert_eq!(escape_log(" \t\r\n"), "<empty>");
    }

    #[test]
    fn escapes_controls_and_backslashes() {
        assert_eq!(escape_log("get mirror\u{7}"), "get mirror\\x07");
        assert_eq!(escape_log("a\\b"), "a\\\\b");
    }

    #[test]
    fn truncates_long_input() {
        let long = "x".repeat(500);
        let escaped = escape_log(&long);
        assert!(escaped.ends_with('…'));
        assert_eq!(escaped.chars().count(), 121);

        let words = "go ".repeat(100);
        let escaped = escape_log(&words);
        assert!(escaped.ends_with('…'));
        assert!(!escaped.contains("  "));
    }
}
