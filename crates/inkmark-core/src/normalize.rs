//! Input canonicalization.
//!
//! Every transform starts from a normalized document: UNIX line endings,
//! tabs expanded to spaces, whitespace-only lines emptied, and a blank line
//! guaranteed at the end so the block patterns can anchor on `\n\n`.

use crate::pattern::TAB_WIDTH;

/// Normalize a raw document before the rewrite passes run.
///
/// - `\r\n` and `\r` become `\n`
/// - tabs expand to the next tab stop, measured from the line start
/// - lines containing only spaces or tabs become empty
/// - two trailing newlines are appended after the final line terminator
pub(crate) fn normalize(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 3);
    let mut line = String::new();
    // column tracks chars on the current line so tab stops line up
    let mut column = 0;
    let mut valid = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' | '\r' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if valid {
                    output.push_str(&line);
                }
                output.push('\n');
                line.clear();
                column = 0;
                valid = false;
            }
            '\t' => {
                let width = TAB_WIDTH - column % TAB_WIDTH;
                for _ in 0..width {
                    line.push(' ');
                }
                column += width;
            }
            _ => {
                if !valid && c != ' ' {
                    valid = true;
                }
                line.push(c);
                column += 1;
            }
        }
    }

    if valid {
        output.push_str(&line);
    }
    output.push('\n');

    // add two newlines to the end before return
    output.push_str("\n\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endings_unified() {
        let lf = normalize("a\nb\n");
        assert_eq!(lf, normalize("a\r\nb\r\n"));
        assert_eq!(lf, normalize("a\rb\r"));
    }

    #[test]
    fn test_tab_expansion_from_line_start() {
        assert_eq!(normalize("\tx"), "    x\n\n\n");
        assert_eq!(normalize("ab\tx"), "ab  x\n\n\n");
        assert_eq!(normalize("abcd\tx"), "abcd    x\n\n\n");
    }

    #[test]
    fn test_whitespace_only_lines_emptied() {
        assert_eq!(normalize("a\n   \nb"), "a\n\nb\n\n\n");
        assert_eq!(normalize("a\n\t\nb"), "a\n\nb\n\n\n");
    }

    #[test]
    fn test_trailing_newlines_appended() {
        assert_eq!(normalize("a"), "a\n\n\n");
        assert_eq!(normalize("a\n"), "a\n\n\n\n");
    }
}
