//! String builders for margins, dividers, titles and enumerated lines

/// Default divider width in columns
pub const DEFAULT_DIVIDER_WIDTH: usize = 80;

/// Default divider symbol
pub const DEFAULT_DIVIDER_SYMBOL: &str = "-";

/// Default width of the line-number column in enumerated output
pub const DEFAULT_ENUMERATION_WIDTH: usize = 5;

/// Build a margin of `width` spaces
pub fn build_margin(width: usize) -> String {
    " ".repeat(width)
}

/// Build a divider by repeating `symbol` `width` times
pub fn build_div(symbol: &str, width: usize) -> String {
    symbol.repeat(width)
}

/// Center `title` within `width` columns
///
/// Leading padding is `width / 2 - title_len / 2` (integer division, never
/// negative). No trailing padding is added.
pub fn build_title(title: &str, width: usize) -> String {
    let title_len = title.chars().count();
    let center = (width / 2).saturating_sub(title_len / 2);
    format!("{}{}", build_margin(center), title)
}

/// Prefix a line with its left-justified line number and a tab
pub fn build_enumerated_line(line_number: usize, line: &str, width: usize) -> String {
    format!("{:<width$}\t{}", line_number, line, width = width)
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`
///
/// A terminator at the very end does not produce a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_margin() {
        assert_eq!(build_margin(0), "");
        assert_eq!(build_margin(5), "     ");
    }

    #[test]
    fn test_build_div() {
        let div = build_div(DEFAULT_DIVIDER_SYMBOL, DEFAULT_DIVIDER_WIDTH);
        assert_eq!(div.len(), 80);
        assert!(div.chars().all(|c| c == '-'));

        assert_eq!(build_div("=+", 3), "=+=+=+");
    }

    #[test]
    fn test_build_title_centers() {
        // 80 / 2 - 11 / 2 = 35
        let title = build_title("hello world", 80);
        assert_eq!(title, format!("{}hello world", " ".repeat(35)));
    }

    #[test]
    fn test_build_title_counts_chars() {
        let title = build_title("héllo", 10);
        assert_eq!(title, "   héllo");
    }

    #[test]
    fn test_build_title_wider_than_field() {
        let long = "x".repeat(100);
        assert_eq!(build_title(&long, 80), long);
    }

    #[test]
    fn test_build_enumerated_line() {
        assert_eq!(build_enumerated_line(1, "fn main() {", 5), "1    \tfn main() {");
        assert_eq!(build_enumerated_line(123456, "x", 5), "123456\tx");
    }

    #[test]
    fn test_split_lines_all_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("one\rtwo\rthree\r"), vec!["one", "two", "three"]);
        assert_eq!(split_lines("x\r\n\r\ny\n"), vec!["x", "", "y"]);
    }

    #[test]
    fn test_split_lines_edges() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("no terminator"), vec!["no terminator"]);
    }
}
