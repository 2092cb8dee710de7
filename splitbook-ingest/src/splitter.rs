//! Quote-aware field splitting for one line of a delimited export.
//!
//! A field may be wrapped in double quotes; inside quotes the delimiter is
//! plain content and `""` stands for a literal `"`. An unterminated quote
//! runs to the end of the line.

pub const DELIMITER: char = ',';
const QUOTE: char = '"';

const BOM: char = '\u{feff}';

/// `text` without a leading byte order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Lines of `text` that are not blank; CR, LF and CRLF all end a line.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n']).filter(|l| !l.trim().is_empty())
}

/// Split `line` on commas into trimmed fields.
pub fn split_line(line: &str) -> Vec<String> {
    split_fields(line, DELIMITER)
}

/// Split `line` on `delimiter` into trimmed fields.
///
/// Always yields at least one field; an empty line gives `[""]`.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == QUOTE {
            if in_quotes && chars.peek() == Some(&QUOTE) {
                current.push(QUOTE);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_trimmed() {
        assert_eq!(split_line(" a , b,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_delimiter_is_content() {
        let fields = split_line(r#""01/15/2024","-1,234.50","*","","ACME, INC""#);
        assert_eq!(fields, vec!["01/15/2024", "-1,234.50", "*", "", "ACME, INC"]);
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        let fields = split_line(r#"x,"say ""hi""",y"#);
        assert_eq!(fields, vec!["x", r#"say "hi""#, "y"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        let fields = split_line(r#"a,"b,c"#);
        assert_eq!(fields, vec!["a", "b,c"]);
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(split_line(""), vec![""]);
        assert_eq!(split_line(",,"), vec!["", "", ""]);
    }

    #[test]
    fn test_non_blank_lines_any_line_ending() {
        let text = "a,b\r\nc,d\re,f\n\n  \ng,h";
        let lines: Vec<_> = non_blank_lines(text).collect();
        assert_eq!(lines, vec!["a,b", "c,d", "e,f", "g,h"]);
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(split_fields("a;\"b;c\";d", ';'), vec!["a", "b;c", "d"]);
    }
}
