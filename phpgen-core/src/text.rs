//! Text normalization and reindentation.

/// Normalize generated source text.
///
/// - `\r\n` and lone `\r` become `\n`
/// - control characters other than `\t` and `\n` are dropped
/// - trailing spaces and tabs are stripped from every line
/// - leading and trailing blank lines are removed
///
/// Non-empty output always ends with exactly one `\n`. Applying the
/// function twice yields the same text as applying it once.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let cleaned: String = unified
        .chars()
        .filter(|c| !c.is_control() || *c == '\t' || *c == '\n')
        .collect();

    let joined = cleaned
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = joined.trim_matches('\n');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}\n", trimmed)
    }
}

/// Prefix every non-empty line of `text` with `levels` copies of `unit`.
///
/// Lines that consist only of a line break are left untouched so blank
/// lines never pick up trailing whitespace.
pub fn indent(text: &str, levels: usize, unit: &str) -> String {
    if levels == 0 || unit.is_empty() {
        return text.to_string();
    }

    let prefix = unit.repeat(levels);
    let mut out = String::with_capacity(text.len() + prefix.len() * 8);
    for line in text.split_inclusive('\n') {
        if line != "\n" && line != "\r\n" {
            out.push_str(&prefix);
        }
        out.push_str(line);
    }
    out
}

/// Drop whitespace-only lines from the start of `text`.
///
/// The first line with content keeps its own indentation.
pub fn trim_leading_blank_lines(text: &str) -> &str {
    let mut rest = text;
    while let Some(pos) = rest.find('\n') {
        if rest[..pos].trim().is_empty() {
            rest = &rest[pos + 1..];
        } else {
            break;
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize("a\r\nb\rc"), "a\nb\nc\n");
    }

    #[test]
    fn test_normalize_trailing_whitespace() {
        assert_eq!(normalize("class A \n{\t\n}"), "class A\n{\n}\n");
    }

    #[test]
    fn test_normalize_surrounding_blank_lines() {
        assert_eq!(normalize("\n\n  \nfoo\n\n\n"), "foo\n");
    }

    #[test]
    fn test_normalize_keeps_inner_blank_lines() {
        assert_eq!(normalize("a\n\n\nb"), "a\n\n\nb\n");
    }

    #[test]
    fn test_normalize_drops_control_characters() {
        assert_eq!(normalize("a\u{0}b\u{7f}c\td"), "abc\td\n");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n \n\t\n"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "x",
            "  a  \r\n\r\n\tb\t\n\n",
            "\u{1b}[0m text \n\n\n",
            "<?php\n\nnamespace A;\n\n\nclass B\n{\n}\n\n\n",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_indent_skips_empty_lines() {
        assert_eq!(indent("a\n\nb\n", 1, "\t"), "\ta\n\n\tb\n");
    }

    #[test]
    fn test_indent_multiple_levels() {
        assert_eq!(indent("x", 2, "  "), "    x");
    }

    #[test]
    fn test_indent_zero_levels() {
        assert_eq!(indent("x\ny", 0, "\t"), "x\ny");
    }

    #[test]
    fn test_indent_whitespace_only_line() {
        assert_eq!(indent("  \nx", 1, "\t"), "\t  \n\tx");
    }

    #[test]
    fn test_trim_leading_blank_lines() {
        assert_eq!(trim_leading_blank_lines("\n  \n\treturn 1;\n"), "\treturn 1;\n");
        assert_eq!(trim_leading_blank_lines("return;"), "return;");
        assert_eq!(trim_leading_blank_lines("\n\n"), "");
    }
}
