//! Layout helpers: the wrap decision and doc comment formatting.

/// Maximum length of a comma-separated list kept on a single line.
pub const WRAP_LENGTH: usize = 70;

/// Returns true when a list whose single-line form is `len` bytes
/// long and holds `count` items must be split one item per line.
pub fn should_wrap(len: usize, count: usize) -> bool {
    len > WRAP_LENGTH && count > 1
}

/// A comma-separated list laid out for a pair of delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout {
    /// Text placed between the delimiters.
    pub inner: String,
    /// Whether the items were split one per line.
    pub wrapped: bool,
}

/// Lay out `items` for placement between delimiters such as `(` and `)`.
///
/// Short lists are joined with `, `. Long lists put every item on its own
/// line indented by `indent`, and leave the delimiters on lines of their
/// own. The last item never gets a trailing comma.
pub fn layout_list(items: &[String], indent: &str) -> ListLayout {
    let single = items.join(", ");
    if should_wrap(single.len(), items.len()) {
        let separator = format!(",\n{}", indent);
        ListLayout {
            inner: format!("\n{}{}\n", indent, items.join(&separator)),
            wrapped: true,
        }
    } else {
        ListLayout {
            inner: single,
            wrapped: false,
        }
    }
}

/// How a doc comment is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocStyle {
    /// Always a multi-line `/** ... */` block (classes, functions, files).
    Block,
    /// `/** text */` on one line when the text has a single line
    /// (constants, properties).
    Compact,
}

/// Format `text` as a doc comment followed by a newline.
///
/// Absent or blank text renders as an empty string.
pub fn doc_comment(text: Option<&str>, style: DocStyle) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if style == DocStyle::Compact && !trimmed.contains('\n') {
        return format!("/** {} */\n", trimmed);
    }

    let mut out = String::from("/**\n");
    for line in trimmed.lines() {
        if line.trim().is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(" */\n");
    out
}
