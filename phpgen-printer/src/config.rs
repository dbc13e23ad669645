//! Printer configuration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

const SPACES: &str = "        ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    #[default]
    Tab,
}

impl Indent {
    /// PSR-12 style 4-space indentation.
    pub const PSR: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Out-of-range widths fall back to 4 spaces
            Self::Spaces(n @ 1..=8) => &SPACES[..usize::from(*n)],
            Self::Spaces(_) => &SPACES[..4],
            Self::Tab => "\t",
        }
    }

    /// Visual width of one level, counting a tab as 4 columns.
    pub fn width(&self) -> usize {
        match self {
            Self::Tab => 4,
            _ => self.as_str().len(),
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => f.write_str("tab"),
            Self::Spaces(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Indent {
    type Err = String;

    /// Parse `tab` or a number of spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("tab") {
            return Ok(Self::Tab);
        }
        match s.parse::<u8>() {
            Ok(n @ 1..=8) => Ok(Self::Spaces(n)),
            _ => Err(format!(
                "invalid indent '{}': expected 'tab' or a width from 1 to 8",
                s
            )),
        }
    }
}

/// Layout settings shared by every render call of a [`Printer`].
///
/// [`Printer`]: crate::Printer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// One level of indentation.
    pub indent: Indent,
    /// Blank lines between consecutive methods of a class-like.
    pub lines_between_methods: usize,
}

impl PrinterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn lines_between_methods(mut self, lines: usize) -> Self {
        self.lines_between_methods = lines;
        self
    }

    /// Separator placed between rendered methods.
    pub(crate) fn method_separator(&self) -> String {
        "\n".repeat(self.lines_between_methods + 1)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            lines_between_methods: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(0).as_str(), "    ");
        assert_eq!(Indent::Spaces(12).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(Indent::Tab.width(), 4);
        assert_eq!(Indent::Spaces(2).width(), 2);
    }

    #[test]
    fn test_indent_from_str() {
        assert_eq!("tab".parse::<Indent>(), Ok(Indent::Tab));
        assert_eq!("TAB".parse::<Indent>(), Ok(Indent::Tab));
        assert_eq!("2".parse::<Indent>(), Ok(Indent::Spaces(2)));
        assert!("0".parse::<Indent>().is_err());
        assert!("wide".parse::<Indent>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = PrinterConfig::default();
        assert_eq!(config.indent, Indent::Tab);
        assert_eq!(config.lines_between_methods, 1);
        assert_eq!(config.method_separator(), "\n\n");
    }

    #[test]
    fn test_config_from_toml() {
        let config: PrinterConfig = toml::from_str("indent = { spaces = 4 }").unwrap();
        assert_eq!(config.indent, Indent::PSR);
        assert_eq!(config.lines_between_methods, 1);

        let config: PrinterConfig =
            toml::from_str("indent = \"tab\"\nlines_between_methods = 2").unwrap();
        assert_eq!(config.indent, Indent::Tab);
        assert_eq!(config.method_separator(), "\n\n\n");
    }
}
