//! The render entry points.
//!
//! Rendering is a single top-down pass: file → namespaces → class-likes
//! and functions → members → parameters. Every entry point returns a
//! self-contained fragment of PHP source.

mod class;
mod file;
mod signature;

use crate::{LiteralSerializer, PhpDumper, PrinterConfig};

/// Renders model subtrees into PHP source text.
///
/// # Example
///
/// ```
/// use phpgen_model::{ClassLike, Method, Parameter, Property};
/// use phpgen_printer::{Printer, Verbatim};
///
/// let class = ClassLike::class("Point")
///     .property(Property::new("x"))
///     .property(Property::new("y"))
///     .method(Method::new("distanceTo").public().param(Parameter::new("other")));
///
/// let code = Printer::default().render_class_like(&class, &Verbatim).unwrap();
/// assert_eq!(
///     code,
///     "class Point\n{\n\tpublic $x;\n\tpublic $y;\n\n\tpublic function distanceTo($other)\n\t{\n\t}\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Printer<L = PhpDumper> {
    config: PrinterConfig,
    literals: L,
}

impl Printer<PhpDumper> {
    /// Create a printer using the stock [`PhpDumper`] for literals.
    pub fn new(config: PrinterConfig) -> Self {
        let literals = PhpDumper::new(config.indent);
        Self { config, literals }
    }
}

impl Default for Printer<PhpDumper> {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}

impl<L: LiteralSerializer> Printer<L> {
    /// Create a printer with a custom literal serializer.
    pub fn with_serializer(config: PrinterConfig, literals: L) -> Self {
        Self { config, literals }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Indent every non-empty line of `text` by one level.
    fn indent(&self, text: &str) -> String {
        phpgen_core::indent(text, 1, self.config.indent.as_str())
    }

    /// Body text prepared for a brace block: leading blank lines and
    /// trailing whitespace removed, indented one level.
    fn block_body(&self, body: &str) -> String {
        let body = phpgen_core::trim_leading_blank_lines(body.trim_end());
        if body.is_empty() {
            String::new()
        } else {
            self.indent(&format!("{}\n", body))
        }
    }
}
