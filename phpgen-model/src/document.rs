//! Whole-file model and loading it from model documents.

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Namespace, Result, error::SourceContext};

/// A PHP source file: an optional file comment and its namespaces.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
///
/// use phpgen_model::PhpFile;
///
/// let file = PhpFile::from_str(
///     r#"
///     comment = "Generated file"
///
///     [[namespaces]]
///     name = "App\\Model"
///
///     [[namespaces.classes]]
///     name = "Point"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(file.namespaces[0].classes[0].name, "Point");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhpFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub namespaces: Vec<Namespace>,
}

impl FromStr for PhpFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_toml(s, "model.toml")
    }
}

impl PhpFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    pub fn add_namespace(mut self, namespace: Namespace) -> Self {
        self.namespaces.push(namespace);
        self
    }

    /// Load a model document, choosing the format by extension
    /// (`.json` is JSON, anything else is TOML).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            parse_json(&content, &filename)
        } else {
            parse_toml(&content, &filename)
        }
    }

    /// Parse a JSON model document.
    pub fn from_json(content: &str) -> Result<Self> {
        parse_json(content, "model.json")
    }
}

fn parse_toml(content: &str, filename: &str) -> Result<PhpFile> {
    let ctx = SourceContext::new(content, filename);
    toml::from_str(content).map_err(|e| ctx.toml_error(e))
}

fn parse_json(content: &str, filename: &str) -> Result<PhpFile> {
    let ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| ctx.json_error(e))
}
