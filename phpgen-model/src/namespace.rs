//! Namespaces and their import tables.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{ClassLike, Function};

/// A namespace block.
///
/// An empty `name` is the global namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespace {
    #[serde(deserialize_with = "trimmed_name")]
    pub name: String,
    /// Imports, keyed by alias, mapping to fully qualified names.
    #[serde(deserialize_with = "trimmed_uses")]
    pub uses: IndexMap<String, String>,
    pub classes: Vec<ClassLike>,
    pub functions: Vec<Function>,
    /// Use `namespace Name { ... }` instead of `namespace Name;`.
    pub bracketed: bool,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim_matches('\\').to_string(),
            ..Self::default()
        }
    }

    /// The global (unnamed) namespace.
    pub fn global() -> Self {
        Self::default()
    }

    /// Import a name under its natural alias (its last segment).
    pub fn add_use(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let alias = extract_short_name(name.trim_start_matches('\\')).to_string();
        self.add_use_as(name, alias)
    }

    /// Import a name under an explicit alias.
    pub fn add_use_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        let name = name.into().trim_start_matches('\\').to_string();
        self.uses.insert(alias.into(), name);
        self
    }

    pub fn add_class(mut self, class: ClassLike) -> Self {
        self.classes.push(class);
        self
    }

    pub fn add_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    pub fn bracketed(mut self) -> Self {
        self.bracketed = true;
        self
    }

    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }

    /// Look up a class-like by name.
    pub fn get_class(&self, name: &str) -> Option<&ClassLike> {
        self.classes.iter().find(|c| c.name == name)
    }
}

fn trimmed_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(name.trim_matches('\\').to_string())
}

/// Imported names are stored without their leading `\`.
fn trimmed_uses<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let uses = IndexMap::<String, String>::deserialize(deserializer)?;
    Ok(uses
        .into_iter()
        .map(|(alias, name)| (alias, name.trim_start_matches('\\').to_string()))
        .collect())
}

/// The namespace part of a qualified name (`A\B\C` → `A\B`).
pub fn extract_namespace(name: &str) -> &str {
    match name.rfind('\\') {
        Some(pos) => &name[..pos],
        None => "",
    }
}

/// The last segment of a qualified name (`A\B\C` → `C`).
pub fn extract_short_name(name: &str) -> &str {
    match name.rfind('\\') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}
