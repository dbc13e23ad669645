//! Name resolution against a namespace's import table.

use phpgen_model::Namespace;

/// Type names that are never qualified.
const KEYWORDS: &[&str] = &[
    "string", "int", "float", "bool", "array", "object", "callable", "iterable", "void",
    "self", "parent", "static", "mixed", "null", "false", "true", "never",
];

/// Capability that rewrites a fully qualified name into the shortest form
/// valid at the place it is printed.
pub trait NameResolver {
    fn resolve(&self, name: &str) -> String;
}

/// Leaves every name exactly as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbatim;

impl NameResolver for Verbatim {
    fn resolve(&self, name: &str) -> String {
        name.to_string()
    }
}

impl<T: NameResolver + ?Sized> NameResolver for &T {
    fn resolve(&self, name: &str) -> String {
        (**self).resolve(name)
    }
}

/// Resolution inside a namespace:
///
/// 1. keywords and empty names are returned unchanged
/// 2. the shortest form through a matching import alias wins
/// 3. names inside the current namespace become relative
/// 4. anything else is fully qualified with a leading `\`
///    (unless the namespace is the global one)
///
/// Matching is ASCII case-insensitive, like PHP class lookup.
impl NameResolver for Namespace {
    fn resolve(&self, name: &str) -> String {
        if name.is_empty() || is_keyword(name) {
            return name.to_string();
        }

        let name = name.trim_start_matches('\\');
        let lower = format!("{}\\", name.to_ascii_lowercase());

        let mut best: Option<String> = None;
        for (alias, original) in &self.uses {
            let prefix = format!("{}\\", original.to_ascii_lowercase());
            if lower.starts_with(&prefix) {
                let short = format!("{}{}", alias, &name[original.len()..]);
                if best.as_ref().is_none_or(|b| b.len() > short.len()) {
                    best = Some(short);
                }
            }
        }
        if let Some(short) = best {
            return short;
        }

        if !self.name.is_empty() {
            let own = format!("{}\\", self.name.to_ascii_lowercase());
            if lower.len() > own.len() && lower.starts_with(&own) {
                return name[self.name.len() + 1..].to_string();
            }
            return format!("\\{}", name);
        }
        name.to_string()
    }
}

fn is_keyword(name: &str) -> bool {
    KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(name))
}
