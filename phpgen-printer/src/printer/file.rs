//! Namespaces and whole files.

use phpgen_model::{Namespace, PhpFile, extract_namespace};

use super::Printer;
use crate::{
    LiteralSerializer, Result,
    layout::{DocStyle, doc_comment},
};

impl<L: LiteralSerializer> Printer<L> {
    /// Render a namespace with its imports, classes and functions.
    ///
    /// Names inside the namespace are resolved against its own import
    /// table. Imports of names living directly in this namespace are
    /// omitted.
    #[tracing::instrument(level = "debug", skip_all, fields(namespace = %namespace.name))]
    pub fn render_namespace(&self, namespace: &Namespace) -> Result<String> {
        let uses: Vec<String> = namespace
            .uses
            .iter()
            .filter(|(_, original)| extract_namespace(original) != namespace.name)
            .map(|(alias, original)| render_use(alias, original))
            .collect();

        let mut declarations = Vec::with_capacity(namespace.classes.len() + namespace.functions.len());
        for class in &namespace.classes {
            declarations.push(self.render_class_like(class, namespace)?);
        }
        for function in &namespace.functions {
            declarations.push(format!("{}\n", self.render_function(function, namespace)?));
        }

        let mut body = String::new();
        if !uses.is_empty() {
            body.push_str(&uses.join("\n"));
            body.push_str("\n\n");
        }
        body.push_str(&declarations.join("\n"));

        tracing::debug!(
            uses = uses.len(),
            declarations = declarations.len(),
            "rendered namespace"
        );

        if namespace.bracketed {
            let keyword = if namespace.is_global() {
                "namespace".to_string()
            } else {
                format!("namespace {}", namespace.name)
            };
            let inner = body.trim_end_matches('\n');
            if inner.is_empty() {
                return Ok(format!("{} {{\n}}\n", keyword));
            }
            return Ok(format!("{} {{\n{}\n}}\n", keyword, self.indent(inner)));
        }

        if namespace.is_global() {
            Ok(body)
        } else {
            Ok(format!("namespace {};\n\n{}", namespace.name, body))
        }
    }

    /// Render a complete PHP file.
    ///
    /// The output starts with `<?php`, ends with exactly one newline and
    /// uses `\n` line endings throughout.
    #[tracing::instrument(level = "debug", skip_all, fields(namespaces = file.namespaces.len()))]
    pub fn render_file(&self, file: &PhpFile) -> Result<String> {
        let mut out = String::from("<?php\n\n");
        let comment = doc_comment(file.comment.as_deref(), DocStyle::Block);
        if !comment.is_empty() {
            out.push_str(&comment);
            out.push('\n');
        }

        let namespaces = file
            .namespaces
            .iter()
            .map(|ns| {
                self.render_namespace(ns)
                    .map(|code| code.trim_end_matches('\n').to_string())
            })
            .collect::<Result<Vec<_>>>()?;
        out.push_str(&namespaces.join("\n\n"));

        Ok(phpgen_core::normalize(&out))
    }
}

/// `use X;` when the alias is the natural one, `use X as A;` otherwise.
fn render_use(alias: &str, original: &str) -> String {
    let natural = alias == original || original.ends_with(&format!("\\{}", alias));
    if natural {
        format!("use {};", original)
    } else {
        format!("use {} as {};", original, alias)
    }
}
