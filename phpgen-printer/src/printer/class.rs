//! Classes, interfaces and traits.

use phpgen_model::{ClassLike, Constant, Property, TraitUse};

use super::Printer;
use crate::{
    LiteralSerializer, NameResolver, Result,
    layout::{DocStyle, doc_comment},
};

impl<L: LiteralSerializer> Printer<L> {
    /// Render a class, interface or trait declaration.
    ///
    /// Members are grouped in a fixed order: trait uses, constants,
    /// properties, methods. Non-empty groups are separated by one blank
    /// line; methods are separated by the configured number of blank lines.
    ///
    /// A named declaration ends with a newline. An anonymous one starts
    /// with its `extends`/`implements` clauses and ends at the closing brace.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %class.name, kind = %class.kind))]
    pub fn render_class_like(&self, class: &ClassLike, resolver: &dyn NameResolver) -> Result<String> {
        let traits: Vec<String> = class
            .traits
            .iter()
            .map(|t| self.render_trait_use(t, resolver))
            .collect();

        let constants = class
            .constants
            .iter()
            .map(|c| self.render_constant(c))
            .collect::<Result<Vec<_>>>()?;

        let properties = class
            .properties
            .iter()
            .map(|p| self.render_property(p))
            .collect::<Result<Vec<_>>>()?;

        let methods = class
            .methods
            .iter()
            .map(|m| self.render_method(m, resolver))
            .collect::<Result<Vec<_>>>()?;

        let sections: Vec<String> = [
            traits.join("\n"),
            constants.join("\n"),
            properties.join("\n"),
            methods.join(&self.config.method_separator()),
        ]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect();

        let mut body = sections.join("\n\n");
        if !body.is_empty() {
            body.push('\n');
        }

        let mut out = doc_comment(class.comment.as_deref(), DocStyle::Block);
        if class.is_abstract {
            out.push_str("abstract ");
        }
        if class.is_final {
            out.push_str("final ");
        }
        if !class.is_anonymous() {
            out.push_str(&format!("{} {} ", class.kind, class.name));
        }
        if !class.extends.is_empty() {
            out.push_str(&format!("extends {} ", resolve_all(&class.extends, resolver)));
        }
        if !class.implements.is_empty() {
            out.push_str(&format!(
                "implements {} ",
                resolve_all(&class.implements, resolver)
            ));
        }
        if !class.is_anonymous() {
            out.push('\n');
        }
        out.push_str("{\n");
        out.push_str(&self.indent(&body));
        out.push('}');

        let normalized = phpgen_core::normalize(&out);
        if class.is_anonymous() {
            Ok(normalized.trim_end_matches('\n').to_string())
        } else {
            Ok(normalized)
        }
    }

    fn render_trait_use(&self, trait_use: &TraitUse, resolver: &dyn NameResolver) -> String {
        let name = resolver.resolve(&trait_use.name);
        if trait_use.resolutions.is_empty() {
            return format!("use {};", name);
        }

        let clauses: Vec<String> = trait_use
            .resolutions
            .iter()
            .map(|clause| format!("{};\n", clause))
            .collect();
        format!("use {} {{\n{}}}", name, self.indent(&clauses.concat()))
    }

    fn render_constant(&self, constant: &Constant) -> Result<String> {
        let mut out = doc_comment(constant.comment.as_deref(), DocStyle::Compact);
        if let Some(vis) = constant.visibility {
            out.push_str(vis.as_str());
            out.push(' ');
        }
        out.push_str(&format!(
            "const {} = {};",
            constant.name,
            self.literals.serialize(&constant.value)?
        ));
        Ok(out)
    }

    fn render_property(&self, property: &Property) -> Result<String> {
        let mut out = doc_comment(property.comment.as_deref(), DocStyle::Compact);
        out.push_str(property.visibility.map_or("public", |v| v.as_str()));
        if property.is_static {
            out.push_str(" static");
        }
        out.push_str(" $");
        out.push_str(&property.name);
        if let Some(value) = &property.value {
            out.push_str(" = ");
            out.push_str(&self.literals.serialize(value)?);
        }
        out.push(';');
        Ok(out)
    }
}

fn resolve_all(names: &[String], resolver: &dyn NameResolver) -> String {
    names
        .iter()
        .map(|name| resolver.resolve(name))
        .collect::<Vec<_>>()
        .join(", ")
}
