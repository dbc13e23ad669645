//! Functions, closures and methods.

use phpgen_model::{Closure, Function, Method, Signature};

use super::Printer;
use crate::{
    LiteralSerializer, NameResolver, Result, Verbatim,
    layout::{DocStyle, ListLayout, doc_comment, layout_list},
};

impl<L: LiteralSerializer> Printer<L> {
    /// Render a global function.
    ///
    /// The opening brace stays on the signature line.
    pub fn render_function(&self, function: &Function, resolver: &dyn NameResolver) -> Result<String> {
        let sig = &function.signature;
        let params = self.render_parameters(sig, resolver)?;

        let mut out = doc_comment(function.comment.as_deref(), DocStyle::Block);
        out.push_str("function ");
        if sig.return_reference {
            out.push('&');
        }
        out.push_str(&function.name);
        out.push_str(&parenthesized(&params));
        out.push_str(&render_return_type(sig, resolver));
        out.push_str(" {\n");
        out.push_str(&self.block_body(&function.body));
        out.push('}');
        Ok(out)
    }

    /// Render a closure expression.
    ///
    /// Type names are printed as written; a closure has no namespace
    /// context of its own.
    pub fn render_closure(&self, closure: &Closure) -> Result<String> {
        let sig = &closure.signature;
        let params = self.render_parameters(sig, &Verbatim)?;

        let mut out = String::from("function ");
        if sig.return_reference {
            out.push('&');
        }
        out.push_str(&parenthesized(&params));

        if !closure.uses.is_empty() {
            let vars: Vec<String> = closure
                .uses
                .iter()
                .map(|var| {
                    let amp = if var.by_reference { "&" } else { "" };
                    format!("{}${}", amp, var.name)
                })
                .collect();
            let uses = layout_list(&vars, self.config.indent.as_str());
            out.push_str(&format!(" use ({})", uses.inner));
        }

        out.push_str(&render_return_type(sig, &Verbatim));
        out.push_str(" {\n");
        out.push_str(&self.block_body(&closure.body));
        out.push('}');
        Ok(out)
    }

    /// Render a method declaration.
    ///
    /// Modifiers come in the order `abstract final <visibility> static`.
    /// Abstract and bodyless methods end with `;`. Otherwise the brace
    /// block opens on its own line, unless the parameter list spans
    /// several lines, in which case it follows the closing parenthesis.
    pub fn render_method(&self, method: &Method, resolver: &dyn NameResolver) -> Result<String> {
        let sig = &method.signature;
        let params = self.render_parameters(sig, resolver)?;

        let mut out = doc_comment(method.comment.as_deref(), DocStyle::Block);
        if method.is_abstract {
            out.push_str("abstract ");
        }
        if method.is_final {
            out.push_str("final ");
        }
        if let Some(vis) = method.visibility {
            out.push_str(vis.as_str());
            out.push(' ');
        }
        if method.is_static {
            out.push_str("static ");
        }
        out.push_str("function ");
        if sig.return_reference {
            out.push('&');
        }
        out.push_str(&method.name);
        out.push_str(&parenthesized(&params));
        out.push_str(&render_return_type(sig, resolver));

        match method.body.as_deref() {
            Some(body) if !method.is_abstract => {
                out.push_str(if params.inner.contains('\n') { " " } else { "\n" });
                out.push_str("{\n");
                out.push_str(&self.block_body(body));
                out.push('}');
            }
            _ => out.push(';'),
        }
        Ok(out)
    }

    /// Lay out the parameter list, wrapping it when it is too long.
    fn render_parameters(&self, sig: &Signature, resolver: &dyn NameResolver) -> Result<ListLayout> {
        let mut items = Vec::with_capacity(sig.parameters.len());
        for (index, param) in sig.parameters.iter().enumerate() {
            let variadic = sig.is_variadic_at(index);
            let mut item = String::new();

            if let Some(hint) = param.type_hint.as_deref() {
                if param.nullable {
                    item.push('?');
                }
                item.push_str(&resolver.resolve(hint));
                item.push(' ');
            }
            if param.by_reference {
                item.push('&');
            }
            if variadic {
                item.push_str("...");
            }
            item.push('$');
            item.push_str(&param.name);

            // A variadic parameter never takes a default.
            if let Some(default) = param.default.as_ref().filter(|_| !variadic) {
                item.push_str(" = ");
                item.push_str(&self.literals.serialize(default)?);
            }
            items.push(item);
        }

        tracing::trace!(count = items.len(), "rendered parameters");
        Ok(layout_list(&items, self.config.indent.as_str()))
    }
}

fn parenthesized(params: &ListLayout) -> String {
    format!("({})", params.inner)
}

fn render_return_type(sig: &Signature, resolver: &dyn NameResolver) -> String {
    match sig.return_type.as_deref() {
        Some(ty) => {
            let nullable = if sig.return_nullable { "?" } else { "" };
            format!(": {}{}", nullable, resolver.resolve(ty))
        }
        None => String::new(),
    }
}
