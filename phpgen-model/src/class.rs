//! Classes, interfaces and traits.

use serde::{Deserialize, Serialize};

use crate::{ClassKind, Constant, Method, Property};

/// A `use Trait;` statement inside a class-like body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitUse {
    /// Fully qualified trait name.
    pub name: String,
    /// Conflict resolution clauses, e.g. `A::hello insteadof B` or
    /// `sayHello as protected`. Written without the trailing `;`.
    pub resolutions: Vec<String>,
}

impl TraitUse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolutions: Vec::new(),
        }
    }

    pub fn resolution(mut self, clause: impl Into<String>) -> Self {
        self.resolutions.push(clause.into());
        self
    }
}

/// A class, interface or trait declaration.
///
/// An empty `name` describes the body of an anonymous class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassLike {
    pub name: String,
    pub kind: ClassKind,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    /// Parent class, or parent interfaces for an interface.
    pub extends: Vec<String>,
    pub implements: Vec<String>,
    pub traits: Vec<TraitUse>,
    pub constants: Vec<Constant>,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ClassLike {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Interface)
    }

    pub fn trait_(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Trait)
    }

    /// Body of an anonymous class (`new class(...) { ... }`).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends.push(name.into());
        self
    }

    pub fn implements(mut self, name: impl Into<String>) -> Self {
        self.implements.push(name.into());
        self
    }

    pub fn trait_use(mut self, trait_use: TraitUse) -> Self {
        self.traits.push(trait_use);
        self
    }

    pub fn constant(mut self, constant: Constant) -> Self {
        self.constants.push(constant);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// Look up a method by name.
    pub fn get_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}
