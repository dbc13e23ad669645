//! Functions, methods and closures.

use serde::{Deserialize, Serialize};

use crate::{Parameter, Visibility};

/// The part of a callable declaration shared by functions, methods and
/// closures: parameters and return type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    #[serde(rename = "params")]
    pub parameters: Vec<Parameter>,
    /// The last parameter collects remaining arguments (`...$rest`).
    pub variadic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Prefix the return type with `?`.
    pub return_nullable: bool,
    /// Return by reference (`function &name()`).
    pub return_reference: bool,
}

impl Signature {
    /// Returns true if `index` is the variadic parameter.
    pub fn is_variadic_at(&self, index: usize) -> bool {
        self.variadic && index + 1 == self.parameters.len()
    }
}

/// Generates the fluent setters every callable shares.
macro_rules! signature_builders {
    ($ty:ty) => {
        impl $ty {
            /// Append a parameter.
            pub fn param(mut self, param: Parameter) -> Self {
                self.signature.parameters.push(param);
                self
            }

            /// Append several parameters.
            pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
                self.signature.parameters.extend(params);
                self
            }

            /// Mark the last parameter as variadic.
            pub fn variadic(mut self) -> Self {
                self.signature.variadic = true;
                self
            }

            /// Declare the return type.
            pub fn returns(mut self, ty: impl Into<String>) -> Self {
                self.signature.return_type = Some(ty.into());
                self
            }

            /// Make the declared return type nullable.
            pub fn returns_nullable(mut self) -> Self {
                self.signature.return_nullable = true;
                self
            }

            /// Return by reference.
            pub fn returns_reference(mut self) -> Self {
                self.signature.return_reference = true;
                self
            }

            /// Borrow the shared signature.
            pub fn signature(&self) -> &Signature {
                &self.signature
            }
        }
    };
}

/// A global function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Function {
    pub name: String,
    #[serde(flatten)]
    pub signature: Signature,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }
}

signature_builders!(Function);

/// A class, interface or trait method.
///
/// `body: None` renders a signature terminated by `;`, which is what
/// interface members and abstract methods look like.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Method {
    pub name: String,
    #[serde(flatten)]
    pub signature: Signature,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Method {
    /// Create a method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Drop the body so only the signature is rendered.
    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = Some(vis);
        self
    }

    pub fn public(self) -> Self {
        self.visibility(Visibility::Public)
    }

    pub fn protected(self) -> Self {
        self.visibility(Visibility::Protected)
    }

    pub fn private(self) -> Self {
        self.visibility(Visibility::Private)
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    /// Returns true if the rendered method has no brace block.
    pub fn is_signature_only(&self) -> bool {
        self.is_abstract || self.body.is_none()
    }
}

signature_builders!(Method);

/// A variable captured by a closure's `use (...)` clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureUse {
    pub name: String,
    pub by_reference: bool,
}

impl ClosureUse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            by_reference: false,
        }
    }

    pub fn by_reference(mut self) -> Self {
        self.by_reference = true;
        self
    }
}

/// An anonymous function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Closure {
    #[serde(flatten)]
    pub signature: Signature,
    pub body: String,
    pub uses: Vec<ClosureUse>,
}

impl Closure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Capture a variable.
    pub fn uses(mut self, var: ClosureUse) -> Self {
        self.uses.push(var);
        self
    }
}

signature_builders!(Closure);
