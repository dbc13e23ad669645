//! Structural model of a PHP source file.
//!
//! These types are the read-only input of `phpgen-printer`. They describe
//! declarations (namespaces, class-likes, functions, members) and carry no
//! formatting decisions of their own.
//!
//! # Architecture
//!
//! ```text
//! builder API / model.toml → phpgen-model (declarations) → phpgen-printer → PHP text
//! ```
//!
//! A model is a plain tree rooted at [`PhpFile`]. Nothing here validates
//! modifier combinations; a well-formed model is the caller's concern.

mod callable;
mod class;
mod document;
mod error;
mod member;
mod namespace;
mod types;
mod value;

pub use callable::{Closure, ClosureUse, Function, Method, Signature};
pub use class::{ClassLike, TraitUse};
pub use document::PhpFile;
pub use error::{Error, Result};
pub use member::{Constant, Parameter, Property};
pub use namespace::{Namespace, extract_namespace, extract_short_name};
pub use types::{ClassKind, Visibility};
pub use value::Value;
