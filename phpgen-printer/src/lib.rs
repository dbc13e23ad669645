//! Renders the phpgen structural model into formatted PHP source.
//!
//! The entry point is [`Printer`], which turns a read-only model subtree
//! into text. It relies on two capabilities passed in from outside:
//!
//! - [`LiteralSerializer`] - turns values into PHP literal syntax
//!   ([`PhpDumper`] is the default)
//! - [`NameResolver`] - shortens class names against an import table
//!   (implemented for [`phpgen_model::Namespace`]; [`Verbatim`] leaves
//!   names untouched)
//!
//! # Module Organization
//!
//! - [`config`] - Printer configuration ([`PrinterConfig`], [`Indent`])
//! - [`layout`] - Wrap decision and doc comment formatting
//! - [`literal`] - Literal serialization
//! - [`resolve`] - Name resolution

pub mod config;
mod error;
pub mod layout;
pub mod literal;
mod printer;
pub mod resolve;

pub use config::{Indent, PrinterConfig};
pub use error::{Error, Result};
pub use literal::{LiteralSerializer, PhpDumper};
pub use printer::Printer;
pub use resolve::{NameResolver, Verbatim};
