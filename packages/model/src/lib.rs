//! # Folio Model
//!
//! The document tree: a single [`Element`] enum whose `Container` variant
//! exclusively owns an ordered list of children. Nodes are addressed by
//! [`NodePath`], the child indices leading to them from the root.

pub mod ast;
pub mod error;
pub mod iter;
pub mod path;

pub use ast::{Decoration, Element};
pub use error::{TreeError, TreeResult};
pub use iter::Descendants;
pub use path::NodePath;
