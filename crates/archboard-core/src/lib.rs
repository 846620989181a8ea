#![forbid(unsafe_code)]

//! Architecture-diagram mini-language parser + semantic model (headless).
//!
//! The mini-language is a small flowchart dialect: node declarations
//! (`ID[Label]`), directed edges (`A --> B`), and nestable `subgraph ... end`
//! blocks that group nodes into named containers. The parser is deliberately
//! lenient: malformed fragments are skipped, never raised, so partial or
//! evolving input still produces a renderable model.
//!
//! Layout and emission live in downstream crates; this crate only produces
//! the flat semantic model (`ParsedGraph`) and the recursive group-membership
//! resolution used to compute container geometry.

pub mod containment;
pub mod error;
pub mod model;
pub mod parser;

pub use containment::resolve_group_leaves;
pub use error::{Error, Result};
pub use model::{Direction, GraphEdge, GraphNode, Group, ParsedGraph};
pub use parser::parse_graph;
