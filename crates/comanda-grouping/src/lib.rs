//! Comanda Grouping
//!
//! Buckets a flat list of comandas into a tree, one level per grouping
//! dimension, with per-node record counts and summed quantities.
//!
//! # Core Concepts
//!
//! - [`Dimension`]: the fixed allow-list of grouping axes
//! - [`build_groups`]: raw dimension names in, sorted [`GroupNode`] tree out
//! - [`flatten_groups`]: pre-order [`GroupRow`]s for table rendering
//!
//! # Example
//!
//! ```rust
//! use comanda_grouping::build_groups;
//! use comanda_model::{Cliente, Comanda};
//!
//! let records = vec![Comanda::new("a").with_numero(1).with_cliente(Cliente::new("c1", "Acme"))];
//! let groups = build_groups(&records, &["cliente"]);
//!
//! assert_eq!(groups[0].label, "Acme");
//! assert_eq!(groups[0].count, 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod dimension;
mod resolve;
mod tree;

pub use dimension::{normalize_dimensions, Dimension, UnknownDimension};
pub use resolve::{ResolvedKey, PLACEHOLDER_KEY, PLACEHOLDER_LABEL};
pub use tree::{build_groups, flatten_groups, group_by, GroupNode, GroupRow};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
