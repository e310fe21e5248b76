//! Comanda Model
//!
//! Plain, already-materialized order records as the back-office API returns
//! them. References may arrive populated (a full document) or as a bare id,
//! and any field may be missing or malformed; deserialization never fails on
//! those, it degrades to an absent value.
//!
//! # Core Types
//!
//! - [`Comanda`]: the order/delivery ticket
//! - [`LineItem`]: product reference, quantity and unit amount
//! - [`EntityRef`]: populated document or raw id
//! - [`Document`]: id/label access shared by every referenced entity
//!
//! # Example
//!
//! ```rust
//! use comanda_model::Comanda;
//!
//! let json = r#"{"_id":"a1","nrodecomanda":7,"codcli":{"_id":"c1","razonsocial":"Acme"}}"#;
//! let comanda: Comanda = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(comanda.nrodecomanda, Some(7));
//! assert_eq!(comanda.cliente().and_then(|c| c.razonsocial.as_deref()), Some("Acme"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod comanda;
mod entities;
mod lenient;
mod reference;
mod text;

pub use comanda::{Comanda, LineItem};
pub use entities::{Camion, Camionero, Cliente, Estado, Producto, Rubro, Ruta};
pub use reference::{Document, EntityRef};
pub use text::{non_blank, normalize_name};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
