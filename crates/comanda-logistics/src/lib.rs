//! Comanda Logistics
//!
//! Planning for the dispatch screen's batch operations:
//!
//! - [`build_mass_update_plan`]: per comanda and per field, decide whether a
//!   proposed status, driver, truck or distribution point is written or
//!   skipped, and assemble the payloads to persist
//! - [`detect_state_regression`]: flag batches that would move a comanda back
//!   out of a one-way status
//! - [`StatusCatalog`]: configured workflow order and restricted statuses
//!
//! Everything here is pure and synchronous; persisting a plan is the
//! caller's job.
//!
//! # Example
//!
//! ```rust
//! use comanda_logistics::{build_mass_update_plan, Choice, MassUpdateSelections};
//! use comanda_model::{Camionero, Comanda};
//!
//! let records = vec![
//!     Comanda::new("a").with_camionero(Camionero::new("driver-1", "Juan")),
//!     Comanda::new("b"),
//! ];
//! let selections = MassUpdateSelections::new().with_camionero(Choice::new("driver-2", "Pedro"));
//! let plan = build_mass_update_plan(&records, &selections);
//!
//! assert!(plan.comandas[0].payload.camionero.is_none());
//! assert_eq!(plan.summary.camionero.skip_already_assigned_count, 1);
//! assert!(plan.has_changes);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod plan;
mod planner;
mod regression;
mod selection;

pub use catalog::StatusCatalog;
pub use plan::{
    Field, FieldAction, FieldState, FieldSummary, MassUpdatePlan, Payload, PlanEntry, PlanSummary,
    SkipReason,
};
pub use planner::build_mass_update_plan;
pub use regression::detect_state_regression;
pub use selection::{Choice, MassUpdateSelections, SelectionParseError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
