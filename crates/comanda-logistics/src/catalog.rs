//! Status workflow configuration
//!
//! Provides [`StatusCatalog`]: the ordered list of status names and the
//! subset treated as one-way gates.

use crate::regression::detect_state_regression;
use comanda_model::{normalize_name, Comanda, Document, Estado};
use serde::{Deserialize, Serialize};

/// Ordered workflow statuses and the restricted subset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCatalog {
    /// Status names, earliest first
    pub order: Vec<String>,
    /// Statuses a batch operation must not move a comanda back from
    pub restricted: Vec<String>,
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self {
            order: [
                "Pendiente",
                "En preparación",
                "Preparada",
                "Controlada",
                "En distribución",
                "Entregada",
            ]
            .map(String::from)
            .to_vec(),
            restricted: ["En distribución", "Entregada"].map(String::from).to_vec(),
        }
    }
}

impl StatusCatalog {
    /// Create default catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom workflow order
    #[must_use]
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// With a custom restricted set
    #[must_use]
    pub fn with_restricted<I, S>(mut self, restricted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted = restricted.into_iter().map(Into::into).collect();
        self
    }

    /// 1-based position of `name` in the workflow
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<i64> {
        let wanted = normalize_name(name);
        self.order
            .iter()
            .position(|candidate| normalize_name(candidate) == wanted)
            .and_then(|index| i64::try_from(index + 1).ok())
    }

    /// Catalog position of `estado`, looked up by name
    #[must_use]
    pub fn position_rank(&self, estado: &Estado) -> Option<i64> {
        estado.label().and_then(|name| self.position_of(name))
    }

    /// Whether `name` is a one-way gate
    #[must_use]
    pub fn is_restricted(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        self.restricted
            .iter()
            .any(|candidate| normalize_name(candidate) == wanted)
    }

    /// [`detect_state_regression`] with this catalog's ranks and gates
    ///
    /// `next_status` is first completed from the records: a bare id picks up
    /// the `orden` and name of the matching populated status. When the next
    /// status then has an `orden`, every status is ranked by `orden`;
    /// otherwise every status is ranked by its catalog position, so both
    /// sides of the comparison always share one scale.
    #[must_use]
    pub fn detect_regression(&self, records: &[Comanda], next_status: &Estado) -> bool {
        let next = complete_from_records(records, next_status);
        if next.orden.is_some() {
            detect_state_regression(
                records,
                &next,
                |estado| estado.orden,
                &self.restricted,
                normalize_name,
            )
        } else {
            detect_state_regression(
                records,
                &next,
                |estado| self.position_rank(estado),
                &self.restricted,
                normalize_name,
            )
        }
    }
}

/// Fill a missing `orden` or name from a populated status with the same id
fn complete_from_records(records: &[Comanda], next: &Estado) -> Estado {
    let mut next = next.clone();
    let Some(id) = next.id().map(str::to_string) else {
        return next;
    };
    for known in records
        .iter()
        .filter_map(Comanda::estado)
        .filter(|estado| estado.id() == Some(id.as_str()))
    {
        if next.orden.is_none() {
            next.orden = known.orden;
        }
        if next.label().is_none() {
            next.estado.clone_from(&known.estado);
        }
    }
    next
}
