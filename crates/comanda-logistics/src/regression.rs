//! Status-regression guard
//!
//! Some statuses are one-way gates: once a comanda is out for delivery it
//! must not be moved back to an earlier stage by a batch operation.

use comanda_model::{Comanda, Document, Estado};
use std::collections::HashSet;

/// Whether moving `records` to `next_status` sends any of them backward
///
/// A comanda regresses when its current status has a normalized name in
/// `restricted_names` and a rank strictly greater than the next status's
/// rank. Statuses whose rank cannot be resolved never regress, nor do
/// unpopulated status references (their name is unknown). A next status
/// without a rank is logged as a warning and never regresses.
#[must_use]
pub fn detect_state_regression<R, N, S>(
    records: &[Comanda],
    next_status: &Estado,
    resolve_rank: R,
    restricted_names: &[S],
    normalize_name: N,
) -> bool
where
    R: Fn(&Estado) -> Option<i64>,
    N: Fn(&str) -> String,
    S: AsRef<str>,
{
    let Some(next_rank) = resolve_rank(next_status) else {
        tracing::warn!(
            estado = next_status.label().or_else(|| next_status.id()),
            "next status has no rank, regression check skipped"
        );
        return false;
    };
    let restricted: HashSet<String> = restricted_names
        .iter()
        .map(|name| normalize_name(name.as_ref()))
        .collect();
    if restricted.is_empty() {
        return false;
    }

    records.iter().any(|comanda| {
        let Some(current) = comanda.estado() else {
            return false;
        };
        let Some(name) = current.label() else {
            return false;
        };
        if !restricted.contains(&normalize_name(name)) {
            return false;
        }
        let regresses = resolve_rank(current).is_some_and(|rank| rank > next_rank);
        if regresses {
            tracing::debug!(comanda = comanda.id_str(), estado = name, "status regression");
        }
        regresses
    })
}
