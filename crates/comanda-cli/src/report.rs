//! Text and JSON rendering of command results

use comanda_grouping::{flatten_groups, GroupNode};
use comanda_logistics::{Field, FieldAction, MassUpdatePlan};
use serde::Serialize;
use std::fmt::Write;

/// Indented tree, one group per line
#[must_use]
pub fn render_groups(groups: &[GroupNode<'_>]) -> String {
    let mut out = String::new();
    for row in flatten_groups(groups) {
        let _ = writeln!(
            out,
            "{}{} ({} comandas, cantidad {})",
            "  ".repeat(row.depth),
            row.label,
            row.count,
            row.cantidad_total
        );
    }
    if out.is_empty() {
        out.push_str("sin grupos\n");
    }
    out
}

/// Summary lines followed by one line per comanda with changes
#[must_use]
pub fn render_plan(plan: &MassUpdatePlan, regression: bool) -> String {
    let mut out = String::new();
    for line in plan.summary_lines() {
        let _ = writeln!(out, "{line}");
    }
    if !plan.has_changes {
        out.push_str("sin cambios\n");
        return out;
    }
    for entry in plan.comandas.iter().filter(|e| !e.payload.is_empty()) {
        let numero = entry
            .nrodecomanda
            .map_or_else(|| entry.id.clone(), |n| format!("#{n}"));
        let changes: Vec<String> = Field::ALL
            .into_iter()
            .filter(|field| entry.field(*field).action == FieldAction::Update)
            .map(|field| {
                let state = entry.field(field);
                format!(
                    "{}: {} → {}",
                    field.label(),
                    state.current.as_deref().unwrap_or("—"),
                    state.next.as_deref().unwrap_or("—")
                )
            })
            .collect();
        let _ = writeln!(out, "{numero}: {}", changes.join("; "));
    }
    if regression {
        out.push_str("ATENCIÓN: el estado elegido retrocede comandas ya despachadas\n");
    }
    out
}

/// JSON document printed by `plan --json`
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    /// The plan
    #[serde(flatten)]
    pub plan: &'a MassUpdatePlan,
    /// Whether the selected status regresses any comanda
    pub regression: bool,
}

/// JSON document printed by `regression`
#[derive(Debug, Serialize)]
pub struct RegressionReport<'a> {
    /// Next status id
    pub next_status: &'a str,
    /// Whether any comanda would move backward
    pub regression: bool,
}
