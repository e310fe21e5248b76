//! Mass-update plan types
//!
//! A [`MassUpdatePlan`] holds, per comanda, the decision taken for each field
//! and the payload of fields to write, plus a per-field [`FieldSummary`].

use serde::Serialize;
use std::fmt;

/// A field a mass update can touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Status (`codestado`)
    Estado,
    /// Driver
    Camionero,
    /// Truck
    Camion,
    /// Distribution point
    PuntoDistribucion,
}

impl Field {
    /// Every field, in dialog order
    pub const ALL: [Self; 4] = [
        Self::Estado,
        Self::Camionero,
        Self::Camion,
        Self::PuntoDistribucion,
    ];

    /// Name of the payload property written for this field
    #[inline]
    #[must_use]
    pub const fn payload_key(self) -> &'static str {
        match self {
            Self::Estado => "codestado",
            Self::Camionero => "camionero",
            Self::Camion => "camion",
            Self::PuntoDistribucion => "puntoDistribucion",
        }
    }

    /// Label shown to users
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Estado => "Estado",
            Self::Camionero => "Camionero",
            Self::Camion => "Camión",
            Self::PuntoDistribucion => "Punto de distribución",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// No value was proposed
    NotSelected,
    /// Status already equals the proposed one
    Unchanged,
    /// Field already has a value; mass updates never overwrite it
    AlreadyAssigned,
}

/// Decision for one field of one comanda
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", content = "reason", rename_all = "camelCase")]
pub enum FieldAction {
    /// Write the proposed value
    Update,
    /// Leave the field as is
    Skip(SkipReason),
}

impl FieldAction {
    /// Whether the field goes into the payload
    #[inline]
    #[must_use]
    pub fn is_update(self) -> bool {
        matches!(self, Self::Update)
    }
}

/// Per-field state of one comanda
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    /// Decision
    #[serde(flatten)]
    pub action: FieldAction,
    /// Label of the current value
    pub current: Option<String>,
    /// Label of the proposed value
    pub next: Option<String>,
}

/// Fields to write for one comanda; only updated fields are present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Payload {
    /// New status id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codestado: Option<String>,
    /// New driver id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camionero: Option<String>,
    /// New truck id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camion: Option<String>,
    /// New distribution point
    #[serde(rename = "puntoDistribucion", skip_serializing_if = "Option::is_none")]
    pub punto_distribucion: Option<String>,
}

impl Payload {
    /// Value written for `field`, if any
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Estado => self.codestado.as_deref(),
            Field::Camionero => self.camionero.as_deref(),
            Field::Camion => self.camion.as_deref(),
            Field::PuntoDistribucion => self.punto_distribucion.as_deref(),
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Estado => &mut self.codestado,
            Field::Camionero => &mut self.camionero,
            Field::Camion => &mut self.camion,
            Field::PuntoDistribucion => &mut self.punto_distribucion,
        };
        *slot = Some(value);
    }

    /// Number of fields to write
    #[must_use]
    pub fn len(&self) -> usize {
        Field::ALL.into_iter().filter(|f| self.get(*f).is_some()).count()
    }

    /// Whether there is nothing to write
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Plan for one comanda
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// Comanda id
    pub id: String,
    /// Display number
    pub nrodecomanda: Option<u64>,
    /// Status decision
    pub estado: FieldState,
    /// Driver decision
    pub camionero: FieldState,
    /// Truck decision
    pub camion: FieldState,
    /// Distribution point decision
    pub punto_distribucion: FieldState,
    /// Fields to write
    pub payload: Payload,
}

impl PlanEntry {
    /// State of `field`
    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Estado => &self.estado,
            Field::Camionero => &self.camionero,
            Field::Camion => &self.camion,
            Field::PuntoDistribucion => &self.punto_distribucion,
        }
    }
}

/// Per-field counts across the batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSummary {
    /// Comandas that receive the value
    pub update_count: usize,
    /// Comandas skipped because the field is already set
    pub skip_already_assigned_count: usize,
    /// Comandas skipped because the status is the same
    pub skip_unchanged_count: usize,
    /// Comandas skipped because nothing was selected
    pub skip_not_selected_count: usize,
    /// Label of the proposed value
    pub next_label: Option<String>,
}

impl FieldSummary {
    pub(crate) fn record(&mut self, action: FieldAction) {
        let counter = match action {
            FieldAction::Update => &mut self.update_count,
            FieldAction::Skip(SkipReason::AlreadyAssigned) => &mut self.skip_already_assigned_count,
            FieldAction::Skip(SkipReason::Unchanged) => &mut self.skip_unchanged_count,
            FieldAction::Skip(SkipReason::NotSelected) => &mut self.skip_not_selected_count,
        };
        *counter += 1;
    }

    /// Comandas counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.update_count
            + self.skip_already_assigned_count
            + self.skip_unchanged_count
            + self.skip_not_selected_count
    }

    /// One-line description for the confirmation dialog
    ///
    /// `None` when the field was not selected at all.
    #[must_use]
    pub fn describe(&self, field: Field) -> Option<String> {
        let next = self.next_label.as_deref()?;
        let mut line = format!("{field} → {next}: {} a actualizar", self.update_count);
        if self.skip_already_assigned_count > 0 {
            line.push_str(&format!(", {} ya asignadas", self.skip_already_assigned_count));
        }
        if self.skip_unchanged_count > 0 {
            line.push_str(&format!(", {} sin cambios", self.skip_unchanged_count));
        }
        Some(line)
    }
}

/// Summaries for every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Status
    pub estado: FieldSummary,
    /// Driver
    pub camionero: FieldSummary,
    /// Truck
    pub camion: FieldSummary,
    /// Distribution point
    pub punto_distribucion: FieldSummary,
}

impl PlanSummary {
    /// Summary of `field`
    #[must_use]
    pub fn field(&self, field: Field) -> &FieldSummary {
        match field {
            Field::Estado => &self.estado,
            Field::Camionero => &self.camionero,
            Field::Camion => &self.camion,
            Field::PuntoDistribucion => &self.punto_distribucion,
        }
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> &mut FieldSummary {
        match field {
            Field::Estado => &mut self.estado,
            Field::Camionero => &mut self.camionero,
            Field::Camion => &mut self.camion,
            Field::PuntoDistribucion => &mut self.punto_distribucion,
        }
    }
}

/// Result of planning a mass update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MassUpdatePlan {
    /// One entry per input comanda, in input order
    pub comandas: Vec<PlanEntry>,
    /// Per-field counts
    pub summary: PlanSummary,
    /// Whether any comanda has something to write
    pub has_changes: bool,
}

impl MassUpdatePlan {
    /// `(comanda id, payload)` for every comanda with something to write
    pub fn updates(&self) -> impl Iterator<Item = (&str, &Payload)> + '_ {
        self.comandas
            .iter()
            .filter(|entry| !entry.payload.is_empty())
            .map(|entry| (entry.id.as_str(), &entry.payload))
    }

    /// Descriptions of the selected fields, in dialog order
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.summary.field(field).describe(field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tracks_set_fields() {
        let mut payload = Payload::default();
        assert!(payload.is_empty());

        payload.set(Field::Camion, "t1".to_string());
        payload.set(Field::PuntoDistribucion, "Centro".to_string());

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get(Field::Camion), Some("t1"));
        assert_eq!(payload.get(Field::Estado), None);
    }

    #[test]
    fn payload_serializes_only_present_fields() {
        let mut payload = Payload::default();
        payload.set(Field::PuntoDistribucion, "Centro".to_string());
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"puntoDistribucion":"Centro"}"#);
    }

    #[test]
    fn summary_counts_each_action() {
        let mut summary = FieldSummary::default();
        summary.record(FieldAction::Update);
        summary.record(FieldAction::Update);
        summary.record(FieldAction::Skip(SkipReason::AlreadyAssigned));
        summary.record(FieldAction::Skip(SkipReason::NotSelected));

        assert_eq!(summary.update_count, 2);
        assert_eq!(summary.skip_already_assigned_count, 1);
        assert_eq!(summary.skip_not_selected_count, 1);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn describe_mentions_skips() {
        let summary = FieldSummary {
            update_count: 3,
            skip_already_assigned_count: 2,
            next_label: Some("Juan".to_string()),
            ..FieldSummary::default()
        };
        assert_eq!(
            summary.describe(Field::Camionero).as_deref(),
            Some("Camionero → Juan: 3 a actualizar, 2 ya asignadas")
        );
        assert_eq!(FieldSummary::default().describe(Field::Camion), None);
    }

    #[test]
    fn field_state_serializes_flat() {
        let state = FieldState {
            action: FieldAction::Skip(SkipReason::AlreadyAssigned),
            current: Some("Juan".to_string()),
            next: Some("Pedro".to_string()),
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["action"], "skip");
        assert_eq!(value["reason"], "alreadyAssigned");
        assert_eq!(value["current"], "Juan");
    }
}
