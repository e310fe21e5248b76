//! Mass-update planning
//!
//! Status always follows the selection when it differs. Driver, truck and
//! distribution point are only filled in where empty: a mass update never
//! overwrites an assignment.

use crate::plan::{Field, FieldAction, FieldState, MassUpdatePlan, Payload, PlanEntry, SkipReason};
use crate::selection::{Choice, MassUpdateSelections};
use comanda_model::{non_blank, Comanda, Document, EntityRef};

/// A proposed value, ready to compare
#[derive(Debug, Clone, Copy)]
struct Proposed<'s> {
    id: &'s str,
    label: &'s str,
}

impl<'s> Proposed<'s> {
    fn from_choice(choice: Option<&'s Choice>) -> Option<Self> {
        let choice = choice?;
        let id = choice.id()?;
        Some(Self {
            id,
            label: choice.label().unwrap_or(id),
        })
    }

    fn from_text(text: Option<&'s str>) -> Option<Self> {
        non_blank(text).map(|text| Self { id: text, label: text })
    }
}

/// Current value of a field: `(id, label)`
fn current<'c, T: Document>(
    reference: Option<&'c EntityRef<T>>,
) -> (Option<&'c str>, Option<&'c str>) {
    reference.map_or((None, None), |r| (r.id(), r.display_label()))
}

fn current_of(field: Field, comanda: &Comanda) -> (Option<&str>, Option<&str>) {
    match field {
        Field::Estado => current(comanda.codestado.as_ref()),
        Field::Camionero => current(comanda.camionero.as_ref()),
        Field::Camion => current(comanda.camion.as_ref()),
        Field::PuntoDistribucion => {
            let punto = comanda.punto_distribucion();
            (punto, punto)
        }
    }
}

fn classify(
    field: Field,
    current_id: Option<&str>,
    current_label: Option<&str>,
    next: Option<Proposed<'_>>,
) -> FieldAction {
    let Some(next) = next else {
        return FieldAction::Skip(SkipReason::NotSelected);
    };
    match field {
        Field::Estado if current_id == Some(next.id) => FieldAction::Skip(SkipReason::Unchanged),
        Field::Estado => FieldAction::Update,
        _ if current_label.is_some() => FieldAction::Skip(SkipReason::AlreadyAssigned),
        _ => FieldAction::Update,
    }
}

/// Decide, per comanda and per field, what a mass update would write
///
/// Never fails: blank or missing selections classify as not selected.
#[must_use]
pub fn build_mass_update_plan(
    records: &[Comanda],
    selections: &MassUpdateSelections,
) -> MassUpdatePlan {
    let proposals = [
        (Field::Estado, Proposed::from_choice(selections.estado.as_ref())),
        (Field::Camionero, Proposed::from_choice(selections.camionero.as_ref())),
        (Field::Camion, Proposed::from_choice(selections.camion.as_ref())),
        (
            Field::PuntoDistribucion,
            Proposed::from_text(selections.punto_distribucion.as_deref()),
        ),
    ];

    let mut plan = MassUpdatePlan::default();
    for (field, next) in proposals {
        plan.summary.field_mut(field).next_label = next.map(|n| n.label.to_string());
    }

    for comanda in records {
        let mut payload = Payload::default();
        let states = proposals.map(|(field, next)| {
            let (current_id, current_label) = current_of(field, comanda);
            let action = classify(field, current_id, current_label, next);
            plan.summary.field_mut(field).record(action);
            if let (FieldAction::Update, Some(next)) = (action, next) {
                payload.set(field, next.id.to_string());
            }
            FieldState {
                action,
                current: current_label.map(str::to_string),
                next: next.map(|n| n.label.to_string()),
            }
        });
        let [estado, camionero, camion, punto_distribucion] = states;

        plan.has_changes |= !payload.is_empty();
        plan.comandas.push(PlanEntry {
            id: comanda.id_str().to_string(),
            nrodecomanda: comanda.nrodecomanda,
            estado,
            camionero,
            camion,
            punto_distribucion,
            payload,
        });
    }

    tracing::debug!(
        comandas = records.len(),
        estado = plan.summary.estado.update_count,
        camionero = plan.summary.camionero.update_count,
        camion = plan.summary.camion.update_count,
        punto_distribucion = plan.summary.punto_distribucion.update_count,
        has_changes = plan.has_changes,
        "planned mass update"
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_model::{Camion, Camionero, Estado};
    use pretty_assertions::assert_eq;

    fn pendiente() -> Estado {
        Estado::new("e1", "Pendiente").with_orden(1)
    }

    #[test]
    fn nothing_selected_skips_everything() {
        let records = vec![Comanda::new("a"), Comanda::new("b")];
        let plan = build_mass_update_plan(&records, &MassUpdateSelections::new());

        assert!(!plan.has_changes);
        for field in Field::ALL {
            assert_eq!(plan.summary.field(field).skip_not_selected_count, 2);
            assert_eq!(plan.summary.field(field).next_label, None);
        }
        assert!(plan.comandas.iter().all(|e| e.payload.is_empty()));
    }

    #[test]
    fn status_updates_when_absent_or_different() {
        let records = vec![
            Comanda::new("a"),
            Comanda::new("b").with_estado(pendiente()),
            Comanda::new("c").with_estado(Estado::new("e2", "En preparación")),
        ];
        let selections =
            MassUpdateSelections::new().with_estado(Choice::new("e2", "En preparación"));
        let plan = build_mass_update_plan(&records, &selections);

        assert_eq!(plan.comandas[0].payload.codestado.as_deref(), Some("e2"));
        assert_eq!(plan.comandas[1].payload.codestado.as_deref(), Some("e2"));
        assert_eq!(plan.comandas[1].estado.current.as_deref(), Some("Pendiente"));
        assert_eq!(plan.comandas[2].payload.codestado, None);
        assert_eq!(
            plan.comandas[2].estado.action,
            FieldAction::Skip(SkipReason::Unchanged)
        );
        assert_eq!(plan.summary.estado.update_count, 2);
        assert_eq!(plan.summary.estado.skip_unchanged_count, 1);
        assert_eq!(plan.summary.estado.next_label.as_deref(), Some("En preparación"));
        assert!(plan.has_changes);
    }

    #[test]
    fn assigned_driver_is_not_overwritten() {
        let records = vec![
            Comanda::new("a").with_camionero(Camionero::new("driver-1", "Juan")),
            Comanda::new("b"),
        ];
        let selections =
            MassUpdateSelections::new().with_camionero(Choice::new("driver-2", "Pedro"));
        let plan = build_mass_update_plan(&records, &selections);

        assert_eq!(plan.comandas[0].payload.camionero, None);
        assert_eq!(
            plan.comandas[0].camionero.action,
            FieldAction::Skip(SkipReason::AlreadyAssigned)
        );
        assert_eq!(plan.comandas[0].camionero.current.as_deref(), Some("Juan"));
        assert_eq!(plan.comandas[0].camionero.next.as_deref(), Some("Pedro"));
        assert_eq!(plan.comandas[1].payload.camionero.as_deref(), Some("driver-2"));
        assert_eq!(plan.summary.camionero.skip_already_assigned_count, 1);
        assert_eq!(plan.summary.camionero.update_count, 1);
    }

    #[test]
    fn same_driver_still_counts_as_assigned() {
        let records = vec![Comanda::new("a").with_camionero(Camionero::new("d1", "Juan"))];
        let selections = MassUpdateSelections::new().with_camionero(Choice::new("d1", "Juan"));
        let plan = build_mass_update_plan(&records, &selections);
        assert_eq!(plan.summary.camionero.skip_already_assigned_count, 1);
        assert!(!plan.has_changes);
    }

    #[test]
    fn unpopulated_truck_counts_as_assigned() {
        let records = vec![Comanda::new("a").with_camion(EntityRef::<Camion>::id_only("t1"))];
        let selections = MassUpdateSelections::new().with_camion(Choice::new("t2", "Scania"));
        let plan = build_mass_update_plan(&records, &selections);
        assert_eq!(plan.comandas[0].camion.current.as_deref(), Some("t1"));
        assert_eq!(plan.summary.camion.skip_already_assigned_count, 1);
    }

    #[test]
    fn blank_distribution_point_is_filled() {
        let records = vec![
            Comanda::new("a").with_punto_distribucion("   "),
            Comanda::new("b").with_punto_distribucion("Depósito"),
        ];
        let selections = MassUpdateSelections::new().with_punto_distribucion(" Centro ");
        let plan = build_mass_update_plan(&records, &selections);

        assert_eq!(plan.comandas[0].payload.punto_distribucion.as_deref(), Some("Centro"));
        assert_eq!(plan.comandas[0].punto_distribucion.current, None);
        assert_eq!(plan.comandas[1].payload.punto_distribucion, None);
        assert_eq!(plan.summary.punto_distribucion.next_label.as_deref(), Some("Centro"));
    }

    #[test]
    fn blank_selection_is_not_selected() {
        let records = vec![Comanda::new("a")];
        let selections = MassUpdateSelections::new()
            .with_camion(Choice::new(" ", "Nada"))
            .with_punto_distribucion("");
        let plan = build_mass_update_plan(&records, &selections);
        assert_eq!(plan.summary.camion.skip_not_selected_count, 1);
        assert_eq!(plan.summary.punto_distribucion.skip_not_selected_count, 1);
        assert!(!plan.has_changes);
    }

    #[test]
    fn entries_keep_input_order_and_ids() {
        let records = vec![Comanda::new("z").with_numero(9), Comanda::new("a").with_numero(1)];
        let plan = build_mass_update_plan(&records, &MassUpdateSelections::new());
        let ids: Vec<_> = plan.comandas.iter().map(|e| (e.id.as_str(), e.nrodecomanda)).collect();
        assert_eq!(ids, vec![("z", Some(9)), ("a", Some(1))]);
    }

    #[test]
    fn updates_lists_only_changed_comandas() {
        let records = vec![
            Comanda::new("a").with_camion(Camion::new("t1", "Iveco")),
            Comanda::new("b"),
        ];
        let selections = MassUpdateSelections::new()
            .with_camion(Choice::new("t2", "Scania"))
            .with_camionero(Choice::new("d1", "Juan"));
        let plan = build_mass_update_plan(&records, &selections);

        let updates: Vec<_> = plan.updates().collect();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].0, "a");
        assert_eq!(updates[0].1.len(), 1);
        assert_eq!(updates[1].1.len(), 2);
        assert_eq!(
            plan.summary_lines(),
            vec![
                "Camionero → Juan: 2 a actualizar".to_string(),
                "Camión → Scania: 1 a actualizar, 1 ya asignadas".to_string(),
            ]
        );
    }
}
