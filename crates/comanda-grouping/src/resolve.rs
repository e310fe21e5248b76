//! Per-dimension key resolution
//!
//! Each dimension maps a comanda to a [`ResolvedKey`]. Missing or empty data
//! resolves to the placeholder so every record still lands in exactly one
//! group per level.

use crate::dimension::Dimension;
use comanda_model::{non_blank, Comanda, Document, EntityRef, LineItem};

/// Label shown for groups whose source data is missing
pub const PLACEHOLDER_LABEL: &str = "—";

/// Key shared by every placeholder group
pub const PLACEHOLDER_KEY: &str = "__none__";

/// Width numeric sort keys are zero-padded to
const NUMERIC_SORT_WIDTH: usize = 12;

/// Separator between line-item summaries
const ITEM_SEPARATOR: &str = " - ";

/// Grouping key for one record on one dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    /// Identity within the level
    pub key: String,
    /// Display label
    pub label: String,
    /// Raw identifier of the source value, when one exists
    pub raw_value: Option<String>,
    /// Lower-cased sort key
    pub sort_value: String,
}

impl ResolvedKey {
    /// Placeholder for missing data
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            key: PLACEHOLDER_KEY.to_string(),
            label: PLACEHOLDER_LABEL.to_string(),
            raw_value: None,
            sort_value: PLACEHOLDER_LABEL.to_string(),
        }
    }

    fn text(key: impl Into<String>, label: impl Into<String>, raw_value: Option<String>) -> Self {
        let label = label.into();
        Self {
            key: key.into(),
            sort_value: label.to_lowercase(),
            label,
            raw_value,
        }
    }

    /// Whether this is the placeholder group
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.key == PLACEHOLDER_KEY
    }
}

impl Dimension {
    /// Resolve the grouping key of `comanda` on this dimension
    #[must_use]
    pub fn resolve(self, comanda: &Comanda) -> ResolvedKey {
        match self {
            Self::NroDeComanda => resolve_numero(comanda.nrodecomanda),
            Self::Cliente => resolve_reference(comanda.codcli.as_ref()),
            Self::Ruta => resolve_reference(comanda.ruta()),
            Self::Camion => resolve_reference(comanda.camion.as_ref()),
            Self::Producto => resolve_productos(&comanda.items),
            Self::Rubro => resolve_rubros(&comanda.items),
        }
    }
}

fn resolve_numero(numero: Option<u64>) -> ResolvedKey {
    let Some(numero) = numero else {
        return ResolvedKey::placeholder();
    };
    ResolvedKey {
        key: numero.to_string(),
        label: numero.to_string(),
        raw_value: Some(numero.to_string()),
        sort_value: format!("{numero:0width$}", width = NUMERIC_SORT_WIDTH),
    }
}

fn resolve_reference<T: Document>(reference: Option<&EntityRef<T>>) -> ResolvedKey {
    let Some(reference) = reference else {
        return ResolvedKey::placeholder();
    };
    match (reference.id(), reference.display_label()) {
        (Some(id), Some(label)) => ResolvedKey::text(id, label, Some(id.to_string())),
        (None, Some(label)) => ResolvedKey::text(label, label, None),
        _ => ResolvedKey::placeholder(),
    }
}

/// `"<descripcion> <presentacion> x<cantidad>"` for one line
fn describe_item(item: &LineItem) -> Option<String> {
    let producto = item.codprod.as_ref()?;
    let descripcion = producto.display_label()?;
    let mut parts = vec![descripcion.to_string()];
    if let Some(presentacion) = producto
        .document()
        .and_then(|p| non_blank(p.presentacion.as_deref()))
    {
        parts.push(presentacion.to_string());
    }
    parts.push(format!("x{}", item.cantidad));
    Some(parts.join(" "))
}

fn resolve_productos(items: &[LineItem]) -> ResolvedKey {
    let summary = items
        .iter()
        .filter_map(describe_item)
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR);
    if summary.is_empty() {
        return ResolvedKey::placeholder();
    }
    ResolvedKey::text(summary.clone(), summary, None)
}

fn resolve_rubros(items: &[LineItem]) -> ResolvedKey {
    let mut keys: Vec<&str> = Vec::new();
    let mut labels: Vec<&str> = Vec::new();
    for rubro in items
        .iter()
        .filter_map(|item| item.producto())
        .filter_map(|producto| producto.rubro.as_ref())
    {
        let (Some(key), Some(label)) = (rubro.id().or(rubro.label()), rubro.display_label()) else {
            continue;
        };
        if !keys.contains(&key) {
            keys.push(key);
            labels.push(label);
        }
    }
    if keys.is_empty() {
        return ResolvedKey::placeholder();
    }
    let raw_value = (keys.len() == 1).then(|| keys[0].to_string());
    ResolvedKey::text(keys.join("|"), labels.join(ITEM_SEPARATOR), raw_value)
}
