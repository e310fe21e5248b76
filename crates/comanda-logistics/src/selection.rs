//! Proposed values for a mass update

use comanda_model::{non_blank, Estado};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An id/label pair picked in a selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choice {
    /// Identifier written to the payload
    pub id: String,
    /// Label shown to the user
    pub label: String,
}

impl Choice {
    /// Choice with id and label
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Trimmed id, `None` when blank
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        non_blank(Some(&self.id))
    }

    /// Label, falling back to the id
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        non_blank(Some(&self.label)).or_else(|| self.id())
    }

    /// Status view of this choice, for rank resolution
    #[must_use]
    pub fn to_estado(&self) -> Estado {
        Estado {
            id: self.id().map(str::to_string),
            estado: non_blank(Some(&self.label)).map(str::to_string),
            orden: None,
        }
    }
}

/// Malformed `ID[:LABEL]` text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionParseError {
    /// Nothing before the separator
    #[error("selection id is empty in {0:?}")]
    EmptyId(String),
}

impl FromStr for Choice {
    type Err = SelectionParseError;

    /// Parse `ID` or `ID:LABEL`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, label) = s.split_once(':').unwrap_or((s, ""));
        let id = id.trim();
        if id.is_empty() {
            return Err(SelectionParseError::EmptyId(s.to_string()));
        }
        Ok(Self::new(id, label.trim()))
    }
}

/// One proposed value per field; absent fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassUpdateSelections {
    /// Next status
    pub estado: Option<Choice>,
    /// Driver to assign
    pub camionero: Option<Choice>,
    /// Truck to assign
    pub camion: Option<Choice>,
    /// Distribution point to assign
    #[serde(rename = "puntoDistribucion")]
    pub punto_distribucion: Option<String>,
}

impl MassUpdateSelections {
    /// Nothing selected
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With next status
    #[inline]
    #[must_use]
    pub fn with_estado(mut self, choice: Choice) -> Self {
        self.estado = Some(choice);
        self
    }

    /// With driver
    #[inline]
    #[must_use]
    pub fn with_camionero(mut self, choice: Choice) -> Self {
        self.camionero = Some(choice);
        self
    }

    /// With truck
    #[inline]
    #[must_use]
    pub fn with_camion(mut self, choice: Choice) -> Self {
        self.camion = Some(choice);
        self
    }

    /// With distribution point
    #[inline]
    #[must_use]
    pub fn with_punto_distribucion(mut self, punto: impl Into<String>) -> Self {
        self.punto_distribucion = Some(punto.into());
        self
    }

    /// Whether no field carries a usable value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.estado, &self.camionero, &self.camion]
            .into_iter()
            .all(|choice| choice.as_ref().and_then(Choice::id).is_none())
            && non_blank(self.punto_distribucion.as_deref()).is_none()
    }
}
