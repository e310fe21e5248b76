//! Grouping dimensions
//!
//! The allow-list of axes a comanda list can be grouped by, and the
//! normalization applied to user-supplied dimension names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grouping axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Order display number
    #[serde(rename = "nrodecomanda")]
    NroDeComanda,
    /// Client
    #[serde(rename = "cliente")]
    Cliente,
    /// Client's delivery route
    #[serde(rename = "ruta")]
    Ruta,
    /// Summary of the order's product lines
    #[serde(rename = "producto")]
    Producto,
    /// Product categories present in the order
    #[serde(rename = "rubro")]
    Rubro,
    /// Assigned truck
    #[serde(rename = "camion")]
    Camion,
}

impl Dimension {
    /// Every recognized dimension, in UI order
    pub const ALL: [Self; 6] = [
        Self::NroDeComanda,
        Self::Cliente,
        Self::Ruta,
        Self::Producto,
        Self::Rubro,
        Self::Camion,
    ];

    /// Wire name, as used in API query strings
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NroDeComanda => "nrodecomanda",
            Self::Cliente => "cliente",
            Self::Ruta => "ruta",
            Self::Producto => "producto",
            Self::Rubro => "rubro",
            Self::Camion => "camion",
        }
    }

    /// Column heading shown to users
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NroDeComanda => "Nro. de comanda",
            Self::Cliente => "Cliente",
            Self::Ruta => "Ruta",
            Self::Producto => "Producto",
            Self::Rubro => "Rubro",
            Self::Camion => "Camión",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimension name outside the allow-list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grouping dimension: {0}")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == wanted)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

/// Keep recognized names, in order, first occurrence wins
#[must_use]
pub fn normalize_dimensions<I, S>(names: I) -> Vec<Dimension>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dimensions = Vec::new();
    for name in names {
        match name.as_ref().parse::<Dimension>() {
            Ok(dimension) if !dimensions.contains(&dimension) => dimensions.push(dimension),
            Ok(_) => {}
            Err(err) => tracing::debug!("dropping {err}"),
        }
    }
    dimensions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.as_str().parse::<Dimension>(), Ok(dimension));
        }
        assert_eq!(" Cliente ".parse::<Dimension>(), Ok(Dimension::Cliente));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "vendedor".parse::<Dimension>().unwrap_err();
        assert_eq!(err, UnknownDimension("vendedor".to_string()));
        assert_eq!(err.to_string(), "unknown grouping dimension: vendedor");
    }

    #[test]
    fn normalize_drops_unknown_and_duplicates() {
        let dims = normalize_dimensions(["ruta", "foo", "cliente", "ruta", "camion"]);
        assert_eq!(
            dims,
            vec![Dimension::Ruta, Dimension::Cliente, Dimension::Camion]
        );
    }

    #[test]
    fn normalize_empty_input() {
        assert!(normalize_dimensions(Vec::<String>::new()).is_empty());
        assert!(normalize_dimensions(["", "x"]).is_empty());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Dimension::NroDeComanda).unwrap();
        assert_eq!(json, r#""nrodecomanda""#);
    }
}
