//! Documents referenced from a comanda

use crate::lenient;
use crate::reference::{Document, EntityRef};
use crate::text::non_blank;
use serde::{Deserialize, Serialize};

/// Client (`codcli`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cliente {
    /// Document id
    #[serde(
        rename = "_id",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Business name
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub razonsocial: Option<String>,
    /// Delivery route the client belongs to
    #[serde(deserialize_with = "lenient::value", skip_serializing_if = "Option::is_none")]
    pub ruta: Option<EntityRef<Ruta>>,
}

impl Cliente {
    /// Client with id and business name
    #[must_use]
    pub fn new(id: impl Into<String>, razonsocial: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            razonsocial: Some(razonsocial.into()),
            ruta: None,
        }
    }

    /// With route
    #[inline]
    #[must_use]
    pub fn with_ruta(mut self, ruta: impl Into<EntityRef<Ruta>>) -> Self {
        self.ruta = Some(ruta.into());
        self
    }
}

impl Document for Cliente {
    fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    fn label(&self) -> Option<&str> {
        non_blank(self.razonsocial.as_deref())
    }
}

/// Delivery route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruta {
    /// Document id
    #[serde(
        rename = "_id",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Route name
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub ruta: Option<String>,
}

impl Ruta {
    /// Route with id and name
    #[must_use]
    pub fn new(id: impl Into<String>, ruta: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ruta: Some(ruta.into()),
        }
    }
}

impl Document for Ruta {
    fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    fn label(&self) -> Option<&str> {
        non_blank(self.ruta.as_deref())
    }
}

/// Truck
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camion {
    /// Document id
    #[serde(
        rename = "_id",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Truck name
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub camion: Option<String>,
    /// License plate
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub patente: Option<String>,
}

impl Camion {
    /// Truck with id and name
    #[must_use]
    pub fn new(id: impl Into<String>, camion: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            camion: Some(camion.into()),
            patente: None,
        }
    }

    /// With license plate
    #[inline]
    #[must_use]
    pub fn with_patente(mut self, patente: impl Into<String>) -> Self {
        self.patente = Some(patente.into());
        self
    }
}

impl Document for Camion {
    fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    fn label(&self) -> Option<&str> {
        non_blank(self.camion.as_deref()).or_else(|| non_blank(self.patente.as_deref()))
    }
}

/// Driver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camionero {
    /// Document id
    #[serde(
        rename = "_id",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Driver name
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

impl Camionero {
    /// Driver with id and name
    #[must_use]
    pub fn new(id: impl Into<String>, nombre: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            nombre: Some(nombre.into()),
        }
    }
}

impl Document for Camionero {
    fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    fn label(&self) -> Option<&str> {
        non_blank(self.nombre.as_deref())
    }
}

/// Order status (`codestado`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Estado {
    /// Document id
    #[serde(
        rename = "_id",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Status name
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    /// Position in the workflow, lower comes first
    #[serde(deserialize_with = "lenient::signed", skip_serializing_if = "Option::is_none")]
    pub orden: Option<i64>,
}

impl Estado {
    /// Status with id and name
    #[must_use]
    pub fn new(id: impl Into<String>, estado: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            estado: Some(estado.into()),
            orden: None,
        }
    }

    /// With workflow rank
    #[inline]
    #[must_use]
    pub fn with_orden(mut self, orden: i64) -> Self {
        self.orden = Some(orden);
        self
    }
}

impl Document for Estado {
    fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    fn label(&self) -> Option<&str> {
        non_blank(self.estado.as_deref())
    }
}

/// Product category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rubro {
    /// Document id
    #[serde(
        rename = "_id",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Category name
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub rubro: Option<String>,
}

impl Rubro {
    /// Category with id and name
    #[must_use]
    pub fn new(id: impl Into<String>, rubro: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            rubro: Some(rubro.into()),
        }
    }
}

impl Document for Rubro {
    fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    fn label(&self) -> Option<&str> {
        non_blank(self.rubro.as_deref())
    }
}

/// Product (`codprod`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Producto {
    /// Document id
    #[serde(
        rename = "_id",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Product description
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// Packaging, e.g. "x 12 u"
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub presentacion: Option<String>,
    /// Category
    #[serde(deserialize_with = "lenient::value", skip_serializing_if = "Option::is_none")]
    pub rubro: Option<EntityRef<Rubro>>,
}

impl Producto {
    /// Product with id and description
    #[must_use]
    pub fn new(id: impl Into<String>, descripcion: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            descripcion: Some(descripcion.into()),
            presentacion: None,
            rubro: None,
        }
    }

    /// With packaging
    #[inline]
    #[must_use]
    pub fn with_presentacion(mut self, presentacion: impl Into<String>) -> Self {
        self.presentacion = Some(presentacion.into());
        self
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_rubro(mut self, rubro: impl Into<EntityRef<Rubro>>) -> Self {
        self.rubro = Some(rubro.into());
        self
    }
}

impl Document for Producto {
    fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    fn label(&self) -> Option<&str> {
        non_blank(self.descripcion.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camion_label_falls_back_to_patente() {
        let camion = Camion {
            id: Some("t1".to_string()),
            camion: Some(" ".to_string()),
            patente: Some("AB123CD".to_string()),
        };
        assert_eq!(camion.label(), Some("AB123CD"));
    }

    #[test]
    fn estado_orden_accepts_numeric_string() {
        let estado: Estado =
            serde_json::from_str(r#"{"_id":"e1","estado":"Pendiente","orden":"2"}"#).unwrap();
        assert_eq!(estado.orden, Some(2));
    }

    #[test]
    fn malformed_fields_degrade() {
        let cliente: Cliente =
            serde_json::from_str(r#"{"_id":null,"razonsocial":["x"],"ruta":42}"#).unwrap();
        assert_eq!(cliente, Cliente::default());
    }
}
