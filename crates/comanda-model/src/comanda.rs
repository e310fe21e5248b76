//! The order record

use crate::entities::{Camion, Camionero, Cliente, Estado, Producto, Ruta};
use crate::lenient;
use crate::reference::EntityRef;
use crate::text::non_blank;
use serde::{Deserialize, Serialize};

/// One product line of an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Product
    #[serde(deserialize_with = "lenient::value", skip_serializing_if = "Option::is_none")]
    pub codprod: Option<EntityRef<Producto>>,
    /// Ordered quantity
    #[serde(deserialize_with = "lenient::amount")]
    pub cantidad: f64,
    /// Unit amount
    #[serde(deserialize_with = "lenient::amount")]
    pub monto: f64,
}

impl LineItem {
    /// Line for `cantidad` units of `producto`
    #[must_use]
    pub fn new(producto: impl Into<EntityRef<Producto>>, cantidad: f64) -> Self {
        Self {
            codprod: Some(producto.into()),
            cantidad,
            monto: 0.0,
        }
    }

    /// With unit amount
    #[inline]
    #[must_use]
    pub fn with_monto(mut self, monto: f64) -> Self {
        self.monto = monto;
        self
    }

    /// Populated product, if any
    #[inline]
    #[must_use]
    pub fn producto(&self) -> Option<&Producto> {
        self.codprod.as_ref().and_then(EntityRef::document)
    }
}

/// An order/delivery ticket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comanda {
    /// Document id
    #[serde(
        rename = "_id",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Display number
    #[serde(deserialize_with = "lenient::integer", skip_serializing_if = "Option::is_none")]
    pub nrodecomanda: Option<u64>,
    /// Client
    #[serde(deserialize_with = "lenient::value", skip_serializing_if = "Option::is_none")]
    pub codcli: Option<EntityRef<Cliente>>,
    /// Assigned truck
    #[serde(deserialize_with = "lenient::value", skip_serializing_if = "Option::is_none")]
    pub camion: Option<EntityRef<Camion>>,
    /// Assigned driver
    #[serde(deserialize_with = "lenient::value", skip_serializing_if = "Option::is_none")]
    pub camionero: Option<EntityRef<Camionero>>,
    /// Distribution point, free text
    #[serde(
        rename = "puntoDistribucion",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub punto_distribucion: Option<String>,
    /// Current status
    #[serde(deserialize_with = "lenient::value", skip_serializing_if = "Option::is_none")]
    pub codestado: Option<EntityRef<Estado>>,
    /// Product lines
    #[serde(deserialize_with = "lenient::list")]
    pub items: Vec<LineItem>,
}

impl Comanda {
    /// Empty order with the given id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// With display number
    #[inline]
    #[must_use]
    pub fn with_numero(mut self, nrodecomanda: u64) -> Self {
        self.nrodecomanda = Some(nrodecomanda);
        self
    }

    /// With client
    #[inline]
    #[must_use]
    pub fn with_cliente(mut self, cliente: impl Into<EntityRef<Cliente>>) -> Self {
        self.codcli = Some(cliente.into());
        self
    }

    /// With truck
    #[inline]
    #[must_use]
    pub fn with_camion(mut self, camion: impl Into<EntityRef<Camion>>) -> Self {
        self.camion = Some(camion.into());
        self
    }

    /// With driver
    #[inline]
    #[must_use]
    pub fn with_camionero(mut self, camionero: impl Into<EntityRef<Camionero>>) -> Self {
        self.camionero = Some(camionero.into());
        self
    }

    /// With distribution point
    #[inline]
    #[must_use]
    pub fn with_punto_distribucion(mut self, punto: impl Into<String>) -> Self {
        self.punto_distribucion = Some(punto.into());
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_estado(mut self, estado: impl Into<EntityRef<Estado>>) -> Self {
        self.codestado = Some(estado.into());
        self
    }

    /// With an extra product line
    #[inline]
    #[must_use]
    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Document id, empty when missing
    #[inline]
    #[must_use]
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Populated client, if any
    #[inline]
    #[must_use]
    pub fn cliente(&self) -> Option<&Cliente> {
        self.codcli.as_ref().and_then(EntityRef::document)
    }

    /// Route of the populated client, if any
    #[inline]
    #[must_use]
    pub fn ruta(&self) -> Option<&EntityRef<Ruta>> {
        self.cliente().and_then(|c| c.ruta.as_ref())
    }

    /// Populated status, if any
    #[inline]
    #[must_use]
    pub fn estado(&self) -> Option<&Estado> {
        self.codestado.as_ref().and_then(EntityRef::document)
    }

    /// Trimmed distribution point, `None` when blank
    #[inline]
    #[must_use]
    pub fn punto_distribucion(&self) -> Option<&str> {
        non_blank(self.punto_distribucion.as_deref())
    }

    /// Sum of line quantities
    #[must_use]
    pub fn cantidad_total(&self) -> f64 {
        self.items.iter().map(|item| item.cantidad).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_populated_order() {
        let json = r#"{
            "_id": "a1",
            "nrodecomanda": 15,
            "codcli": {"_id": "c1", "razonsocial": "Acme", "ruta": {"_id": "r1", "ruta": "Norte"}},
            "camion": "t1",
            "codestado": {"_id": "e1", "estado": "Pendiente", "orden": 1},
            "puntoDistribucion": "  Depósito  ",
            "items": [
                {
                    "codprod": {"_id": "p1", "descripcion": "Yerba", "presentacion": "1kg"},
                    "cantidad": 3,
                    "monto": 10.5
                },
                {"codprod": "p2", "cantidad": "2"}
            ]
        }"#;
        let comanda: Comanda = serde_json::from_str(json).unwrap();

        assert_eq!(comanda.id_str(), "a1");
        assert_eq!(comanda.nrodecomanda, Some(15));
        assert_eq!(comanda.ruta().and_then(EntityRef::label), Some("Norte"));
        assert_eq!(comanda.camion.as_ref().and_then(EntityRef::id), Some("t1"));
        assert_eq!(comanda.estado().and_then(Document::label), Some("Pendiente"));
        assert_eq!(comanda.punto_distribucion(), Some("Depósito"));
        assert_eq!(comanda.items.len(), 2);
        assert_eq!(comanda.cantidad_total(), 5.0);
    }

    #[test]
    fn malformed_items_are_dropped() {
        let json = r#"{"_id": "a1", "items": [1, {"cantidad": 4}, "x"]}"#;
        let comanda: Comanda = serde_json::from_str(json).unwrap();
        assert_eq!(comanda.items.len(), 1);
        assert_eq!(comanda.cantidad_total(), 4.0);
    }

    #[test]
    fn non_array_items_are_empty() {
        let comanda: Comanda = serde_json::from_str(r#"{"items": {"a": 1}}"#).unwrap();
        assert!(comanda.items.is_empty());
        assert_eq!(comanda.id_str(), "");
    }

    #[test]
    fn serializes_api_field_names() {
        let comanda = Comanda::new("a1").with_punto_distribucion("Centro");
        let value = serde_json::to_value(&comanda).unwrap();
        assert_eq!(value["_id"], "a1");
        assert_eq!(value["puntoDistribucion"], "Centro");
        assert!(value.get("camion").is_none());
    }
}
