//! References between documents
//!
//! The API populates some references and leaves others as raw ids; both
//! shapes deserialize into [`EntityRef`].

use crate::text::non_blank;
use serde::{Deserialize, Serialize};

/// Id and display label access for a referenced document
pub trait Document {
    /// Document identifier, `None` when missing or blank
    fn id(&self) -> Option<&str>;

    /// Human-readable name, `None` when missing or blank
    fn label(&self) -> Option<&str>;
}

/// A reference that is either a populated document or a bare id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef<T> {
    /// Unpopulated reference
    Id(String),
    /// Populated document
    Doc(T),
}

impl<T: Document> EntityRef<T> {
    /// Reference by id only
    #[inline]
    #[must_use]
    pub fn id_only(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Populated document, if any
    #[inline]
    #[must_use]
    pub fn document(&self) -> Option<&T> {
        match self {
            Self::Doc(doc) => Some(doc),
            Self::Id(_) => None,
        }
    }

    /// Referenced id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => non_blank(Some(id)),
            Self::Doc(doc) => doc.id(),
        }
    }

    /// Display label of a populated document
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.document().and_then(Document::label)
    }

    /// Label, falling back to the id for unpopulated references
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        self.label().or_else(|| self.id())
    }

    /// Whether the reference carries any usable value
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.display_label().is_some()
    }
}

impl<T> From<T> for EntityRef<T> {
    fn from(doc: T) -> Self {
        Self::Doc(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cliente;

    #[test]
    fn id_reference_has_no_label() {
        let r: EntityRef<Cliente> = EntityRef::id_only("c1");
        assert_eq!(r.id(), Some("c1"));
        assert_eq!(r.label(), None);
        assert_eq!(r.display_label(), Some("c1"));
    }

    #[test]
    fn blank_id_is_absent() {
        let r: EntityRef<Cliente> = EntityRef::id_only("  ");
        assert_eq!(r.id(), None);
        assert!(!r.is_present());
    }

    #[test]
    fn populated_reference_uses_document() {
        let r = EntityRef::from(Cliente::new("c1", "Acme"));
        assert_eq!(r.id(), Some("c1"));
        assert_eq!(r.label(), Some("Acme"));
        assert!(r.document().is_some());
    }

    #[test]
    fn deserializes_both_shapes() {
        let raw: EntityRef<Cliente> = serde_json::from_str(r#""c9""#).unwrap();
        assert_eq!(raw, EntityRef::Id("c9".to_string()));

        let doc: EntityRef<Cliente> =
            serde_json::from_str(r#"{"_id":"c9","razonsocial":"Kiosco"}"#).unwrap();
        assert_eq!(doc.label(), Some("Kiosco"));
    }
}
