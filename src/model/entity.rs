//! Catalogue entry types: entities and their field/method items.

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of a documented software unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A class
    Class,
    /// A plain structure
    Structure,
}

/// One field or method row inside an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Code signature, rendered monospaced (may be a placeholder such as "none")
    ///
    /// A missing code decodes as empty and is rejected by validation.
    #[serde(default)]
    pub code: String,

    /// Human description; empty means "code only"
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    /// Create an item with a description.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Create an item that has no description.
    pub fn code_only(code: impl Into<String>) -> Self {
        Self::new(code, String::new())
    }

    /// Trimmed code text.
    pub fn code_text(&self) -> &str {
        self.code.trim()
    }

    /// Trimmed description, `None` when blank.
    pub fn description_text(&self) -> Option<&str> {
        let desc = self.description.trim();
        (!desc.is_empty()).then_some(desc)
    }

    /// Check the non-empty code invariant.
    pub fn is_well_formed(&self) -> bool {
        !self.code_text().is_empty()
    }
}

/// A documented class or structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Class or structure
    pub kind: EntityKind,

    /// Entity name as declared in source
    pub name: String,

    /// One-paragraph description
    pub description: String,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<Item>,

    /// Methods in declaration order
    #[serde(default)]
    pub methods: Vec<Item>,
}

impl Entity {
    /// Create an entity with no fields or methods.
    pub fn new(kind: EntityKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Create a class entity.
    pub fn class(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(EntityKind::Class, name, description)
    }

    /// Create a structure entity.
    pub fn structure(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(EntityKind::Structure, name, description)
    }

    /// Append a field.
    pub fn with_field(mut self, code: impl Into<String>, description: impl Into<String>) -> Self {
        self.fields.push(Item::new(code, description));
        self
    }

    /// Append a method.
    pub fn with_method(mut self, code: impl Into<String>, description: impl Into<String>) -> Self {
        self.methods.push(Item::new(code, description));
        self
    }

    /// Total number of items (fields and methods).
    pub fn item_count(&self) -> usize {
        self.fields.len() + self.methods.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_trimming() {
        let item = Item::new("  int x ", "  x coordinate ");
        assert_eq!(item.code_text(), "int x");
        assert_eq!(item.description_text(), Some("x coordinate"));

        let bare = Item::new("int y", "   ");
        assert_eq!(bare.description_text(), None);
        assert!(bare.is_well_formed());

        assert!(!Item::code_only("  ").is_well_formed());
    }

    #[test]
    fn test_entity_builder_preserves_order() {
        let entity = Entity::structure("Point", "2D point.")
            .with_field("int x", "x coordinate")
            .with_field("int y", "")
            .with_method("double length() const", "vector length");

        assert_eq!(entity.kind, EntityKind::Structure);
        assert_eq!(entity.fields[0].code, "int x");
        assert_eq!(entity.fields[1].code, "int y");
        assert_eq!(entity.item_count(), 3);
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&EntityKind::Structure).unwrap();
        assert_eq!(json, "\"structure\"");

        let kind: EntityKind = serde_json::from_str("\"class\"").unwrap();
        assert_eq!(kind, EntityKind::Class);
    }

    #[test]
    fn test_item_missing_description_defaults() {
        let item: Item = serde_json::from_str(r#"{"code": "(none)"}"#).unwrap();
        assert_eq!(item.code, "(none)");
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_item_null_description_defaults() {
        let item: Item = serde_json::from_str(r#"{"code": "int x", "description": null}"#).unwrap();
        assert_eq!(item.code, "int x");
        assert_eq!(item.description_text(), None);
    }

    #[test]
    fn test_item_missing_code_is_malformed() {
        let item: Item = serde_json::from_str(r#"{"description": "orphan"}"#).unwrap();
        assert!(item.code.is_empty());
        assert!(!item.is_well_formed());
    }
}
