//! Catalogue of entities loaded from JSON or built in code.

use super::Entity;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which item list of an entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemList {
    /// The entity's fields
    Fields,
    /// The entity's methods
    Methods,
}

impl ItemList {
    /// Lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemList::Fields => "fields",
            ItemList::Methods => "methods",
        }
    }
}

impl std::fmt::Display for ItemList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, read-only set of entities plus the document title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    /// Title paragraph of the rendered section
    #[serde(default)]
    pub title: String,

    /// Entities in rendering order
    pub entities: Vec<Entity>,
}

impl Catalogue {
    /// Create a catalogue from a title and entities.
    pub fn new(title: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self {
            title: title.into(),
            entities,
        }
    }

    /// Decode a catalogue from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Catalogue(e.to_string()))
    }

    /// Load a catalogue from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| Error::Catalogue(format!("{}: {}", path.display(), e)))
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the catalogue has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities of the given kind.
    pub fn count_kind(&self, kind: super::EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    /// Total number of fields across all entities.
    pub fn field_count(&self) -> usize {
        self.entities.iter().map(|e| e.fields.len()).sum()
    }

    /// Total number of methods across all entities.
    pub fn method_count(&self) -> usize {
        self.entities.iter().map(|e| e.methods.len()).sum()
    }

    /// Check every item of every entity for a non-empty code.
    pub fn validate(&self) -> Result<()> {
        validate_entities(&self.entities)
    }
}

/// Check every item of every entity for a non-empty code.
///
/// Returns the first offending entry in catalogue order.
pub fn validate_entities(entities: &[Entity]) -> Result<()> {
    for entity in entities {
        validate_items(&entity.name, ItemList::Fields, &entity.fields)?;
        validate_items(&entity.name, ItemList::Methods, &entity.methods)?;
    }
    Ok(())
}

pub(crate) fn validate_items(entity: &str, list: ItemList, items: &[super::Item]) -> Result<()> {
    match items.iter().position(|item| !item.is_well_formed()) {
        Some(index) => Err(Error::MalformedCatalogueEntry {
            entity: entity.to_string(),
            list,
            index,
        }),
        None => Ok(()),
    }
}
