//! Statistics collected during a render pass.

use crate::model::{Entity, EntityKind};
use serde::{Deserialize, Serialize};

/// Counts describing what a render pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of entities rendered
    pub entity_count: u32,

    /// Number of class entities
    pub class_count: u32,

    /// Number of structure entities
    pub structure_count: u32,

    /// Number of paragraphs appended to the sink, title included
    pub paragraph_count: u32,

    /// Number of field items
    pub field_count: u32,

    /// Number of method items
    pub method_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendered entity and the paragraphs it produced.
    pub fn add_entity(&mut self, entity: &Entity, paragraphs: usize) {
        self.entity_count += 1;
        match entity.kind {
            EntityKind::Class => self.class_count += 1,
            EntityKind::Structure => self.structure_count += 1,
        }
        self.field_count += entity.fields.len() as u32;
        self.method_count += entity.methods.len() as u32;
        self.paragraph_count += paragraphs as u32;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Total number of list items.
    pub fn item_count(&self) -> u32 {
        self.field_count + self.method_count
    }
}
