//! Data model: catalogue entities on the input side, styled paragraphs on
//! the output side.
//!
//! Entities are immutable value records read once per render pass. Paragraphs
//! are what a [`DocumentSink`](crate::sink::DocumentSink) records.

mod catalogue;
mod entity;
mod paragraph;

pub use catalogue::{validate_entities, Catalogue, ItemList};
pub(crate) use catalogue::validate_items;
pub use entity::{Entity, EntityKind, Item};
pub use paragraph::{
    cm_to_twips, ContentRole, LineSpacing, Paragraph, ParagraphFormat, ParagraphLayout, RunStyle,
    StyledRun, TextRun,
};
