//! Formatting engine: maps catalogue entities onto styled paragraphs.
//!
//! Layers, leaf first: [`style_for`] picks a font per content role,
//! [`build_paragraph`] lays out one paragraph, [`render_bullet_block`] handles
//! field and method lists, [`render_entity`] renders one entity and [`render`]
//! drives a whole document into a [`DocumentSink`](crate::sink::DocumentSink).

mod bullet;
mod document;
mod entity;
mod json;
mod options;
mod paragraph;
mod result;
mod text;
mod typography;

pub use bullet::{render_bullet_block, BlockSource, NBSP};
pub use document::{render, render_catalogue};
pub use entity::render_entity;
pub use json::{to_json, JsonFormat};
pub use options::{Indentation, Labels, RenderOptions, Typography};
pub use paragraph::{build_paragraph, format_for};
pub use result::RenderStats;
pub use text::to_text;
pub use typography::style_for;
