//! # specdoc
//!
//! Renders catalogues of classes and structures into formatted DOCX
//! sections for technical specifications.
//!
//! ## Quick Start
//!
//! ```no_run
//! use specdoc::{Catalogue, RenderOptions};
//!
//! fn main() -> specdoc::Result<()> {
//!     let catalogue = Catalogue::from_path("catalogues/order_management.json")?;
//!     let stats = specdoc::render_to_file(&catalogue, "section.docx", &RenderOptions::default())?;
//!     println!("{} entities", stats.entity_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! Every paragraph is single-spaced with no space after. Text is set in two
//! families of one size: a serif family for headings, descriptions, markers
//! and punctuation, and a monospaced family for entity names and code.
//! Field and method lists use hanging paragraphs separated by `;` and closed
//! with `.`.

pub mod error;
pub mod model;
pub mod render;
pub mod sink;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Catalogue, ContentRole, Entity, EntityKind, Item, ItemList, Paragraph, ParagraphFormat,
    ParagraphLayout, RunStyle, StyledRun, TextRun,
};
pub use render::{JsonFormat, Labels, RenderOptions, RenderStats};
pub use sink::{DocumentSink, DocxSink, MemorySink, ParagraphHandle};

use std::path::Path;

/// Render a catalogue into a `.docx` file at `path`.
///
/// Nothing is left at `path` if rendering fails.
///
/// # Example
///
/// ```no_run
/// use specdoc::{render_to_file, Catalogue, Entity, RenderOptions};
///
/// let catalogue = Catalogue::new(
///     "3.1 Modules",
///     vec![Entity::structure("Point", "2D point.").with_field("int x", "x coordinate")],
/// );
/// render_to_file(&catalogue, "modules.docx", &RenderOptions::default()).unwrap();
/// ```
pub fn render_to_file<P: AsRef<Path>>(
    catalogue: &Catalogue,
    path: P,
    options: &RenderOptions,
) -> Result<RenderStats> {
    let mut sink = DocxSink::create(path)?;
    render::render_catalogue(&mut sink, catalogue, options)
}

/// Render a catalogue in memory and return the recorded paragraphs.
pub fn render_to_paragraphs(
    catalogue: &Catalogue,
    options: &RenderOptions,
) -> Result<(Vec<Paragraph>, RenderStats)> {
    let mut sink = MemorySink::new();
    let stats = render::render_catalogue(&mut sink, catalogue, options)?;
    Ok((sink.into_paragraphs(), stats))
}

/// Render a catalogue as a plain text preview.
///
/// # Example
///
/// ```
/// use specdoc::{to_text, Catalogue, Entity, RenderOptions};
///
/// let catalogue = Catalogue::new("Types", vec![Entity::class("Order", "Order model.")]);
/// let text = to_text(&catalogue, &RenderOptions::default()).unwrap();
/// assert!(text.contains("1 Class Order:"));
/// ```
pub fn to_text(catalogue: &Catalogue, options: &RenderOptions) -> Result<String> {
    let (paragraphs, _) = render_to_paragraphs(catalogue, options)?;
    Ok(render::to_text(&paragraphs))
}

/// Render a catalogue and dump the paragraph structure as JSON.
pub fn to_json(catalogue: &Catalogue, options: &RenderOptions, format: JsonFormat) -> Result<String> {
    let (paragraphs, _) = render_to_paragraphs(catalogue, options)?;
    render::to_json(&paragraphs, format)
}
