//! Document orchestrator: title, every entity in order, commit.

use super::entity::render_entity;
use super::paragraph::build_paragraph;
use super::{RenderOptions, RenderStats};
use crate::error::Result;
use crate::model::{validate_entities, Catalogue, Entity, ParagraphLayout, StyledRun};
use crate::sink::DocumentSink;

/// Render a titled sequence of entities into `sink` and commit it.
///
/// Ordinals run `1..=n` in slice order. The whole catalogue is validated
/// before the first paragraph is appended; the commit is the only step that
/// touches persistent storage.
pub fn render<S: DocumentSink + ?Sized>(
    sink: &mut S,
    title: &str,
    entities: &[Entity],
    options: &RenderOptions,
) -> Result<RenderStats> {
    validate_entities(entities)?;
    log::info!("Rendering \"{}\" ({} entities)", title, entities.len());

    let mut stats = RenderStats::new();

    build_paragraph(
        sink,
        ParagraphLayout::Heading,
        vec![StyledRun::heading(title)],
        options,
    );
    stats.add_paragraph();

    for (idx, entity) in entities.iter().enumerate() {
        let paragraphs = render_entity(sink, idx + 1, entity, options)?;
        stats.add_entity(entity, paragraphs);
    }

    sink.commit()?;
    log::debug!(
        "Committed {} paragraphs for {} entities",
        stats.paragraph_count,
        stats.entity_count
    );

    Ok(stats)
}

/// Render a [`Catalogue`] using its own title.
pub fn render_catalogue<S: DocumentSink + ?Sized>(
    sink: &mut S,
    catalogue: &Catalogue,
    options: &RenderOptions,
) -> Result<RenderStats> {
    render(sink, &catalogue.title, &catalogue.entities, options)
}
