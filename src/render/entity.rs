//! Entity renderer.

use super::bullet::{render_bullet_block, BlockSource};
use super::paragraph::build_paragraph;
use super::RenderOptions;
use crate::error::Result;
use crate::model::{Entity, ItemList, ParagraphLayout, StyledRun};
use crate::sink::DocumentSink;

/// Render one entity: numbered heading, description, fields, methods.
///
/// The heading is `"{ordinal} {kind} "` in the serif family followed by
/// `"{name}:"` in the monospaced family, colon included.
///
/// Returns the number of paragraphs appended.
pub fn render_entity<S: DocumentSink + ?Sized>(
    sink: &mut S,
    ordinal: usize,
    entity: &Entity,
    options: &RenderOptions,
) -> Result<usize> {
    log::debug!(
        "Rendering entity {} {} ({} items)",
        ordinal,
        entity.name,
        entity.item_count()
    );

    let labels = &options.labels;
    build_paragraph(
        sink,
        ParagraphLayout::Heading,
        vec![
            StyledRun::body(format!("{} {} ", ordinal, labels.kind_label(entity.kind))),
            StyledRun::code(format!("{}:", entity.name)),
        ],
        options,
    );

    build_paragraph(
        sink,
        ParagraphLayout::Body,
        vec![StyledRun::body(entity.description.as_str())],
        options,
    );

    let fields = render_bullet_block(
        sink,
        &labels.fields,
        &entity.fields,
        BlockSource {
            entity: &entity.name,
            list: ItemList::Fields,
        },
        options,
    )?;
    let methods = render_bullet_block(
        sink,
        &labels.methods,
        &entity.methods,
        BlockSource {
            entity: &entity.name,
            list: ItemList::Methods,
        },
        options,
    )?;

    Ok(2 + fields + methods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentRole;
    use crate::sink::MemorySink;

    fn point() -> Entity {
        Entity::structure("Point", "2D point.")
            .with_field("int x", "x coordinate")
            .with_field("int y", "")
    }

    #[test]
    fn test_heading_split() {
        let mut sink = MemorySink::new();
        render_entity(&mut sink, 3, &point(), &RenderOptions::default()).unwrap();

        let heading = &sink.paragraphs()[0];
        assert_eq!(heading.plain_text(), "3 Structure Point:");
        assert_eq!(heading.layout(), ParagraphLayout::Heading);
        assert_eq!(heading.runs.len(), 2);
        assert_eq!(heading.runs[0].text, "3 Structure ");
        assert_eq!(heading.runs[0].role, ContentRole::Body);
        assert_eq!(heading.runs[1].text, "Point:");
        assert_eq!(heading.runs[1].role, ContentRole::CodeToken);
    }

    #[test]
    fn test_paragraph_sequence() {
        let mut sink = MemorySink::new();
        let count = render_entity(&mut sink, 3, &point(), &RenderOptions::default()).unwrap();

        let texts: Vec<_> = sink.paragraphs().iter().map(|p| p.plain_text()).collect();
        assert_eq!(
            texts,
            vec![
                "3 Structure Point:",
                "2D point.",
                "Fields:",
                "–\u{a0}int x: x coordinate;",
                "–\u{a0}int y.",
                "Methods:",
            ]
        );
        assert_eq!(count, texts.len());
        assert_eq!(sink.paragraphs()[1].layout(), ParagraphLayout::Body);
    }

    #[test]
    fn test_russian_labels() {
        let options = RenderOptions::new().with_labels(crate::render::Labels::russian());
        let mut sink = MemorySink::new();
        let entity = Entity::class("Order", "Модель заказа.");
        render_entity(&mut sink, 1, &entity, &options).unwrap();

        let texts: Vec<_> = sink.paragraphs().iter().map(|p| p.plain_text()).collect();
        assert_eq!(
            texts,
            vec!["1 Класс Order:", "Модель заказа.", "Поля:", "Методы:"]
        );
    }
}
