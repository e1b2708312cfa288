//! Bullet-list formatter for field and method blocks.

use super::paragraph::build_paragraph;
use super::RenderOptions;
use crate::error::Result;
use crate::model::{validate_items, Item, ItemList, ParagraphLayout, StyledRun};
use crate::sink::DocumentSink;

/// NO-BREAK SPACE; keeps the marker on the same line as the code token.
pub const NBSP: char = '\u{00A0}';

/// Location of a bullet block, used in error reports.
#[derive(Debug, Clone, Copy)]
pub struct BlockSource<'a> {
    /// Owning entity name
    pub entity: &'a str,
    /// Which list of the entity
    pub list: ItemList,
}

/// Render a titled list of items.
///
/// Emits the title as a body paragraph, then one hanging paragraph per item.
/// Items are separated by `;` and the last one ends with `.`; the `": "`
/// separator only appears when the item has a description. An empty list
/// renders the title alone.
///
/// Returns the number of paragraphs appended. Items are checked before
/// anything is appended, so a malformed item leaves the sink untouched.
pub fn render_bullet_block<S: DocumentSink + ?Sized>(
    sink: &mut S,
    title: &str,
    items: &[Item],
    source: BlockSource<'_>,
    options: &RenderOptions,
) -> Result<usize> {
    validate_items(source.entity, source.list, items)?;

    build_paragraph(
        sink,
        ParagraphLayout::Body,
        vec![StyledRun::body(title)],
        options,
    );

    let marker = format!("{}{}", options.list_marker, NBSP);
    let last = items.len().saturating_sub(1);
    for (idx, item) in items.iter().enumerate() {
        let ending = if idx == last { "." } else { ";" };

        let mut runs = Vec::with_capacity(4);
        runs.push(StyledRun::marker(marker.as_str()));
        runs.push(StyledRun::code(item.code_text()));
        match item.description_text() {
            Some(desc) => {
                runs.push(StyledRun::body(": "));
                runs.push(StyledRun::body(format!("{}{}", desc, ending)));
            }
            None => runs.push(StyledRun::body(ending)),
        }

        build_paragraph(sink, ParagraphLayout::HangingListItem, runs, options);
    }

    Ok(1 + items.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::ContentRole;
    use crate::sink::MemorySink;

    fn source() -> BlockSource<'static> {
        BlockSource {
            entity: "Point",
            list: ItemList::Fields,
        }
    }

    #[test]
    fn test_empty_list_renders_title_only() {
        let mut sink = MemorySink::new();
        let count =
            render_bullet_block(&mut sink, "Methods:", &[], source(), &RenderOptions::default())
                .unwrap();

        assert_eq!(count, 1);
        assert_eq!(sink.paragraphs().len(), 1);
        assert_eq!(sink.paragraphs()[0].plain_text(), "Methods:");
        assert_eq!(sink.paragraphs()[0].layout(), ParagraphLayout::Body);
    }

    #[test]
    fn test_punctuation_and_separator() {
        let items = vec![Item::new("int x", "x coordinate"), Item::new("int y", "")];
        let mut sink = MemorySink::new();
        render_bullet_block(&mut sink, "Fields:", &items, source(), &RenderOptions::default())
            .unwrap();

        let paragraphs = sink.paragraphs();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[1].plain_text(), "–\u{a0}int x: x coordinate;");
        assert_eq!(paragraphs[2].plain_text(), "–\u{a0}int y.");
        assert_eq!(paragraphs[1].layout(), ParagraphLayout::HangingListItem);

        let texts: Vec<_> = paragraphs[1].runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["–\u{a0}", "int x", ": ", "x coordinate;"]);

        let roles: Vec<_> = paragraphs[2].runs.iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![
                ContentRole::BulletMarker,
                ContentRole::CodeToken,
                ContentRole::Body
            ]
        );
    }

    #[test]
    fn test_single_item_ends_with_period() {
        let items = vec![Item::new("(none)", "")];
        let mut sink = MemorySink::new();
        render_bullet_block(&mut sink, "Fields:", &items, source(), &RenderOptions::default())
            .unwrap();
        assert_eq!(sink.paragraphs()[1].plain_text(), "–\u{a0}(none).");
    }

    #[test]
    fn test_code_and_description_trimmed() {
        let items = vec![Item::new("  void run()  ", "  start  ")];
        let mut sink = MemorySink::new();
        render_bullet_block(&mut sink, "Methods:", &items, source(), &RenderOptions::default())
            .unwrap();
        assert_eq!(sink.paragraphs()[1].runs[1].text, "void run()");
        assert_eq!(sink.paragraphs()[1].runs[3].text, "start.");
    }

    #[test]
    fn test_blank_code_fails_before_output() {
        let items = vec![Item::new("int x", "x"), Item::new(" ", "nothing")];
        let mut sink = MemorySink::new();
        let err =
            render_bullet_block(&mut sink, "Fields:", &items, source(), &RenderOptions::default())
                .unwrap_err();

        assert!(matches!(
            err,
            Error::MalformedCatalogueEntry { index: 1, .. }
        ));
        assert!(sink.paragraphs().is_empty());
    }
}
