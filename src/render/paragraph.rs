//! Paragraph builder: layout intent plus styled runs into one sink paragraph.

use super::typography::style_for;
use super::RenderOptions;
use crate::model::{
    cm_to_twips, LineSpacing, ParagraphFormat, ParagraphLayout, StyledRun, TextRun,
};
use crate::sink::{DocumentSink, ParagraphHandle};

/// Resolve the paragraph format for a layout intent.
///
/// Line spacing is always single and space after is always zero, whatever
/// the sink's own defaults are.
pub fn format_for(layout: ParagraphLayout, options: &RenderOptions) -> ParagraphFormat {
    let indent = &options.indentation;
    let (left_indent, first_line_indent) = match layout {
        ParagraphLayout::Heading => (0, 0),
        ParagraphLayout::Body => (0, cm_to_twips(indent.body_first_line_cm)),
        ParagraphLayout::HangingListItem => (cm_to_twips(indent.list_left_cm), 0),
    };

    ParagraphFormat {
        layout,
        left_indent,
        first_line_indent,
        line_spacing: LineSpacing::Single,
        space_after: 0,
    }
}

/// Append one paragraph made of `runs`, in order.
pub fn build_paragraph<S: DocumentSink + ?Sized>(
    sink: &mut S,
    layout: ParagraphLayout,
    runs: Vec<StyledRun>,
    options: &RenderOptions,
) -> ParagraphHandle {
    let handle = sink.append_paragraph(&format_for(layout, options));
    for run in runs {
        let style = style_for(run.role, &options.typography);
        sink.append_run(
            handle,
            TextRun {
                text: run.text,
                role: run.role,
                style,
            },
        );
    }
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentRole;
    use crate::sink::MemorySink;

    #[test]
    fn test_layout_indents() {
        let options = RenderOptions::default();

        let heading = format_for(ParagraphLayout::Heading, &options);
        assert_eq!((heading.left_indent, heading.first_line_indent), (0, 0));

        let body = format_for(ParagraphLayout::Body, &options);
        assert_eq!((body.left_indent, body.first_line_indent), (0, 709));

        let item = format_for(ParagraphLayout::HangingListItem, &options);
        assert_eq!((item.left_indent, item.first_line_indent), (1417, 0));

        for format in [heading, body, item] {
            assert_eq!(format.line_spacing, LineSpacing::Single);
            assert_eq!(format.space_after, 0);
        }
    }

    #[test]
    fn test_build_paragraph_preserves_run_order() {
        let options = RenderOptions::default();
        let mut sink = MemorySink::new();

        let handle = build_paragraph(
            &mut sink,
            ParagraphLayout::Body,
            vec![
                StyledRun::body("see "),
                StyledRun::code("main()"),
                StyledRun::body("."),
            ],
            &options,
        );

        let p = &sink.paragraphs()[handle.index()];
        assert_eq!(p.plain_text(), "see main().");
        let roles: Vec<_> = p.runs.iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![ContentRole::Body, ContentRole::CodeToken, ContentRole::Body]
        );
        assert_eq!(p.runs[1].style.font_family, "Courier New");
        assert_eq!(p.runs[2].style.font_family, "Times New Roman");
    }

    #[test]
    fn test_custom_indents() {
        let options = RenderOptions::new()
            .with_body_indent_cm(1.0)
            .with_list_indent_cm(2.0);
        assert_eq!(
            format_for(ParagraphLayout::Body, &options).first_line_indent,
            567
        );
        assert_eq!(
            format_for(ParagraphLayout::HangingListItem, &options).left_indent,
            1134
        );
    }
}
