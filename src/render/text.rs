//! Plain text preview of recorded paragraphs.

use crate::model::{Paragraph, ParagraphLayout};

/// Render paragraphs as plain text, one line per paragraph.
///
/// Body paragraphs are prefixed with four spaces and list items with eight,
/// standing in for the first-line and left indents.
pub fn to_text(paragraphs: &[Paragraph]) -> String {
    let mut output = String::new();
    for para in paragraphs {
        let indent = match para.layout() {
            ParagraphLayout::Heading => "",
            ParagraphLayout::Body => "    ",
            ParagraphLayout::HangingListItem => "        ",
        };
        output.push_str(indent);
        output.push_str(&para.plain_text());
        output.push('\n');
    }
    output
}
