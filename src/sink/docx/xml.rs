//! WordprocessingML part serialization.

use crate::error::{Error, Result};
use crate::model::{Paragraph, ParagraphFormat, TextRun};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const NS_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Single line spacing in 240ths of a line.
const SINGLE_LINE: &str = "240";

/// Thin wrapper that maps writer failures into [`Error::Xml`].
struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    fn new() -> Result<Self> {
        let mut writer = Self {
            inner: Writer::new(Vec::new()),
        };
        writer.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(writer)
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.inner
            .write_event(event)
            .map_err(|e| Error::Xml(e.to_string()))
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.write(Event::Start(tag))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.write(Event::Empty(tag))
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.write(Event::Text(BytesText::new(text)))
    }

    fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

/// `[Content_Types].xml`
pub(super) fn content_types() -> Result<Vec<u8>> {
    let mut w = XmlWriter::new()?;
    w.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    w.empty(
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    w.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;
    w.empty(
        "Override",
        &[
            ("PartName", "/word/document.xml"),
            (
                "ContentType",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            ),
        ],
    )?;
    w.empty(
        "Override",
        &[
            ("PartName", "/word/styles.xml"),
            (
                "ContentType",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
            ),
        ],
    )?;
    w.end("Types")?;
    Ok(w.into_bytes())
}

/// `_rels/.rels`
pub(super) fn package_rels() -> Result<Vec<u8>> {
    relationships(&[(
        "rId1",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
        "word/document.xml",
    )])
}

/// `word/_rels/document.xml.rels`
pub(super) fn document_rels() -> Result<Vec<u8>> {
    relationships(&[(
        "rId1",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles",
        "styles.xml",
    )])
}

fn relationships(entries: &[(&str, &str, &str)]) -> Result<Vec<u8>> {
    let mut w = XmlWriter::new()?;
    w.start("Relationships", &[("xmlns", NS_PKG_REL)])?;
    for &(id, kind, target) in entries {
        w.empty(
            "Relationship",
            &[("Id", id), ("Type", kind), ("Target", target)],
        )?;
    }
    w.end("Relationships")?;
    Ok(w.into_bytes())
}

/// `word/styles.xml`: a Normal style with no space after and single spacing.
pub(super) fn styles() -> Result<Vec<u8>> {
    let mut w = XmlWriter::new()?;
    w.start("w:styles", &[("xmlns:w", NS_MAIN)])?;
    w.start("w:docDefaults", &[])?;
    w.start("w:pPrDefault", &[])?;
    w.start("w:pPr", &[])?;
    spacing(&mut w)?;
    w.end("w:pPr")?;
    w.end("w:pPrDefault")?;
    w.end("w:docDefaults")?;

    w.start(
        "w:style",
        &[
            ("w:type", "paragraph"),
            ("w:default", "1"),
            ("w:styleId", "Normal"),
        ],
    )?;
    w.empty("w:name", &[("w:val", "Normal")])?;
    w.empty("w:qFormat", &[])?;
    w.end("w:style")?;
    w.end("w:styles")?;
    Ok(w.into_bytes())
}

/// `word/document.xml`
pub(super) fn document(paragraphs: &[Paragraph]) -> Result<Vec<u8>> {
    let mut w = XmlWriter::new()?;
    w.start("w:document", &[("xmlns:w", NS_MAIN), ("xmlns:r", NS_REL)])?;
    w.start("w:body", &[])?;

    for para in paragraphs {
        paragraph(&mut w, para)?;
    }

    // A4 portrait
    w.start("w:sectPr", &[])?;
    w.empty("w:pgSz", &[("w:w", "11906"), ("w:h", "16838")])?;
    w.empty(
        "w:pgMar",
        &[
            ("w:top", "1134"),
            ("w:right", "850"),
            ("w:bottom", "1134"),
            ("w:left", "1701"),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    w.end("w:sectPr")?;

    w.end("w:body")?;
    w.end("w:document")?;
    Ok(w.into_bytes())
}

fn spacing(w: &mut XmlWriter) -> Result<()> {
    w.empty(
        "w:spacing",
        &[
            ("w:after", "0"),
            ("w:line", SINGLE_LINE),
            ("w:lineRule", "auto"),
        ],
    )
}

fn paragraph(w: &mut XmlWriter, para: &Paragraph) -> Result<()> {
    w.start("w:p", &[])?;
    paragraph_properties(w, &para.format)?;
    for run in &para.runs {
        text_run(w, run)?;
    }
    w.end("w:p")
}

fn paragraph_properties(w: &mut XmlWriter, format: &ParagraphFormat) -> Result<()> {
    let space_after = format.space_after.to_string();
    let left = format.left_indent.to_string();
    let first_line = format.first_line_indent.to_string();

    w.start("w:pPr", &[])?;
    w.empty(
        "w:spacing",
        &[
            ("w:after", space_after.as_str()),
            ("w:line", SINGLE_LINE),
            ("w:lineRule", "auto"),
        ],
    )?;
    w.empty("w:ind", &[("w:left", left.as_str()), ("w:firstLine", first_line.as_str())])?;
    w.end("w:pPr")
}

fn text_run(w: &mut XmlWriter, run: &TextRun) -> Result<()> {
    let font = run.style.font_family.as_str();
    let size = run.style.half_points().to_string();

    w.start("w:r", &[])?;
    w.start("w:rPr", &[])?;
    w.empty(
        "w:rFonts",
        &[
            ("w:ascii", font),
            ("w:hAnsi", font),
            ("w:eastAsia", font),
            ("w:cs", font),
        ],
    )?;
    if run.style.bold {
        w.empty("w:b", &[])?;
    } else {
        w.empty("w:b", &[("w:val", "0")])?;
    }
    w.empty("w:sz", &[("w:val", size.as_str())])?;
    w.empty("w:szCs", &[("w:val", size.as_str())])?;
    w.end("w:rPr")?;
    w.start("w:t", &[("xml:space", "preserve")])?;
    w.text(&run.text)?;
    w.end("w:t")?;
    w.end("w:r")
}
