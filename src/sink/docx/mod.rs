//! DOCX file sink.

mod xml;

use super::{DocumentSink, ParagraphHandle};
use crate::error::{Error, Result};
use crate::model::{Paragraph, ParagraphFormat, TextRun};
use std::fs::{self, File, OpenOptions};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Write a complete DOCX package for `paragraphs` into `writer`.
///
/// Entries carry a fixed timestamp, so equal paragraphs give equal bytes.
pub fn write_docx<W: Write + Seek>(writer: W, paragraphs: &[Paragraph]) -> Result<W> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let parts = [
        ("[Content_Types].xml", xml::content_types()?),
        ("_rels/.rels", xml::package_rels()?),
        ("word/_rels/document.xml.rels", xml::document_rels()?),
        ("word/styles.xml", xml::styles()?),
        ("word/document.xml", xml::document(paragraphs)?),
    ];

    let mut zip = ZipWriter::new(writer);
    for (name, content) in parts {
        zip.start_file(name, options)?;
        zip.write_all(&content)?;
    }
    Ok(zip.finish()?)
}

/// Sink that writes a `.docx` file on commit.
///
/// The output is staged in a sibling `<name>.part` file created by
/// [`DocxSink::create`] and renamed over the target only after the package
/// has been fully written and synced. A sink dropped without a successful
/// commit removes its staging file, so the target path never holds a
/// partial document.
#[derive(Debug)]
pub struct DocxSink {
    target: PathBuf,
    staging: PathBuf,
    file: Option<File>,
    paragraphs: Vec<Paragraph>,
    committed: bool,
}

impl DocxSink {
    /// Acquire the output for `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let target = path.as_ref().to_path_buf();
        let mut name = target
            .file_name()
            .ok_or_else(|| unavailable(&target, "path has no file name"))?
            .to_os_string();
        name.push(".part");
        let staging = target.with_file_name(name);

        // A pre-existing staging file is not ours to truncate or remove.
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&staging)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    unavailable(&target, format!("{} already exists", staging.display()))
                }
                _ => unavailable(&target, e),
            })?;
        log::debug!("Staging document at {}", staging.display());

        Ok(Self {
            target,
            staging,
            file: Some(file),
            paragraphs: Vec::new(),
            committed: false,
        })
    }

    /// Final output path.
    pub fn path(&self) -> &Path {
        &self.target
    }

    /// Paragraphs appended so far.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Check if the document has been written to its target.
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    fn finalize(&mut self) -> Result<()> {
        let file = self
            .file
            .take()
            .ok_or_else(|| Error::Other("document already committed".to_string()))?;

        let file = write_docx(file, &self.paragraphs)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&self.staging, &self.target)?;
        Ok(())
    }
}

impl DocumentSink for DocxSink {
    fn append_paragraph(&mut self, format: &ParagraphFormat) -> ParagraphHandle {
        self.paragraphs.push(Paragraph::new(format.clone()));
        ParagraphHandle(self.paragraphs.len() - 1)
    }

    fn append_run(&mut self, paragraph: ParagraphHandle, run: TextRun) {
        if let Some(p) = self.paragraphs.get_mut(paragraph.0) {
            p.add_run(run);
        }
    }

    fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Ok(());
        }
        self.finalize()
            .map_err(|e| unavailable(&self.target, e))?;
        self.committed = true;
        log::debug!(
            "Wrote {} paragraphs to {}",
            self.paragraphs.len(),
            self.target.display()
        );
        Ok(())
    }
}

impl Drop for DocxSink {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        self.file.take();
        if fs::remove_file(&self.staging).is_ok() {
            log::warn!(
                "Discarded uncommitted document for {}",
                self.target.display()
            );
        }
    }
}

fn unavailable(path: &Path, reason: impl std::fmt::Display) -> Error {
    Error::SinkUnavailable {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
