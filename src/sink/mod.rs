//! Document sinks: append-only targets the formatting engine writes into.
//!
//! The engine only ever appends paragraphs, appends runs to the paragraph it
//! just opened, and commits once at the end. [`MemorySink`] records what it is
//! given; [`DocxSink`] turns the same calls into a `.docx` file.

mod docx;
mod memory;

pub use docx::{write_docx, DocxSink};
pub use memory::MemorySink;

use crate::error::Result;
use crate::model::{ParagraphFormat, TextRun};

/// Opaque reference to a paragraph previously appended to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParagraphHandle(pub(crate) usize);

impl ParagraphHandle {
    /// 0-based position of the paragraph in the document.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Capability the formatting engine renders into.
pub trait DocumentSink {
    /// Append a new, empty paragraph with the given formatting.
    fn append_paragraph(&mut self, format: &ParagraphFormat) -> ParagraphHandle;

    /// Append a styled run to a paragraph.
    fn append_run(&mut self, paragraph: ParagraphHandle, run: TextRun);

    /// Persist everything appended so far.
    fn commit(&mut self) -> Result<()>;
}
