//! In-memory recording sink.

use super::{DocumentSink, ParagraphHandle};
use crate::error::Result;
use crate::model::{Paragraph, ParagraphFormat, TextRun};

/// Sink that keeps every paragraph in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySink {
    paragraphs: Vec<Paragraph>,
    commits: u32,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraphs recorded so far.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Consume the sink and return its paragraphs.
    pub fn into_paragraphs(self) -> Vec<Paragraph> {
        self.paragraphs
    }

    /// Check if `commit` has been called at least once.
    pub fn is_committed(&self) -> bool {
        self.commits > 0
    }
}

impl DocumentSink for MemorySink {
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
        self.commits += 1;
        Ok(())
    }
}
