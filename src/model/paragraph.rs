//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// Twips per centimetre (1440 twips per inch).
const TWIPS_PER_CM: f32 = 1440.0 / 2.54;

/// Convert centimetres to twips, rounding to the nearest whole twip.
pub fn cm_to_twips(cm: f32) -> u32 {
    (cm.max(0.0) * TWIPS_PER_CM).round() as u32
}

/// Styling category of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentRole {
    /// Title and heading text
    Heading,
    /// Descriptions, separators and punctuation
    Body,
    /// Entity names and code signatures
    CodeToken,
    /// List marker preceding a code token
    BulletMarker,
}

/// A contiguous span of uniformly-styled text, before typography is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// The text content
    pub text: String,

    /// Styling category
    pub role: ContentRole,
}

impl StyledRun {
    /// Create a run with an explicit role.
    pub fn new(text: impl Into<String>, role: ContentRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    /// Create a body run.
    pub fn body(text: impl Into<String>) -> Self {
        Self::new(text, ContentRole::Body)
    }

    /// Create a code run.
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, ContentRole::CodeToken)
    }

    /// Create a heading run.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, ContentRole::Heading)
    }

    /// Create a bullet marker run.
    pub fn marker(text: impl Into<String>) -> Self {
        Self::new(text, ContentRole::BulletMarker)
    }
}

/// Paragraph-level layout intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphLayout {
    /// No indentation at all
    Heading,
    /// Standard first-line ("red line") indent
    Body,
    /// Fixed left indent, zero first-line indent
    HangingListItem,
}

/// Line spacing rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSpacing {
    /// Single line spacing
    #[default]
    Single,
}

/// Resolved paragraph formatting handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    /// Layout intent this format was resolved from
    pub layout: ParagraphLayout,

    /// Left indent in twips
    pub left_indent: u32,

    /// First line indent in twips
    pub first_line_indent: u32,

    /// Line spacing rule
    pub line_spacing: LineSpacing,

    /// Space after paragraph in twips
    pub space_after: u32,
}

/// Resolved character formatting for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStyle {
    /// Font family name
    pub font_family: String,

    /// Font size in points
    pub point_size: f32,

    /// Bold text
    pub bold: bool,
}

impl RunStyle {
    /// Font size in half-points, the unit used by WordprocessingML.
    pub fn half_points(&self) -> u32 {
        (self.point_size.max(0.0) * 2.0).round() as u32
    }
}

/// A run of text with resolved styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Role the style was resolved from
    pub role: ContentRole,

    /// Character formatting
    pub style: RunStyle,
}

/// A paragraph as recorded by a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph formatting
    pub format: ParagraphFormat,

    /// Runs in reading order
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Create an empty paragraph with the given format.
    pub fn new(format: ParagraphFormat) -> Self {
        Self {
            format,
            runs: Vec::new(),
        }
    }

    /// Add a styled run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Layout intent of the paragraph.
    pub fn layout(&self) -> ParagraphLayout {
        self.format.layout
    }

    /// Check if the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}
