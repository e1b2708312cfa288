//! Rendering options and configuration.

use crate::model::EntityKind;

/// Options for rendering a catalogue.
///
/// This is the single source of every styling constant: fonts, indents,
/// labels and the list marker. It is passed by reference into the render
/// pass and never mutated by it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Font families and size
    pub typography: Typography,

    /// Indent measurements
    pub indentation: Indentation,

    /// Localized labels
    pub labels: Labels,

    /// Character that starts every list item
    pub list_marker: char,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the serif (body) font family.
    pub fn with_serif_font(mut self, family: impl Into<String>) -> Self {
        self.typography.serif_family = family.into();
        self
    }

    /// Set the monospaced (code) font family.
    pub fn with_mono_font(mut self, family: impl Into<String>) -> Self {
        self.typography.mono_family = family.into();
        self
    }

    /// Set the font size in points.
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.typography.point_size = size.clamp(1.0, 1638.0);
        self
    }

    /// Set the body first-line indent in centimetres.
    pub fn with_body_indent_cm(mut self, cm: f32) -> Self {
        self.indentation.body_first_line_cm = cm.max(0.0);
        self
    }

    /// Set the list item left indent in centimetres.
    pub fn with_list_indent_cm(mut self, cm: f32) -> Self {
        self.indentation.list_left_cm = cm.max(0.0);
        self
    }

    /// Set the labels.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            typography: Typography::default(),
            indentation: Indentation::default(),
            labels: Labels::default(),
            list_marker: '\u{2013}',
        }
    }
}

/// Font configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    /// Family for headings, descriptions, markers and punctuation
    pub serif_family: String,

    /// Family for entity names and code signatures
    pub mono_family: String,

    /// Font size in points, shared by both families
    pub point_size: f32,

    /// Bold text
    pub bold: bool,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            serif_family: "Times New Roman".to_string(),
            mono_family: "Courier New".to_string(),
            point_size: 14.0,
            bold: false,
        }
    }
}

/// Indent measurements in centimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct Indentation {
    /// First-line indent of body paragraphs
    pub body_first_line_cm: f32,

    /// Left indent of list items
    pub list_left_cm: f32,
}

impl Default for Indentation {
    fn default() -> Self {
        Self {
            body_first_line_cm: 1.25,
            list_left_cm: 2.5,
        }
    }
}

/// Localized labels used around entity content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Heading label for classes
    pub class: String,

    /// Heading label for structures
    pub structure: String,

    /// Title above the field list
    pub fields: String,

    /// Title above the method list
    pub methods: String,
}

impl Labels {
    /// English labels.
    pub fn english() -> Self {
        Self {
            class: "Class".to_string(),
            structure: "Structure".to_string(),
            fields: "Fields:".to_string(),
            methods: "Methods:".to_string(),
        }
    }

    /// Russian labels.
    pub fn russian() -> Self {
        Self {
            class: "Класс".to_string(),
            structure: "Структура".to_string(),
            fields: "Поля:".to_string(),
            methods: "Методы:".to_string(),
        }
    }

    /// Look up labels by language code ("en", "ru").
    pub fn for_language(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::english()),
            "ru" | "russian" => Some(Self::russian()),
            _ => None,
        }
    }

    /// Heading label for an entity kind.
    pub fn kind_label(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Class => &self.class,
            EntityKind::Structure => &self.structure,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}
