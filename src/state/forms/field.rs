//! Field definitions for wizard sections

/// Kind of input a field accepts. Values are stored as strings regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ShortText,
    MultiLine,
    Date,
    Number,
}

impl FieldKind {
    /// Whether the terminal front-end lets this character into the field
    pub fn accepts_char(self, c: char) -> bool {
        match self {
            FieldKind::ShortText | FieldKind::MultiLine => !c.is_control(),
            FieldKind::Date => c.is_ascii_digit() || c == '-' || c == '/',
            FieldKind::Number => c.is_ascii_digit(),
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::MultiLine)
    }
}

/// Static description of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Guidance shown under the field while editing
    pub guidance: &'static str,
    /// Shown by the preview when the field is blank
    pub placeholder: &'static str,
    /// Canned values offered as suggestion chips
    pub suggestions: &'static [&'static str],
}

impl FieldDefinition {
    /// Create an optional short text field
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::ShortText,
            required: false,
            guidance: "",
            placeholder: "",
            suggestions: &[],
        }
    }

    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn guidance(mut self, guidance: &'static str) -> Self {
        self.guidance = guidance;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn suggestions(mut self, suggestions: &'static [&'static str]) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Label with a required marker for form titles
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Suggestion following `current` in the list, wrapping around.
    /// Returns the first suggestion when `current` is not one of them.
    pub fn next_suggestion(&self, current: &str) -> Option<&'static str> {
        if self.suggestions.is_empty() {
            return None;
        }
        let next = self
            .suggestions
            .iter()
            .position(|s| *s == current)
            .map(|i| (i + 1) % self.suggestions.len())
            .unwrap_or(0);
        Some(self.suggestions[next])
    }
}
