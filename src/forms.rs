//! Card form actions on the profile and security panels.
//!
//! An outline button resets the fields of its own card; any other button
//! performs a simulated save.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Class marking a secondary (reset) action button.
pub const OUTLINE_CLASS: &str = "btn-outline";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Reset,
    Save,
}

impl FormAction {
    #[must_use]
    pub fn classify(is_outline: bool) -> Self {
        if is_outline { Self::Reset } else { Self::Save }
    }

    /// Classify from a `className` string.
    #[must_use]
    pub fn from_class_name(class_name: &str) -> Self {
        Self::classify(class_name.split_whitespace().any(|c| c == OUTLINE_CLASS))
    }
}

/// Kind of form control, as far as resetting cares.
/// Input types other than the text-like ones that browsers recognize.
const KNOWN_INPUT_TYPES: &[&str] = &[
    "button", "checkbox", "color", "date", "datetime-local", "file", "hidden", "image", "month", "number",
    "radio", "range", "reset", "search", "submit", "tel", "time", "url", "week",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    TextArea,
    Select,
    /// Checkboxes, numbers, dates, hidden inputs and the like.
    Other,
}

/// What a reset does to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldReset {
    Clear,
    FirstOption,
    Keep,
}

impl FieldKind {
    /// Classify from a tag name and, for `<input>`, its `type`.
    /// A missing or unrecognized type is a text input, as the DOM `type`
    /// property reports it.
    #[must_use]
    pub fn from_tag(tag: &str, input_type: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "textarea" => Self::TextArea,
            "select" => Self::Select,
            "input" => match input_type.to_ascii_lowercase().as_str() {
                "" | "text" => Self::Text,
                "email" => Self::Email,
                "password" => Self::Password,
                other if !KNOWN_INPUT_TYPES.contains(&other) => Self::Text,
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn reset(self) -> FieldReset {
        match self {
            Self::Text | Self::Email | Self::Password | Self::TextArea => FieldReset::Clear,
            Self::Select => FieldReset::FirstOption,
            Self::Other => FieldReset::Keep,
        }
    }
}

/// One field's value inside a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub kind: FieldKind,
    pub value: String,
    pub selected_index: usize,
}

impl FieldState {
    pub fn apply(&mut self, reset: FieldReset) {
        match reset {
            FieldReset::Clear => self.value.clear(),
            FieldReset::FirstOption => self.selected_index = 0,
            FieldReset::Keep => {}
        }
    }
}

/// The fields of one card, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardFields {
    pub id: Option<String>,
    pub fields: Vec<FieldState>,
}

impl CardFields {
    /// Clear text-like fields and rewind selects to their first option.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.apply(field.kind.reset());
        }
    }
}
