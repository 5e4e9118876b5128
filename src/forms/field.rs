//! Form field model for registration option forms.

/// One selectable option of a [`FieldKind::Choice`] field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Stable option name, used as the field value when selected.
    pub name: String,
    /// Human-readable option title.
    pub title: String,
    /// Whether the option has reached its slot limit (shown but marked FULL).
    pub full: bool,
}

impl ChoiceOption {
    /// What: Create a choice option with open slots.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            full: false,
        }
    }
}

/// The kind of input a field renders as.
///
/// These mirror the registration field types an event organizer can define;
/// a `Section` is a heading that groups the fields following it and never
/// carries a value or a required constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Heading that groups subsequent fields.
    Section,
    /// Select with a fixed option list.
    Choice {
        /// Options the user can pick from.
        options: Vec<ChoiceOption>,
    },
    /// Single-line text input.
    String,
    /// Multi-line text input.
    Text,
    /// Checkbox.
    Checkbox {
        /// Whether the box starts checked.
        checked_by_default: bool,
    },
    /// Rating from 1 to 5.
    Rating5,
}

/// Serialized value of a checked checkbox, matching the stored form values.
pub const CHECKBOX_CHECKED: &str = "1";

/// A single field of a rendered form.
///
/// `marked_required` is the declared required-ness at render time and never
/// changes; `enforced_required` is the constraint actually applied to the
/// live form, which visibility handling keeps in sync so a hidden required
/// field cannot block submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Unique field name within the form.
    name: String,
    /// Human-readable label.
    label: String,
    /// Input kind.
    kind: FieldKind,
    /// Declared required flag, recorded before any visibility logic runs.
    marked_required: bool,
    /// Current visibility.
    visible: bool,
    /// Effective required constraint applied to the live form.
    enforced_required: bool,
    /// Current value (option name for choices, `CHECKBOX_CHECKED` or "" for
    /// checkboxes, text otherwise).
    value: String,
}

impl Field {
    /// What: Create a field in its rendered initial state.
    ///
    /// Details:
    /// - Sections never carry a required constraint regardless of `required`
    /// - Checkboxes with `checked_by_default` start with the checked value
    /// - Fields start visible with `enforced_required == marked_required`,
    ///   the state an external renderer would emit before any hiding logic
    pub(crate) fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
        required: bool,
    ) -> Self {
        let marked_required = required && !matches!(kind, FieldKind::Section);
        let value = match &kind {
            FieldKind::Checkbox {
                checked_by_default: true,
            } => CHECKBOX_CHECKED.to_string(),
            _ => String::new(),
        };
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            marked_required,
            visible: true,
            enforced_required: marked_required,
            value,
        }
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Input kind.
    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Declared required flag (before any visibility logic).
    #[must_use]
    pub const fn marked_required(&self) -> bool {
        self.marked_required
    }

    /// Current visibility.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Effective required constraint applied to the live form.
    #[must_use]
    pub const fn enforced_required(&self) -> bool {
        self.enforced_required
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub(crate) const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) const fn set_enforced_required(&mut self, enforced: bool) {
        self.enforced_required = enforced;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_starts_visible_with_declared_required() {
        let field = Field::new("first_name", "First name", FieldKind::String, true);
        assert!(field.is_visible());
        assert!(field.marked_required());
        assert!(field.enforced_required());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_section_is_never_required() {
        let field = Field::new("personal", "Personal details", FieldKind::Section, true);
        assert!(!field.marked_required());
        assert!(!field.enforced_required());
    }

    #[test]
    fn test_checkbox_default_value() {
        let checked = Field::new(
            "news",
            "Newsletter",
            FieldKind::Checkbox {
                checked_by_default: true,
            },
            false,
        );
        assert_eq!(checked.value(), CHECKBOX_CHECKED);

        let unchecked = Field::new(
            "news",
            "Newsletter",
            FieldKind::Checkbox {
                checked_by_default: false,
            },
            false,
        );
        assert_eq!(unchecked.value(), "");
    }
}
