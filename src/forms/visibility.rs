//! Dependent field groups and their visibility rule.
//!
//! A dependent group hides its member fields unless a controlling field holds
//! the group's trigger value, and mirrors the required constraint so the
//! browser cannot refuse submission over a field the user cannot see.

use crate::forms::field::Field;

/// A set of form fields gated by another field's value.
///
/// This is the in-memory counterpart of the declarative wiring the templates
/// emit (a controlling-field name and a trigger value per dependent
/// container). A field may belong to at most one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentGroup {
    /// Name of the controlling field.
    pub controls: String,
    /// Value the controlling field must hold for the group to be visible.
    pub required_value: String,
    /// Names of the member fields.
    pub members: Vec<String>,
}

impl DependentGroup {
    /// What: Create a dependent group.
    ///
    /// Inputs:
    /// - `controls`: Name of the controlling field
    /// - `required_value`: Trigger value that makes the group visible
    /// - `members`: Names of the gated member fields
    pub fn new(
        controls: impl Into<String>,
        required_value: impl Into<String>,
        members: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            controls: controls.into(),
            required_value: required_value.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// A dependent group armed at form activation.
///
/// Only groups whose controlling field exists in the form get a binding;
/// groups without one stay at their rendered state and are never touched.
/// The declared required flags are recorded here before any mutation, so
/// re-showing a group restores exactly the constraints it was rendered with.
#[derive(Debug, Clone)]
pub(crate) struct GroupBinding {
    /// The group as declared.
    pub(crate) group: DependentGroup,
    /// Member name -> declared required flag, snapshotted at activation.
    pub(crate) marked_required: Vec<(String, bool)>,
}

/// What: Apply a group's visibility rule for the controlling field's value.
///
/// Inputs:
/// - `binding`: Armed group with its recorded required flags
/// - `fields`: The form's fields
/// - `controlling_value`: Current value of the controlling field
///
/// Details:
/// - `visible == (controlling_value == required_value)`
/// - Visible members get `enforced_required = marked_required`; hidden
///   members get `enforced_required = false` regardless of the declared flag
/// - Members missing from the form are skipped individually so one absent
///   element does not break the rest of the group
pub(crate) fn evaluate(binding: &GroupBinding, fields: &mut [Field], controlling_value: &str) {
    let visible = controlling_value == binding.group.required_value;
    for (member, marked) in &binding.marked_required {
        if let Some(field) = fields.iter_mut().find(|f| f.name() == member.as_str()) {
            field.set_visible(visible);
            field.set_enforced_required(visible && *marked);
        } else {
            tracing::debug!(
                "Dependent member '{}' not present in form; skipping",
                member
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::field::FieldKind;

    fn binding() -> GroupBinding {
        GroupBinding {
            group: DependentGroup::new("status", "approved", ["f1", "f2"]),
            marked_required: vec![("f1".to_string(), true), ("f2".to_string(), false)],
        }
    }

    #[test]
    fn test_evaluate_shows_and_mirrors_required() {
        let mut fields = vec![
            Field::new("f1", "F1", FieldKind::String, true),
            Field::new("f2", "F2", FieldKind::String, false),
        ];
        evaluate(&binding(), &mut fields, "approved");
        assert!(fields[0].is_visible() && fields[0].enforced_required());
        assert!(fields[1].is_visible() && !fields[1].enforced_required());
    }

    #[test]
    fn test_evaluate_hides_and_drops_required() {
        let mut fields = vec![
            Field::new("f1", "F1", FieldKind::String, true),
            Field::new("f2", "F2", FieldKind::String, false),
        ];
        evaluate(&binding(), &mut fields, "pending");
        assert!(!fields[0].is_visible() && !fields[0].enforced_required());
        assert!(!fields[1].is_visible() && !fields[1].enforced_required());
    }

    #[test]
    fn test_evaluate_skips_missing_member() {
        // f2 missing from the form: f1 must still be handled
        let mut fields = vec![Field::new("f1", "F1", FieldKind::String, true)];
        evaluate(&binding(), &mut fields, "rejected");
        assert!(!fields[0].is_visible());
    }
}
