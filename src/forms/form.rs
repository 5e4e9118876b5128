//! One rendered form instance with dependent-group handling.

use crate::forms::field::{Field, FieldKind};
use crate::forms::visibility::{DependentGroup, GroupBinding, evaluate};

/// Callback invoked after a genuine value edit; receives the new value.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// Observer registration for one field's value edits.
struct Observer {
    /// Field the observer watches.
    field: String,
    /// Callback run after the edit has been applied.
    callback: ChangeCallback,
}

impl std::fmt::Debug for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// A live form: ordered fields plus armed dependent groups.
///
/// One `Form` is created per rendered form and dropped when the form is torn
/// down; there is no process-wide registry. Dependent groups are evaluated
/// once at activation and re-evaluated on every genuine edit of their
/// controlling field.
#[derive(Debug)]
pub struct Form {
    /// Fields in render order.
    fields: Vec<Field>,
    /// Groups whose controlling field exists in this form.
    bindings: Vec<GroupBinding>,
    /// External observers of value edits.
    observers: Vec<Observer>,
}

impl Form {
    /// What: Start building a form.
    #[must_use]
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// Fields in render order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// What: Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// What: Get a field's current value.
    ///
    /// Output:
    /// - `Some(&str)` when the field exists, `None` otherwise
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.field(name).map(Field::value)
    }

    /// What: Register an observer for genuine value edits of one field.
    ///
    /// Inputs:
    /// - `name`: Field to watch
    /// - `callback`: Run synchronously after the edit and the dependent-group
    ///   re-evaluation it triggered
    ///
    /// Details:
    /// - Observers never fire for the visibility/required mutations this form
    ///   performs itself, only for edits made through [`Form::set_value`]
    pub fn on_value_change(&mut self, name: impl Into<String>, callback: ChangeCallback) {
        self.observers.push(Observer {
            field: name.into(),
            callback,
        });
    }

    /// What: Apply a value edit and re-evaluate the groups it controls.
    ///
    /// Inputs:
    /// - `name`: Field being edited
    /// - `value`: New value
    ///
    /// Output:
    /// - `Result<(), String>`
    ///
    /// # Errors
    /// - Returns `Err` when no field with `name` exists
    ///
    /// Details:
    /// - Writing the current value back is a no-op: no group re-evaluation
    ///   and no observer calls, so attribute churn cannot masquerade as an
    ///   edit and re-trigger handling
    /// - Groups controlled by other fields are left untouched
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), String> {
        let Some(index) = self.fields.iter().position(|f| f.name() == name) else {
            return Err(format!("No field named '{name}' in form"));
        };
        if self.fields[index].value() == value {
            return Ok(());
        }
        if let FieldKind::Choice { options } = self.fields[index].kind()
            && !value.is_empty()
            && !options.iter().any(|o| o.name == value)
        {
            tracing::debug!(
                "Value '{}' for choice field '{}' does not match any option",
                value,
                name
            );
        }
        self.fields[index].set_value(value);
        self.reevaluate_controlled_by(name);
        self.notify(name, value);
        Ok(())
    }

    /// Re-run the visibility rule for every group controlled by `name`.
    fn reevaluate_controlled_by(&mut self, name: &str) {
        let current = self
            .fields
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.value().to_string())
            .unwrap_or_default();
        for binding in &self.bindings {
            if binding.group.controls == name {
                evaluate(binding, &mut self.fields, &current);
            }
        }
    }

    /// Run observers registered for `name`.
    fn notify(&mut self, name: &str, value: &str) {
        for observer in &mut self.observers {
            if observer.field == name {
                (observer.callback)(value);
            }
        }
    }
}

/// Builder assembling a [`Form`] from fields and dependent groups.
///
/// `build` validates the declaration and performs the activation pass:
/// groups whose controlling field is absent are skipped entirely (the choice
/// was resolved server-side and no input was emitted for it), the rest get
/// their declared required flags recorded and their rule applied once.
#[derive(Debug, Default)]
pub struct FormBuilder {
    /// Fields added so far, in order.
    fields: Vec<Field>,
    /// Declared dependent groups.
    groups: Vec<DependentGroup>,
}

impl FormBuilder {
    /// What: Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Add a section heading.
    #[must_use]
    pub fn section(self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.push(Field::new(name, label, FieldKind::Section, false))
    }

    /// What: Add a field with an empty initial value.
    #[must_use]
    pub fn field(
        self,
        name: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
        required: bool,
    ) -> Self {
        self.push(Field::new(name, label, kind, required))
    }

    /// What: Add a field with a server-rendered initial value.
    #[must_use]
    pub fn field_with_value(
        self,
        name: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
        required: bool,
        value: &str,
    ) -> Self {
        let mut field = Field::new(name, label, kind, required);
        field.set_value(value);
        self.push(field)
    }

    /// What: Declare a dependent group.
    #[must_use]
    pub fn dependent_group(mut self, group: DependentGroup) -> Self {
        self.groups.push(group);
        self
    }

    fn push(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// What: Validate the declaration and activate the form.
    ///
    /// Output:
    /// - `Result<Form, String>`
    ///
    /// # Errors
    /// - Returns `Err` on duplicate field names
    /// - Returns `Err` when a field is a member of more than one dependent
    ///   group (unsupported; there is no defined precedence between groups)
    ///
    /// Details:
    /// - Groups whose controlling field is absent from the form are left at
    ///   their rendered state and never re-evaluated
    /// - For armed groups, each member's declared required flag is recorded
    ///   before the rule runs for the first time
    pub fn build(self) -> Result<Form, String> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name() == field.name()) {
                return Err(format!("Duplicate field name '{}'", field.name()));
            }
        }

        let mut seen_members: Vec<&str> = Vec::new();
        for group in &self.groups {
            for member in &group.members {
                if seen_members.contains(&member.as_str()) {
                    return Err(format!(
                        "Field '{member}' is a member of more than one dependent group"
                    ));
                }
                seen_members.push(member);
            }
        }

        let mut form = Form {
            fields: self.fields,
            bindings: Vec::new(),
            observers: Vec::new(),
        };

        for group in self.groups {
            let Some(controlling) = form.fields.iter().find(|f| f.name() == group.controls)
            else {
                // The controlling choice was fixed server-side and no input
                // was emitted for it; leave the rendered state as-is.
                tracing::debug!(
                    "Controlling field '{}' not in form; leaving group at rendered state",
                    group.controls
                );
                continue;
            };
            let current = controlling.value().to_string();
            // Every declared member is recorded; members absent from the
            // form are skipped individually by the evaluation itself.
            let marked_required = group
                .members
                .iter()
                .map(|member| {
                    (
                        member.clone(),
                        form.field(member).is_some_and(Field::marked_required),
                    )
                })
                .collect();
            let binding = GroupBinding {
                group,
                marked_required,
            };
            evaluate(&binding, &mut form.fields, &current);
            form.bindings.push(binding);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::field::ChoiceOption;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn status_kind() -> FieldKind {
        FieldKind::Choice {
            options: vec![
                ChoiceOption::new("approved", "Approved"),
                ChoiceOption::new("pending", "Pending"),
            ],
        }
    }

    fn sample_form() -> Form {
        Form::builder()
            .field_with_value("status", "Status", status_kind(), true, "pending")
            .field("f1", "F1", FieldKind::String, true)
            .field("f2", "F2", FieldKind::String, false)
            .dependent_group(DependentGroup::new("status", "approved", ["f1", "f2"]))
            .build()
            .expect("sample form should build")
    }

    #[test]
    fn test_initial_evaluation_hides_unmet_group() {
        let form = sample_form();
        let f1 = form.field("f1").expect("f1 exists");
        assert!(!f1.is_visible());
        assert!(!f1.enforced_required());
        assert!(f1.marked_required(), "declared flag is untouched");
    }

    #[test]
    fn test_initial_evaluation_shows_met_group() {
        let form = Form::builder()
            .field_with_value("status", "Status", status_kind(), true, "approved")
            .field("f1", "F1", FieldKind::String, true)
            .dependent_group(DependentGroup::new("status", "approved", ["f1"]))
            .build()
            .expect("form should build");
        let f1 = form.field("f1").expect("f1 exists");
        assert!(f1.is_visible());
        assert!(f1.enforced_required());
    }

    #[test]
    fn test_set_value_toggles_group() {
        let mut form = sample_form();
        form.set_value("status", "approved").expect("edit");
        assert!(form.field("f1").expect("f1").is_visible());
        assert!(form.field("f1").expect("f1").enforced_required());
        assert!(!form.field("f2").expect("f2").enforced_required());

        form.set_value("status", "pending").expect("edit");
        assert!(!form.field("f1").expect("f1").is_visible());
        assert!(!form.field("f1").expect("f1").enforced_required());
    }

    #[test]
    fn test_missing_controlling_field_leaves_group_alone() {
        // Server resolved the choice and emitted no "status" input
        let form = Form::builder()
            .field("f1", "F1", FieldKind::String, true)
            .dependent_group(DependentGroup::new("status", "approved", ["f1"]))
            .build()
            .expect("form should build");
        let f1 = form.field("f1").expect("f1 exists");
        assert!(f1.is_visible(), "rendered state untouched");
        assert!(f1.enforced_required(), "rendered state untouched");
    }

    #[test]
    fn test_missing_member_tolerated_through_edits() {
        // The "gone" member was never rendered; the rest of the group must
        // keep working across edits
        let mut form = Form::builder()
            .field_with_value("status", "Status", status_kind(), true, "pending")
            .field("f1", "F1", FieldKind::String, true)
            .dependent_group(DependentGroup::new("status", "approved", ["f1", "gone"]))
            .build()
            .expect("missing member must not break the build");
        assert!(form.field("gone").is_none());
        assert!(!form.field("f1").expect("f1").is_visible());

        form.set_value("status", "approved").expect("edit");
        assert!(form.field("f1").expect("f1").is_visible());
        assert!(form.field("f1").expect("f1").enforced_required());

        form.set_value("status", "pending").expect("edit");
        assert!(!form.field("f1").expect("f1").is_visible());
    }

    #[test]
    fn test_set_value_unknown_field_errors() {
        let mut form = sample_form();
        assert!(form.set_value("nope", "x").is_err());
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let err = Form::builder()
            .field("a", "A", FieldKind::String, false)
            .field("a", "A again", FieldKind::Text, false)
            .build()
            .expect_err("duplicate names must be rejected");
        assert!(err.contains("Duplicate field name 'a'"));
    }

    #[test]
    fn test_shared_member_rejected() {
        let err = Form::builder()
            .field_with_value("status", "Status", status_kind(), true, "pending")
            .field("f1", "F1", FieldKind::String, true)
            .dependent_group(DependentGroup::new("status", "approved", ["f1"]))
            .dependent_group(DependentGroup::new("status", "pending", ["f1"]))
            .build()
            .expect_err("shared members must be rejected");
        assert!(err.contains("more than one dependent group"));
    }

    #[test]
    fn test_observer_fires_on_genuine_edit_only() {
        let mut form = sample_form();
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        form.on_value_change(
            "status",
            Box::new(move |value| sink.borrow_mut().push(value.to_string())),
        );

        form.set_value("status", "approved").expect("edit");
        // Writing the same value back is not an edit
        form.set_value("status", "approved").expect("no-op");
        form.set_value("status", "pending").expect("edit");

        assert_eq!(*seen.borrow(), vec!["approved", "pending"]);
    }
}
