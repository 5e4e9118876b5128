//! Conditional field visibility for registration option forms.
//!
//! Event organizers define registration fields, some of which only apply
//! when another field holds a particular value (e.g. bus stop choice only
//! when "travel by bus" is selected). The templates emit each such group
//! with a controlling-field name and a trigger value; this module is the
//! in-memory model of that behavior:
//!
//! - A [`Form`] is built once per rendered form via [`FormBuilder`] and holds
//!   its [`Field`]s plus the declared [`DependentGroup`]s
//! - At activation every group with a present controlling field is evaluated
//!   and armed; groups whose controlling field was omitted (the server
//!   already fixed the choice) are left at their rendered state
//! - Each genuine edit through [`Form::set_value`] re-evaluates exactly the
//!   groups the edited field controls
//! - The required constraint mirrors visibility: hidden members are never
//!   required, visible members fall back to their declared flag — otherwise
//!   the browser would refuse to submit over an invisible empty field
//!
//! There is no persistence and no global state; drop the `Form` when the
//! rendered form is torn down.

mod field;
mod form;
mod visibility;

pub use field::{CHECKBOX_CHECKED, ChoiceOption, Field, FieldKind};
pub use form::{ChangeCallback, Form, FormBuilder};
pub use visibility::DependentGroup;
