//! Form domain layer
//!
//! Converts orders into form values and back ([`OrderFormService`]),
//! declares the validation rules the form must enforce, and provides the
//! editable field model used by the terminal editor.

mod constraints;
mod date_time;
mod field;
mod form_state;
mod raw_value;
mod service;

pub use constraints::{
    check_form_state, constraint_for, ConstraintViolation, FieldConstraint,
    ORDER_FORM_CONSTRAINTS,
};
pub use date_time::{format_date_time, parse_date_time, ParsedDateTime, DATE_TIME_FORMAT};
pub use field::{FieldValue, FormField};
pub use form_state::{Form, FormMode, OrderEditForm};
pub use raw_value::{FormDefaults, OrderFormState};
pub use service::OrderFormService;
