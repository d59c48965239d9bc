//! Declarative validation rules for the order form
//!
//! The table is plain data. [`check_form_state`] evaluates it the way a form
//! binding layer would: fields that are not editable are skipped, `required`
//! rejects missing or blank values, and `max_length` counts characters.
//! Date fields must also hold text in [`DATE_TIME_FORMAT`](super::DATE_TIME_FORMAT).

use super::date_time::parse_date_time;
use super::raw_value::OrderFormState;
use crate::state::OrderField;
use thiserror::Error;

/// Rules for one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraint {
    pub field: OrderField,
    pub required: bool,
    pub max_length: Option<usize>,
    /// False for fields shown but never changed by the user
    pub editable: bool,
}

impl FieldConstraint {
    const fn optional(field: OrderField) -> Self {
        Self {
            field,
            required: false,
            max_length: None,
            editable: true,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    const fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Check a single value against this rule
    pub fn check(&self, value: Option<&str>) -> Result<(), ConstraintViolation> {
        let value = value.filter(|v| !v.trim().is_empty());
        match value {
            None if self.required => Err(ConstraintViolation::Required { field: self.field }),
            None => Ok(()),
            Some(v) => match self.max_length {
                Some(max) if v.chars().count() > max => Err(ConstraintViolation::TooLong {
                    field: self.field,
                    max,
                    actual: v.chars().count(),
                }),
                _ => Ok(()),
            },
        }
    }
}

/// A value that breaks one of the declared rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("{} is required", .field.label())]
    Required { field: OrderField },

    #[error("{} must be at most {max} characters (got {actual})", .field.label())]
    TooLong {
        field: OrderField,
        max: usize,
        actual: usize,
    },

    #[error("{} is not a date in the form YYYY-MM-DDTHH:mm", .field.label())]
    InvalidDate { field: OrderField },
}

impl ConstraintViolation {
    pub fn field(&self) -> OrderField {
        match self {
            Self::Required { field }
            | Self::TooLong { field, .. }
            | Self::InvalidDate { field } => *field,
        }
    }
}

pub const ORDER_FORM_CONSTRAINTS: &[FieldConstraint] = &[
    FieldConstraint::optional(OrderField::Id).required().read_only(),
    FieldConstraint::optional(OrderField::Width),
    FieldConstraint::optional(OrderField::Height),
    FieldConstraint::optional(OrderField::Status).required(),
    FieldConstraint::optional(OrderField::FileName).max_length(255),
    FieldConstraint::optional(OrderField::Comment).max_length(255),
    FieldConstraint::optional(OrderField::CreatedBy)
        .required()
        .max_length(50),
    FieldConstraint::optional(OrderField::CreatedDate),
    FieldConstraint::optional(OrderField::LastModifiedBy).max_length(50),
    FieldConstraint::optional(OrderField::LastModifiedDate),
];

/// Look up the rule for a field
pub fn constraint_for(field: OrderField) -> FieldConstraint {
    ORDER_FORM_CONSTRAINTS
        .iter()
        .copied()
        .find(|c| c.field == field)
        .unwrap_or(FieldConstraint::optional(field))
}

/// Evaluate every editable rule against a form value
pub fn check_form_state(state: &OrderFormState) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();
    for constraint in ORDER_FORM_CONSTRAINTS.iter().filter(|c| c.editable) {
        let text = state.text(constraint.field);
        if let Err(violation) = constraint.check(text.as_deref()) {
            violations.push(violation);
        }
        let is_date = matches!(
            constraint.field,
            OrderField::CreatedDate | OrderField::LastModifiedDate
        );
        if is_date && parse_date_time(text.as_deref()).is_invalid() {
            violations.push(ConstraintViolation::InvalidDate {
                field: constraint.field,
            });
        }
    }
    violations
}
