//! Editable order form

use super::constraints::{check_form_state, ConstraintViolation};
use super::field::FormField;
use super::raw_value::OrderFormState;
use crate::state::OrderField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    fn is_field_editable(&self, index: usize) -> bool {
        self.get_field(index).is_some_and(FormField::is_editable)
    }

    /// Move focus forward, skipping read-only fields
    fn next_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = (index + 1) % count;
            if self.is_field_editable(index) {
                break;
            }
        }
        self.set_active_field(index);
    }

    /// Move focus backward, skipping read-only fields
    fn prev_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if self.is_field_editable(index) {
                break;
            }
        }
        self.set_active_field(index);
    }
}

/// Whether the form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn for_state(state: &OrderFormState) -> Self {
        if state.id.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }
}

// Order Edit Form
#[derive(Debug, Clone)]
pub struct OrderEditForm {
    pub mode: FormMode,
    /// One field per [`OrderField`], in declaration order
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl OrderEditForm {
    pub fn from_form_state(state: &OrderFormState) -> Self {
        let mut form = Self {
            mode: FormMode::for_state(state),
            fields: Vec::new(),
            active_field_index: 0,
        };
        form.reset(state);
        form
    }

    /// Replace every value with those of `state` and focus the first editable field.
    ///
    /// Creation fields of a saved record are locked.
    pub fn reset(&mut self, state: &OrderFormState) {
        self.mode = FormMode::for_state(state);
        let mode = self.mode;
        self.fields = OrderField::ALL
            .into_iter()
            .map(|field| match field {
                OrderField::Id => FormField::read_only(field, state.id),
                OrderField::Width => FormField::number(field, state.width),
                OrderField::Height => FormField::number(field, state.height),
                OrderField::Status => FormField::status(field, state.status),
                OrderField::Comment => FormField::text(field, state.comment.clone(), true),
                OrderField::CreatedBy | OrderField::CreatedDate if mode == FormMode::Edit => {
                    FormField::text(field, state.text(field), false).locked()
                }
                _ => FormField::text(field, state.text(field), false),
            })
            .collect();
        self.active_field_index = (0..self.fields.len())
            .find(|&i| self.is_field_editable(i))
            .unwrap_or(0);
    }

    pub fn field(&self, field: OrderField) -> Option<&FormField> {
        self.fields.iter().find(|f| f.field == field)
    }

    fn text_of(&self, field: OrderField) -> Option<String> {
        self.field(field).and_then(FormField::as_text)
    }

    /// Read the current values back into a raw form value
    pub fn to_form_state(&self) -> OrderFormState {
        OrderFormState {
            id: self.field(OrderField::Id).and_then(FormField::as_id),
            width: self.field(OrderField::Width).and_then(FormField::as_number),
            height: self.field(OrderField::Height).and_then(FormField::as_number),
            status: self.field(OrderField::Status).and_then(FormField::as_status),
            file_name: self.text_of(OrderField::FileName),
            comment: self.text_of(OrderField::Comment),
            created_by: self.text_of(OrderField::CreatedBy),
            created_date: self.text_of(OrderField::CreatedDate),
            last_modified_by: self.text_of(OrderField::LastModifiedBy),
            last_modified_date: self.text_of(OrderField::LastModifiedDate),
        }
    }

    /// Rule violations on fields the user can still change
    pub fn violations(&self) -> Vec<ConstraintViolation> {
        check_form_state(&self.to_form_state())
            .into_iter()
            .filter(|v| self.field(v.field()).is_some_and(FormField::is_editable))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    pub fn title(&self) -> String {
        match (self.mode, self.field(OrderField::Id).and_then(FormField::as_id)) {
            (FormMode::Edit, Some(id)) => format!(" Edit Order #{id} "),
            _ => " Create Order ".to_string(),
        }
    }
}

impl Form for OrderEditForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active_field_index]
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
