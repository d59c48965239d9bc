//! Form field value objects

use super::constraints::{constraint_for, FieldConstraint};
use crate::state::{OrderField, OrderStatus};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(Option<u32>),
    Status(Option<OrderStatus>),
    /// Shown but never edited
    ReadOnly(Option<i64>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: OrderField,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub constraint: FieldConstraint,
}

impl FormField {
    fn new(field: OrderField, value: FieldValue, is_multiline: bool) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            value,
            is_multiline,
            constraint: constraint_for(field),
        }
    }

    /// Create a text field; `None` shows as an empty input
    pub fn text(field: OrderField, value: Option<String>, is_multiline: bool) -> Self {
        Self::new(field, FieldValue::Text(value.unwrap_or_default()), is_multiline)
    }

    /// Create a non-negative number field
    pub fn number(field: OrderField, value: Option<u32>) -> Self {
        Self::new(field, FieldValue::Number(value), false)
    }

    /// Create a status selector
    pub fn status(field: OrderField, value: Option<OrderStatus>) -> Self {
        Self::new(field, FieldValue::Status(value), false)
    }

    /// Create a field that displays an identifier without allowing edits
    pub fn read_only(field: OrderField, value: Option<i64>) -> Self {
        Self::new(field, FieldValue::ReadOnly(value), false)
    }

    /// Keep the value but stop accepting edits
    pub fn locked(mut self) -> Self {
        self.constraint.editable = false;
        self
    }

    pub fn name(&self) -> &'static str {
        self.field.key()
    }

    pub fn is_editable(&self) -> bool {
        self.constraint.editable && !matches!(self.value, FieldValue::ReadOnly(_))
    }

    /// Text value, `None` when the input is empty
    pub fn as_text(&self) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) if s.is_empty() => None,
            FieldValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u32> {
        match &self.value {
            FieldValue::Number(n) => *n,
            _ => None,
        }
    }

    pub fn as_status(&self) -> Option<OrderStatus> {
        match &self.value {
            FieldValue::Status(s) => *s,
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<i64> {
        match &self.value {
            FieldValue::ReadOnly(id) => *id,
            _ => None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number(n) => {
                if let Some(d) = c.to_digit(10) {
                    *n = n.unwrap_or(0).checked_mul(10).and_then(|v| v.checked_add(d)).or(*n);
                }
            }
            FieldValue::Status(_) | FieldValue::ReadOnly(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Number(n) => *n = n.and_then(|v| (v >= 10).then_some(v / 10)),
            FieldValue::Status(s) => *s = None,
            FieldValue::ReadOnly(_) => {}
        }
    }

    /// Cycle a status field forwards
    pub fn next_option(&mut self) {
        if let FieldValue::Status(s) = &mut self.value {
            *s = Some(s.map_or(OrderStatus::Available, |s| s.next()));
        }
    }

    /// Cycle a status field backwards
    pub fn prev_option(&mut self) {
        if let FieldValue::Status(s) = &mut self.value {
            *s = Some(s.map_or(OrderStatus::Completed, |s| s.prev()));
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Number(n) => *n = None,
            FieldValue::Status(s) => *s = None,
            FieldValue::ReadOnly(_) => {}
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.map(|v| v.to_string()).unwrap_or_default(),
            FieldValue::Status(Some(s)) => format!("◀ {} ▶", s.label()),
            FieldValue::Status(None) => "◀ (none) ▶".to_string(),
            FieldValue::ReadOnly(Some(id)) => id.to_string(),
            FieldValue::ReadOnly(None) => "(new)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_edits() {
        let mut field = FormField::text(OrderField::FileName, None, false);
        assert_eq!(field.as_text(), None);
        field.push_char('a');
        field.push_char('b');
        assert_eq!(field.as_text().as_deref(), Some("ab"));
        field.pop_char();
        assert_eq!(field.as_text().as_deref(), Some("a"));
        field.clear();
        assert_eq!(field.as_text(), None);
    }

    #[test]
    fn test_number_field_accepts_digits_only() {
        let mut field = FormField::number(OrderField::Width, None);
        field.push_char('4');
        field.push_char('x');
        field.push_char('2');
        assert_eq!(field.as_number(), Some(42));
    }

    #[test]
    fn test_number_field_backspace_to_empty() {
        let mut field = FormField::number(OrderField::Height, Some(12));
        field.pop_char();
        assert_eq!(field.as_number(), Some(1));
        field.pop_char();
        assert_eq!(field.as_number(), None);
    }

    #[test]
    fn test_number_field_ignores_overflow() {
        let mut field = FormField::number(OrderField::Width, Some(u32::MAX));
        field.push_char('9');
        assert_eq!(field.as_number(), Some(u32::MAX));
    }

    #[test]
    fn test_status_field_cycles() {
        let mut field = FormField::status(OrderField::Status, None);
        field.next_option();
        assert_eq!(field.as_status(), Some(OrderStatus::Available));
        field.next_option();
        assert_eq!(field.as_status(), Some(OrderStatus::InProgress));
        field.prev_option();
        field.prev_option();
        assert_eq!(field.as_status(), Some(OrderStatus::Completed));
        field.pop_char();
        assert_eq!(field.as_status(), None);
    }

    #[test]
    fn test_read_only_ignores_input() {
        let mut field = FormField::read_only(OrderField::Id, Some(8122));
        field.push_char('1');
        field.pop_char();
        field.clear();
        assert_eq!(field.as_id(), Some(8122));
        assert!(!field.is_editable());
        assert_eq!(field.display_value(), "8122");
    }

    #[test]
    fn test_locked_text_field_is_not_editable() {
        let field = FormField::text(OrderField::CreatedBy, Some("Dynamic".to_string()), false).locked();
        assert!(!field.is_editable());
        assert_eq!(field.as_text().as_deref(), Some("Dynamic"));
    }

    #[test]
    fn test_field_carries_its_constraint() {
        let field = FormField::text(OrderField::CreatedBy, None, false);
        assert_eq!(field.name(), "createdBy");
        assert_eq!(field.label, "Created By");
        assert!(field.constraint.required);
        assert_eq!(field.constraint.max_length, Some(50));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(
            FormField::status(OrderField::Status, Some(OrderStatus::Invoiced)).display_value(),
            "◀ Invoiced ▶"
        );
        assert_eq!(
            FormField::read_only(OrderField::Id, None).display_value(),
            "(new)"
        );
        assert_eq!(FormField::number(OrderField::Width, None).display_value(), "");
    }
}
