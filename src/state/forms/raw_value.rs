//! Raw form values exchanged with the editable form

use crate::state::{OrderField, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order as seen by form inputs: timestamps are text in
/// [`DATE_TIME_FORMAT`](super::DATE_TIME_FORMAT).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormState {
    pub id: Option<i64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub status: Option<OrderStatus>,
    pub file_name: Option<String>,
    pub comment: Option<String>,
    pub created_by: Option<String>,
    pub created_date: Option<String>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<String>,
}

impl OrderFormState {
    /// Text view of a field, as a text input would show it
    pub fn text(&self, field: OrderField) -> Option<String> {
        match field {
            OrderField::Id => self.id.map(|v| v.to_string()),
            OrderField::Width => self.width.map(|v| v.to_string()),
            OrderField::Height => self.height.map(|v| v.to_string()),
            OrderField::Status => self.status.map(|s| s.as_str().to_string()),
            OrderField::FileName => self.file_name.clone(),
            OrderField::Comment => self.comment.clone(),
            OrderField::CreatedBy => self.created_by.clone(),
            OrderField::CreatedDate => self.created_date.clone(),
            OrderField::LastModifiedBy => self.last_modified_by.clone(),
            OrderField::LastModifiedDate => self.last_modified_date.clone(),
        }
    }
}

/// Values injected when a brand-new record is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    pub id: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renders_numbers_and_status() {
        let state = OrderFormState {
            id: Some(8122),
            width: Some(91093),
            status: Some(OrderStatus::Invoiced),
            ..Default::default()
        };
        assert_eq!(state.text(OrderField::Id).as_deref(), Some("8122"));
        assert_eq!(state.text(OrderField::Width).as_deref(), Some("91093"));
        assert_eq!(state.text(OrderField::Height), None);
        assert_eq!(state.text(OrderField::Status).as_deref(), Some("INVOICED"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let state = OrderFormState {
            file_name: Some("capacitor".to_string()),
            created_date: Some("2023-05-07T16:24".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["fileName"], "capacitor");
        assert_eq!(json["createdDate"], "2023-05-07T16:24");
        assert!(json["lastModifiedDate"].is_null());
    }
}
