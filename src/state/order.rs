//! Order entity definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Available,
    InProgress,
    Invoiced,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        Self::Available,
        Self::InProgress,
        Self::Invoiced,
        Self::Completed,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Available => Self::InProgress,
            Self::InProgress => Self::Invoiced,
            Self::Invoiced => Self::Completed,
            Self::Completed => Self::Available,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Available => Self::Completed,
            Self::InProgress => Self::Available,
            Self::Invoiced => Self::InProgress,
            Self::Completed => Self::Invoiced,
        }
    }

    /// Wire name, as sent to and received from the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::InProgress => "IN_PROGRESS",
            Self::Invoiced => "INVOICED",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InProgress => "In progress",
            Self::Invoiced => "Invoiced",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Names of the order fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Id,
    Width,
    Height,
    Status,
    FileName,
    Comment,
    CreatedBy,
    CreatedDate,
    LastModifiedBy,
    LastModifiedDate,
}

impl OrderField {
    pub const ALL: [OrderField; 10] = [
        Self::Id,
        Self::Width,
        Self::Height,
        Self::Status,
        Self::FileName,
        Self::Comment,
        Self::CreatedBy,
        Self::CreatedDate,
        Self::LastModifiedBy,
        Self::LastModifiedDate,
    ];

    /// Wire key of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Width => "width",
            Self::Height => "height",
            Self::Status => "status",
            Self::FileName => "fileName",
            Self::Comment => "comment",
            Self::CreatedBy => "createdBy",
            Self::CreatedDate => "createdDate",
            Self::LastModifiedBy => "lastModifiedBy",
            Self::LastModifiedDate => "lastModifiedDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Status => "Status",
            Self::FileName => "File Name",
            Self::Comment => "Comment",
            Self::CreatedBy => "Created By",
            Self::CreatedDate => "Created Date",
            Self::LastModifiedBy => "Last Modified By",
            Self::LastModifiedDate => "Last Modified Date",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An order as exchanged with the backend.
///
/// Every field is optional so the same type covers records being created
/// (`id` is `None`) and partially populated records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub status: Option<OrderStatus>,
    pub file_name: Option<String>,
    pub comment: Option<String>,
    pub created_by: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Order {
    /// True when the record has not been persisted yet
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Record a modification made by `auditor` at `at`.
    ///
    /// New records without an author are attributed to the auditor as well.
    pub fn touch(&mut self, auditor: Option<&str>, at: DateTime<Utc>) {
        self.last_modified_date = Some(at);
        if let Some(auditor) = auditor {
            self.last_modified_by = Some(auditor.to_string());
            let has_author = self
                .created_by
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty());
            if self.is_new() && !has_author {
                self.created_by = Some(auditor.to_string());
            }
        }
    }
}
