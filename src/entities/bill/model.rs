//! Bill document

use crate::impl_owned_entity;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a bill is charging for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillType {
    Maintenance,
    Water,
    Electricity,
    Parking,
    Other,
}

/// A bill raised against a member. Read-only from the API's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,

    /// Owner reference
    pub user: Uuid,

    pub amount: f64,

    pub invoice_number: String,

    #[serde(rename = "type")]
    pub kind: BillType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
}

impl Bill {
    pub fn new(user: Uuid, amount: f64, invoice_number: impl Into<String>, kind: BillType) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            amount,
            invoice_number: invoice_number.into(),
            kind,
            due_date: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

impl_owned_entity!(Bill, "bill", "bills");
