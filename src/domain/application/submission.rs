use super::entity::FormRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A validated record on its way to whoever handles applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub record: FormRecord,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(record: FormRecord) -> Self {
        Self {
            id: Uuid::now_v7(),
            record,
            submitted_at: Utc::now(),
        }
    }
}
