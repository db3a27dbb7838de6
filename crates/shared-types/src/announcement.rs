use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A club notice visible to every authenticated role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
