use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a paid booking. No gateway details are kept; the club treats
/// payment as an internal confirmation step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: i64,
    pub booking_id: i64,
    pub court_name: String,
    pub date: NaiveDate,
    pub slots: Vec<String>,
    /// Amount actually charged, after any coupon discount.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub paid_at: DateTime<Utc>,
}
