use serde::{Deserialize, Serialize};

/// A bookable court in the club's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Court {
    pub id: i64,
    pub name: String,
    /// Free-form discipline label (tennis, badminton, squash, ...).
    pub court_type: String,
    /// Price for one session slot.
    pub price_per_slot: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Session slot labels offered on this court, e.g. "06:00 - 07:00".
    pub slots: Vec<String>,
}
