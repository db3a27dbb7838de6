use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a booking request.
///
/// `Pending` until an admin approves it; `Approved` bookings are unpaid and
/// wait on the member; paying converts them to `Confirmed`. Rejection and
/// cancellation remove the booking instead of adding a status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Approved,
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Confirmed => "confirmed",
        }
    }
}

/// A court reservation for one or more slots on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    /// Denormalized for the admin approval lists.
    pub user_email: String,
    pub court_id: i64,
    /// Denormalized for list rendering.
    pub court_name: String,
    pub date: NaiveDate,
    pub slots: Vec<String>,
    /// Total price across the requested slots.
    pub price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
