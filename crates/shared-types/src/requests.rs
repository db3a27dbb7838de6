use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for signing in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "A valid email address is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Request DTO for creating an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub display_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "A valid email address is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

/// Request DTO for reserving court slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateBookingRequest {
    pub court_id: i64,
    pub date: NaiveDate,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select at least one slot"))
    )]
    pub slots: Vec<String>,
}

/// Request DTO for creating or updating a court.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CourtInput {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Court name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Court type is required"))
    )]
    pub court_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Price must be non-negative"))
    )]
    pub price_per_slot: f64,
    pub image_url: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "At least one slot is required"))
    )]
    pub slots: Vec<String>,
}

/// Request DTO for creating or updating a coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CouponInput {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Code must be at least 3 characters"))
    )]
    pub code: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 100, message = "Discount must be between 1 and 100"))
    )]
    pub discount_percent: u8,
    pub description: String,
    pub expires_at: Option<NaiveDate>,
}

/// Request DTO for publishing an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AnnouncementInput {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Body is required"))
    )]
    pub body: String,
}

/// Request DTO for paying an approved booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayBookingRequest {
    pub booking_id: i64,
    pub coupon_code: Option<String>,
}
