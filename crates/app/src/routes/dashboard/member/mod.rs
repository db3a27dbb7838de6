pub mod approved_bookings;
pub mod confirmed_bookings;
pub mod payment;
pub mod payment_history;
pub mod profile;
