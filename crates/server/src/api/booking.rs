use dioxus::prelude::*;
use shared_types::{Booking, CreateBookingRequest};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::store::store;

#[cfg(feature = "server")]
use shared_types::BookingStatus;

/// Reserve slots on a court. The booking starts out pending admin approval.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn create_booking(request: CreateBookingRequest) -> Result<Booking, ServerFnError> {
    let account = super::require_account()?;
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    store()
        .create_booking(&account, &request)
        .map_err(|e| e.into_server_fn_error())
}

/// The caller's bookings awaiting admin approval.
#[server]
pub async fn get_my_pending_bookings() -> Result<Vec<Booking>, ServerFnError> {
    let account = super::require_account()?;
    Ok(store().bookings_for(account.id, Some(BookingStatus::Pending)))
}

/// The caller's approved, still unpaid bookings.
#[server]
pub async fn get_my_approved_bookings() -> Result<Vec<Booking>, ServerFnError> {
    let account = super::require_member()?;
    Ok(store().bookings_for(account.id, Some(BookingStatus::Approved)))
}

/// The caller's paid bookings.
#[server]
pub async fn get_my_confirmed_bookings() -> Result<Vec<Booking>, ServerFnError> {
    let account = super::require_member()?;
    Ok(store().bookings_for(account.id, Some(BookingStatus::Confirmed)))
}

/// Withdraw one's own booking while it is still unpaid.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn cancel_booking(id: i64) -> Result<(), ServerFnError> {
    let account = super::require_account()?;
    store()
        .cancel_booking(account.id, id)
        .map_err(|e| e.into_server_fn_error())
}

/// All pending bookings, for the admin approval queue.
#[server]
pub async fn get_pending_approvals() -> Result<Vec<Booking>, ServerFnError> {
    super::require_admin()?;
    Ok(store().bookings_by_status(BookingStatus::Pending))
}

/// All confirmed bookings, for the admin overview.
#[server]
pub async fn get_all_confirmed_bookings() -> Result<Vec<Booking>, ServerFnError> {
    super::require_admin()?;
    Ok(store().bookings_by_status(BookingStatus::Confirmed))
}

/// Approve a pending booking, promoting its owner to member if needed.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn approve_booking(id: i64) -> Result<Booking, ServerFnError> {
    super::require_admin()?;
    let booking = store()
        .approve_booking(id)
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(booking_id = id, user_id = booking.user_id, "booking approved");
    Ok(booking)
}

/// Reject (remove) a pending booking.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn reject_booking(id: i64) -> Result<(), ServerFnError> {
    super::require_admin()?;
    store()
        .reject_booking(id)
        .map_err(|e| e.into_server_fn_error())
}
