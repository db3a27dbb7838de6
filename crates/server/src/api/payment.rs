use dioxus::prelude::*;
use shared_types::{Coupon, PayBookingRequest, Payment};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::store::store;

/// Pay for an approved booking. Applies the coupon if one is given and
/// confirms the booking.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn pay_booking(request: PayBookingRequest) -> Result<Payment, ServerFnError> {
    let account = super::require_member()?;
    let today = chrono::Utc::now().date_naive();
    let payment = store()
        .pay_booking(account.id, &request, today)
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(
        booking_id = request.booking_id,
        amount = payment.amount,
        "booking paid"
    );
    Ok(payment)
}

/// The caller's payment history, newest first.
#[server]
pub async fn get_payment_history() -> Result<Vec<Payment>, ServerFnError> {
    let account = super::require_member()?;
    Ok(store().payments_for(account.id))
}

/// Look up a coupon for the payment form. Rejects unknown and expired codes
/// so the discount preview matches what `pay_booking` will charge.
#[server]
pub async fn validate_coupon(code: String) -> Result<Coupon, ServerFnError> {
    use shared_types::AppError;

    super::require_member()?;
    let coupon = store()
        .coupon_by_code(&code)
        .ok_or_else(|| AppError::bad_request("Unknown coupon code").into_server_fn_error())?;
    if !coupon.is_valid_on(chrono::Utc::now().date_naive()) {
        return Err(AppError::bad_request("This coupon has expired").into_server_fn_error());
    }
    Ok(coupon)
}
