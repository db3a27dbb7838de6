use dioxus::prelude::*;
use shared_types::{Coupon, CouponInput};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::store::store;

/// List all coupons. Public — the home page shows active codes.
#[server]
pub async fn get_coupons() -> Result<Vec<Coupon>, ServerFnError> {
    Ok(store().list_coupons())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(input)))]
#[server]
pub async fn create_coupon(input: CouponInput) -> Result<Coupon, ServerFnError> {
    super::require_admin()?;
    input
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    store()
        .create_coupon(&input)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(input)))]
#[server]
pub async fn update_coupon(id: i64, input: CouponInput) -> Result<Coupon, ServerFnError> {
    super::require_admin()?;
    input
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    store()
        .update_coupon(id, &input)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_coupon(id: i64) -> Result<(), ServerFnError> {
    super::require_admin()?;
    store()
        .delete_coupon(id)
        .map_err(|e| e.into_server_fn_error())
}
