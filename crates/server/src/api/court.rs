use dioxus::prelude::*;
use shared_types::{Court, CourtInput};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::store::store;

/// List the court catalog. Public — the marketing pages show it too.
#[server]
pub async fn get_courts() -> Result<Vec<Court>, ServerFnError> {
    Ok(store().list_courts())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(input)))]
#[server]
pub async fn create_court(input: CourtInput) -> Result<Court, ServerFnError> {
    super::require_admin()?;
    input
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    Ok(store().create_court(&input))
}

#[cfg_attr(feature = "server", tracing::instrument(skip(input)))]
#[server]
pub async fn update_court(id: i64, input: CourtInput) -> Result<Court, ServerFnError> {
    super::require_admin()?;
    input
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    store()
        .update_court(id, &input)
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_court(id: i64) -> Result<(), ServerFnError> {
    super::require_admin()?;
    store().delete_court(id).map_err(|e| e.into_server_fn_error())
}
