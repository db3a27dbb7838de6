use dioxus::prelude::*;
use shared_types::{Announcement, AnnouncementInput};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::store::store;

/// Club announcements, newest first. Any authenticated role may read them.
#[server]
pub async fn get_announcements() -> Result<Vec<Announcement>, ServerFnError> {
    super::require_account()?;
    Ok(store().list_announcements())
}

/// Publish an announcement.
#[cfg_attr(feature = "server", tracing::instrument(skip(input)))]
#[server]
pub async fn make_announcement(input: AnnouncementInput) -> Result<Announcement, ServerFnError> {
    super::require_admin()?;
    input
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;
    Ok(store().create_announcement(&input))
}
