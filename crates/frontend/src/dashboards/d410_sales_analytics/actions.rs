//! Effects around the sales reducer: each fetch runs as its own local task and
//! reports back through a typed action.

use super::api;
use super::state::{SalesAction, SalesSlot, SalesState};
use crate::shared::config::config;
use crate::shared::upload::{upload_file, validate_upload, UploadDomain};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn dispatch(sales: RwSignal<SalesState>, action: SalesAction) {
    sales.try_update(|s| s.apply(action));
}

/// Start one concurrent fetch per slot with the filters as they are now
pub fn refresh(sales: RwSignal<SalesState>, slots: &[SalesSlot]) {
    for &slot in slots {
        let Some((token, filters, granularity)) =
            sales.try_update(|s| (s.begin(slot), s.filters.clone(), s.granularity))
        else {
            return;
        };
        log::debug!("sales/{} fetch #{} started", slot.name(), token.seq);

        spawn_local(async move {
            let action = match api::fetch_slot(slot, &filters, granularity).await {
                Ok(payload) => SalesAction::Loaded { token, payload },
                Err(error) => SalesAction::Failed { token, error },
            };
            dispatch(sales, action);
        });
    }
}

/// Validate, then send the file. A successful upload bumps
/// `upload_generation`, which the pages watch to refetch.
pub fn upload(sales: RwSignal<SalesState>, file: web_sys::File, replace: bool) {
    let max_bytes = config().max_upload_bytes;
    if let Err(rejection) = validate_upload(&file.name(), file.size() as u64, max_bytes) {
        log::warn!("sales upload refused: {}", rejection);
        dispatch(sales, SalesAction::UploadRejected(rejection.to_string()));
        return;
    }
    if !sales
        .try_update(|s| s.apply(SalesAction::UploadStarted))
        .unwrap_or(false)
    {
        log::debug!("sales upload already in progress");
        return;
    }

    spawn_local(async move {
        let result = upload_file(UploadDomain::Sales, file, replace, max_bytes).await;
        match &result {
            Ok(response) => log::info!("sales upload: {} records", response.records_inserted),
            Err(err) => log::error!("sales upload failed: {}", err),
        }
        dispatch(sales, SalesAction::UploadFinished(result));
    });
}
