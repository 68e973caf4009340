use super::api;
use super::state::{RatingsAction, RatingsSlot, RatingsState};
use crate::shared::config::config;
use crate::shared::upload::{upload_file, validate_upload, UploadDomain};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn dispatch(ratings: RwSignal<RatingsState>, action: RatingsAction) {
    ratings.try_update(|s| s.apply(action));
}

/// One concurrent fetch per slot
pub fn refresh(ratings: RwSignal<RatingsState>, slots: &[RatingsSlot]) {
    let top_reviewed_limit = config().top_reviewed_limit;
    for &slot in slots {
        let Some((token, filters)) = ratings.try_update(|s| (s.begin(slot), s.filters.clone()))
        else {
            return;
        };
        log::debug!("ratings/{} fetch #{} started", slot.name(), token.seq);

        spawn_local(async move {
            let action = match api::fetch_slot(slot, &filters, top_reviewed_limit).await {
                Ok(payload) => RatingsAction::Loaded { token, payload },
                Err(error) => RatingsAction::Failed { token, error },
            };
            dispatch(ratings, action);
        });
    }
}

pub fn upload(ratings: RwSignal<RatingsState>, file: web_sys::File, replace: bool) {
    let max_bytes = config().max_upload_bytes;
    if let Err(rejection) = validate_upload(&file.name(), file.size() as u64, max_bytes) {
        log::warn!("ratings upload refused: {}", rejection);
        dispatch(ratings, RatingsAction::UploadRejected(rejection.to_string()));
        return;
    }
    if !ratings
        .try_update(|s| s.apply(RatingsAction::UploadStarted))
        .unwrap_or(false)
    {
        return;
    }

    spawn_local(async move {
        let result = upload_file(UploadDomain::Ratings, file, replace, max_bytes).await;
        if let Err(err) = &result {
            log::error!("ratings upload failed: {}", err);
        }
        dispatch(ratings, RatingsAction::UploadFinished(result));
    });
}
