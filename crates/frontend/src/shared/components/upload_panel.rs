//! File upload controls and the page error banner.
//! Both read and write their domain's slice through the `AppStore`.

use crate::layout::global_context::use_app_store;
use crate::shared::icons::icon;
use crate::shared::upload::{UploadDomain, UploadState, ACCEPT_ATTR};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Choose a file, pick replace mode, upload. One upload per domain at a time.
#[component]
pub fn UploadPanel(
    domain: UploadDomain,
    /// Initial state of the "Replace existing data" checkbox
    #[prop(optional)]
    default_replace: bool,
) -> impl IntoView {
    let store = use_app_store();
    // web_sys::File is !Send
    let selected = StoredValue::new_local(None::<web_sys::File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let replace = RwSignal::new(default_replace);

    let uploading = Signal::derive(move || store.upload_state(domain).is_uploading());
    let success = Signal::derive(move || store.upload_state(domain).success_message(domain));

    let on_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        set_file_name.set(file.as_ref().map(|f| f.name()));
        selected.set_value(file);
        store.clear_upload(domain);
    };

    let on_upload = move |_| {
        let Some(file) = selected.get_value() else {
            return;
        };
        store.upload(domain, file, replace.get_untracked());
    };

    // Settled uploads forget the chosen file
    Effect::new(move |_| {
        if matches!(store.upload_state(domain), UploadState::Succeeded { .. }) {
            selected.set_value(None);
            set_file_name.set(None);
        }
    });

    view! {
        <div class="upload-panel">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <label class="upload-panel__choose">
                    {icon("file")}
                    <span>{move || file_name.get().unwrap_or_else(|| "Choose file".to_string())}</span>
                    <input
                        type="file"
                        accept=ACCEPT_ATTR
                        style="display: none;"
                        on:change=on_file_change
                        disabled=move || uploading.get()
                    />
                </label>
                <Checkbox checked=replace label="Replace existing data" />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_upload
                    disabled=Signal::derive(move || uploading.get() || file_name.get().is_none())
                >
                    {icon("upload")}
                    {move || if uploading.get() { "Uploading…" } else { "Upload" }}
                </Button>
            </Flex>
            {move || success.get().map(|message| view! {
                <div class="upload-panel__result">
                    <MessageBar intent=MessageBarIntent::Success>
                        <span>{message}</span>
                        <button class="message-close" title="Close" on:click=move |_| store.clear_upload(domain)>
                            {icon("x")}
                        </button>
                    </MessageBar>
                </div>
            })}
        </div>
    }
}

/// Dismissible banner for the domain's last fetch or upload error
#[component]
pub fn ErrorBanner(domain: UploadDomain) -> impl IntoView {
    let store = use_app_store();

    move || {
        store.error(domain).map(|message| {
            view! {
                <div class="error-banner">
                    <MessageBar intent=MessageBarIntent::Error>
                        {icon("alert-circle")}
                        <span>{message}</span>
                        <button class="message-close" title="Dismiss" on:click=move |_| store.dismiss_error(domain)>
                            {icon("x")}
                        </button>
                    </MessageBar>
                </div>
            }
        })
    }
}
