pub mod center;
pub mod global_context;
pub mod left;

use crate::shared::icons::icon;
use global_context::use_app_store;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +-----------+-----------------------------+
/// |  Sidebar  |   Active dashboard page     |
/// |  (Left)   |   (Center)                  |
/// +-----------+-----------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="app-layout">
            <div class="app-body">
                <Show when=move || !store.left_open.get()>
                    <div class="app-sidebar__reopen" on:click=move |_| store.toggle_left() title="Expand">
                        {icon("panel-left-open")}
                    </div>
                </Show>
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}
