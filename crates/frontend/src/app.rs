use crate::layout::global_context::AppStore;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The store lives as long as the app; pages read it through context
    provide_context(AppStore::new());

    view! {
        <Shell />
    }
}
