use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Spinner;

/// Header of a dashboard page: icon, title, subtitle and an actions slot
/// (upload controls live there).
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    #[prop(optional, into)] subtitle: MaybeProp<String>,

    /// Icon name from the `icon()` helper
    #[prop(optional)]
    icon_name: Option<&'static str>,

    /// Shows a spinner next to the title while the page fetches
    #[prop(optional, into)]
    busy: Signal<bool>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! { <div class="page-header__icon">{icon(name)}</div> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">
                        {title}
                        <Show when=move || busy.get()>
                            <span class="page-header__busy"><Spinner /></span>
                        </Show>
                    </h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
