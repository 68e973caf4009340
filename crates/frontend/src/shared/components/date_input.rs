use leptos::prelude::*;

/// Labelled native date picker. The browser renders dates in its locale;
/// the value travels as `YYYY-MM-DD`, "" when cleared.
#[component]
pub fn DateInput(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <input
                type="date"
                class="filter-field__date"
                prop:value=value
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Labelled native select with an "All" entry mapped to ""
#[component]
pub fn FilterSelect(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(default = "All")] all_label: &'static str,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <select
                class="filter-field__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value="">{all_label}</option>
                {move || options.get().into_iter().map(|(option_value, text)| {
                    let selected = option_value.clone();
                    view! {
                        <option value=option_value selected=move || value.get() == selected>{text}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
