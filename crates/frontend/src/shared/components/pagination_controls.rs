use crate::shared::icons::icon;
use leptos::prelude::*;

/// "11–20 of 31"; "0–0 of 0" for an empty table
pub fn range_label(page: usize, rows_per_page: usize, total: usize) -> String {
    if total == 0 {
        return "0–0 of 0".to_string();
    }
    let first = (page * rows_per_page + 1).min(total);
    let last = ((page + 1) * rows_per_page).min(total);
    format!("{}–{} of {}", first, last, total)
}

/// Table footer: page size select, visible range and page navigation.
/// `current_page` is 0-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    /// Total row count across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)] page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(10);
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <label class="pagination-controls__size">
                "Rows per page:"
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                        on_page_size_change.run(size);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(0, 10, 31), "1–10 of 31");
        assert_eq!(range_label(3, 10, 31), "31–31 of 31");
        assert_eq!(range_label(1, 25, 40), "26–40 of 40");
    }

    #[test]
    fn test_range_label_empty() {
        assert_eq!(range_label(0, 10, 0), "0–0 of 0");
    }
}
