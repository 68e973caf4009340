//! Sidebar with collapsible menu groups

use crate::layout::global_context::{use_app_store, DashboardPage};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    pages: Vec<DashboardPage>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "trending-up",
            pages: vec![
                DashboardPage::SalesOverview,
                DashboardPage::Trends,
                DashboardPage::Products,
                DashboardPage::Regions,
            ],
        },
        MenuGroup {
            id: "ratings",
            label: "Ratings",
            icon: "star",
            pages: vec![DashboardPage::Ratings],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let expanded_groups = RwSignal::new(
        menu_groups().iter().map(|g| g.id).collect::<Vec<&'static str>>(),
    );

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__toggle" on:click=move |_| store.toggle_left() title="Collapse">
                {icon("panel-left-close")}
            </div>
            {menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|ids| {
                                    if let Some(pos) = ids.iter().position(|id| *id == group_id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.pages.iter().map(|&page| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || store.active_page.get() == page
                                        style:padding-left="10px"
                                        on:click=move |_| store.navigate(page)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(page.icon())}
                                            <span>{page.title()}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_is_in_exactly_one_group() {
        let groups = menu_groups();
        for page in DashboardPage::ALL {
            let hits = groups.iter().filter(|g| g.pages.contains(&page)).count();
            assert_eq!(hits, 1, "{:?}", page);
        }
    }
}
