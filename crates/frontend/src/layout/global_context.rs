use crate::dashboards::d410_sales_analytics::{actions as sales_actions, SalesAction, SalesState};
use crate::dashboards::d420_product_ratings::{actions as ratings_actions, RatingsAction, RatingsState};
use crate::shared::config::config;
use crate::shared::upload::{UploadDomain, UploadState};
use leptos::prelude::*;

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPage {
    #[default]
    SalesOverview,
    Trends,
    Products,
    Regions,
    Ratings,
}

impl DashboardPage {
    pub const ALL: [DashboardPage; 5] = [
        Self::SalesOverview,
        Self::Trends,
        Self::Products,
        Self::Regions,
        Self::Ratings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::SalesOverview => "Sales Analytics",
            Self::Trends => "Revenue Trends",
            Self::Products => "Product Sales",
            Self::Regions => "Regional Sales",
            Self::Ratings => "Product Ratings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::SalesOverview => "layout-dashboard",
            Self::Trends => "trending-up",
            Self::Products => "package",
            Self::Regions => "map-pin",
            Self::Ratings => "star",
        }
    }
}

/// Application store: one slice per dashboard plus shell state.
/// Owned by `App` and handed down through context.
#[derive(Clone, Copy)]
pub struct AppStore {
    pub sales: RwSignal<SalesState>,
    pub ratings: RwSignal<RatingsState>,
    pub active_page: RwSignal<DashboardPage>,
    pub left_open: RwSignal<bool>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            sales: RwSignal::new(SalesState::with_rows_per_page(
                config().default_rows_per_page,
            )),
            ratings: RwSignal::new(RatingsState::with_rows_per_page(
                config().default_rows_per_page,
            )),
            active_page: RwSignal::new(DashboardPage::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: DashboardPage) {
        if self.active_page.get_untracked() != page {
            log::debug!("navigate: {}", page.title());
            self.active_page.set(page);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn upload(&self, domain: UploadDomain, file: web_sys::File, replace: bool) {
        match domain {
            UploadDomain::Sales => sales_actions::upload(self.sales, file, replace),
            UploadDomain::Ratings => ratings_actions::upload(self.ratings, file, replace),
        }
    }

    /// Tracked read of a domain's upload state
    pub fn upload_state(&self, domain: UploadDomain) -> UploadState {
        match domain {
            UploadDomain::Sales => self.sales.with(|s| s.upload.clone()),
            UploadDomain::Ratings => self.ratings.with(|s| s.upload.clone()),
        }
    }

    pub fn error(&self, domain: UploadDomain) -> Option<String> {
        match domain {
            UploadDomain::Sales => self.sales.with(|s| s.error.clone()),
            UploadDomain::Ratings => self.ratings.with(|s| s.error.clone()),
        }
    }

    pub fn dismiss_error(&self, domain: UploadDomain) {
        match domain {
            UploadDomain::Sales => sales_actions::dispatch(self.sales, SalesAction::DismissError),
            UploadDomain::Ratings => {
                ratings_actions::dispatch(self.ratings, RatingsAction::DismissError)
            }
        }
    }

    /// Next user action after an upload settles: back to idle
    pub fn clear_upload(&self, domain: UploadDomain) {
        match domain {
            UploadDomain::Sales => sales_actions::dispatch(self.sales, SalesAction::ClearUpload),
            UploadDomain::Ratings => {
                ratings_actions::dispatch(self.ratings, RatingsAction::ClearUpload)
            }
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_sales_overview() {
        assert_eq!(DashboardPage::default(), DashboardPage::SalesOverview);
        assert_eq!(DashboardPage::ALL[0], DashboardPage::SalesOverview);
    }

    #[test]
    fn test_every_page_has_distinct_title_and_icon() {
        for (i, a) in DashboardPage::ALL.iter().enumerate() {
            for b in &DashboardPage::ALL[i + 1..] {
                assert_ne!(a.title(), b.title());
                assert_ne!(a.icon(), b.icon());
            }
        }
    }
}
