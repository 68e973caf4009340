use super::query::RatingsFilters;
use crate::shared::error::{ApiError, REQUEST_FAILED};
use crate::shared::request_tracker::{LoadingFlags, RequestToken, RequestTracker};
use crate::shared::upload::UploadState;
use contracts::dashboards::d420_product_ratings::{
    CategoryAvgRating, CategoryProductCount, DiscountBucket, RatingsFilterOptions, RatingsPage,
    TopReviewedProduct,
};
use contracts::shared::upload::UploadResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingsSlot {
    ProductsPerCategory,
    TopReviewed,
    DiscountDistribution,
    CategoryAvgRating,
    List,
    FilterOptions,
}

impl RatingsSlot {
    pub const CHARTS: [RatingsSlot; 4] = [
        RatingsSlot::ProductsPerCategory,
        RatingsSlot::TopReviewed,
        RatingsSlot::DiscountDistribution,
        RatingsSlot::CategoryAvgRating,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RatingsSlot::ProductsPerCategory => "products-per-category",
            RatingsSlot::TopReviewed => "top-reviewed",
            RatingsSlot::DiscountDistribution => "discount-distribution",
            RatingsSlot::CategoryAvgRating => "category-avg-rating",
            RatingsSlot::List => "list",
            RatingsSlot::FilterOptions => "filters",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RatingsPayload {
    ProductsPerCategory(Vec<CategoryProductCount>),
    TopReviewed(Vec<TopReviewedProduct>),
    DiscountDistribution(Vec<DiscountBucket>),
    CategoryAvgRating(Vec<CategoryAvgRating>),
    List(RatingsPage),
    FilterOptions(RatingsFilterOptions),
}

impl RatingsPayload {
    pub fn slot(&self) -> RatingsSlot {
        match self {
            RatingsPayload::ProductsPerCategory(_) => RatingsSlot::ProductsPerCategory,
            RatingsPayload::TopReviewed(_) => RatingsSlot::TopReviewed,
            RatingsPayload::DiscountDistribution(_) => RatingsSlot::DiscountDistribution,
            RatingsPayload::CategoryAvgRating(_) => RatingsSlot::CategoryAvgRating,
            RatingsPayload::List(_) => RatingsSlot::List,
            RatingsPayload::FilterOptions(_) => RatingsSlot::FilterOptions,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RatingsFilterChange {
    Category(String),
    Rating(String),
    /// Debounced search text
    Search(String),
    Page(usize),
    RowsPerPage(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RatingsAction {
    Filter(RatingsFilterChange),
    Loaded {
        token: RequestToken<RatingsSlot>,
        payload: RatingsPayload,
    },
    Failed {
        token: RequestToken<RatingsSlot>,
        error: ApiError,
    },
    UploadStarted,
    UploadFinished(Result<UploadResponse, ApiError>),
    UploadRejected(String),
    DismissError,
    ClearUpload,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingsData {
    pub products_per_category: Vec<CategoryProductCount>,
    pub top_reviewed: Vec<TopReviewedProduct>,
    pub discount_distribution: Vec<DiscountBucket>,
    pub category_avg_rating: Vec<CategoryAvgRating>,
    pub list: RatingsPage,
    pub filter_options: RatingsFilterOptions,
}

impl RatingsData {
    /// Nothing uploaded yet: every chart and the list are empty
    pub fn is_empty(&self) -> bool {
        self.products_per_category.is_empty()
            && self.top_reviewed.is_empty()
            && self.discount_distribution.is_empty()
            && self.category_avg_rating.is_empty()
            && self.list.data.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RatingsState {
    pub data: RatingsData,
    pub filters: RatingsFilters,
    pub upload: UploadState,
    pub loading: LoadingFlags<RatingsSlot>,
    pub error: Option<String>,
    pub upload_generation: u64,
    tracker: RequestTracker<RatingsSlot>,
}

impl RatingsState {
    pub fn with_rows_per_page(rows_per_page: usize) -> Self {
        Self {
            filters: RatingsFilters::new(rows_per_page),
            ..Self::default()
        }
    }

    pub fn begin(&mut self, slot: RatingsSlot) -> RequestToken<RatingsSlot> {
        self.loading.set(slot, true);
        self.error = None;
        self.tracker.issue(slot)
    }

    /// Reduce one action; `false` when it was ignored
    pub fn apply(&mut self, action: RatingsAction) -> bool {
        match action {
            RatingsAction::Filter(change) => {
                match change {
                    RatingsFilterChange::Category(raw) => self.filters.set_category(&raw),
                    RatingsFilterChange::Rating(raw) => self.filters.set_rating(&raw),
                    RatingsFilterChange::Search(text) => self.filters.set_search(&text),
                    RatingsFilterChange::Page(page) => self.filters.pagination.set_page(page),
                    RatingsFilterChange::RowsPerPage(rows) => self.filters.set_rows_per_page(rows),
                }
                true
            }
            RatingsAction::Loaded { token, payload } => {
                if !self.tracker.is_latest(&token) || payload.slot() != token.slot {
                    log::debug!("dropping stale ratings/{} response #{}", token.slot.name(), token.seq);
                    return false;
                }
                self.loading.set(token.slot, false);
                match payload {
                    RatingsPayload::ProductsPerCategory(rows) => self.data.products_per_category = rows,
                    RatingsPayload::TopReviewed(rows) => self.data.top_reviewed = rows,
                    RatingsPayload::DiscountDistribution(rows) => self.data.discount_distribution = rows,
                    RatingsPayload::CategoryAvgRating(rows) => self.data.category_avg_rating = rows,
                    RatingsPayload::List(page) => self.data.list = page,
                    RatingsPayload::FilterOptions(options) => self.data.filter_options = options,
                }
                true
            }
            RatingsAction::Failed { token, error } => {
                if !self.tracker.is_latest(&token) {
                    log::debug!("dropping stale ratings/{} failure #{}", token.slot.name(), token.seq);
                    return false;
                }
                log::error!("ratings/{} failed: {}", token.slot.name(), error);
                self.loading.set(token.slot, false);
                match token.slot {
                    RatingsSlot::ProductsPerCategory => self.data.products_per_category.clear(),
                    RatingsSlot::TopReviewed => self.data.top_reviewed.clear(),
                    RatingsSlot::DiscountDistribution => self.data.discount_distribution.clear(),
                    RatingsSlot::CategoryAvgRating => self.data.category_avg_rating.clear(),
                    RatingsSlot::List => self.data.list = RatingsPage::default(),
                    RatingsSlot::FilterOptions => {}
                }
                self.error = Some(error.user_message(REQUEST_FAILED));
                true
            }
            RatingsAction::UploadStarted => {
                if !self.upload.start() {
                    return false;
                }
                self.error = None;
                true
            }
            RatingsAction::UploadFinished(result) => {
                let succeeded = result.is_ok();
                if !self.upload.finish(result) {
                    return false;
                }
                if succeeded {
                    self.upload_generation += 1;
                } else if let UploadState::Failed { message } = &self.upload {
                    self.error = Some(message.clone());
                }
                true
            }
            RatingsAction::UploadRejected(message) => {
                self.upload.reset();
                self.error = Some(message);
                true
            }
            RatingsAction::DismissError => self.error.take().is_some(),
            RatingsAction::ClearUpload => {
                self.upload.reset();
                self.error = None;
                true
            }
        }
    }

    /// Spinner in place of the charts: chart or filter fetches still running
    /// and no list rows to show meanwhile
    pub fn charts_loading(&self) -> bool {
        let busy = self.loading.any(&RatingsSlot::CHARTS)
            || self.loading.is_loading(RatingsSlot::FilterOptions);
        busy && self.data.list.data.is_empty()
    }
}
