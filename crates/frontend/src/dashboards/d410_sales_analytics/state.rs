//! Sales store slice: data, filters, upload and loading state, changed only
//! through [`SalesState::apply`].

use super::query::SalesFilters;
use crate::shared::error::{ApiError, REQUEST_FAILED};
use crate::shared::request_tracker::{LoadingFlags, RequestToken, RequestTracker};
use crate::shared::upload::UploadState;
use chrono::{NaiveDate, Utc};
use contracts::dashboards::d410_sales_analytics::{
    CategoryRevenue, ProductRevenue, RegionRevenue, SalesFilterOptions, SalesSummary,
    TrendGranularity, TrendPoint,
};
use contracts::shared::upload::UploadResponse;

/// One independently fetched piece of sales data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesSlot {
    Summary,
    Trends,
    ProductWise,
    RegionWise,
    CategoryWise,
    Categories,
    Regions,
}

impl SalesSlot {
    /// Everything the overview page shows, filter options excluded
    pub const OVERVIEW: [SalesSlot; 5] = [
        SalesSlot::Summary,
        SalesSlot::Trends,
        SalesSlot::ProductWise,
        SalesSlot::RegionWise,
        SalesSlot::CategoryWise,
    ];

    /// Dropdown lists, fetched side by side
    pub const FILTER_OPTIONS: [SalesSlot; 2] = [SalesSlot::Categories, SalesSlot::Regions];

    pub fn name(&self) -> &'static str {
        match self {
            SalesSlot::Summary => "summary",
            SalesSlot::Trends => "trends",
            SalesSlot::ProductWise => "product-wise",
            SalesSlot::RegionWise => "region-wise",
            SalesSlot::CategoryWise => "category-wise",
            SalesSlot::Categories => "categories",
            SalesSlot::Regions => "regions",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SalesPayload {
    Summary(SalesSummary),
    Trends(Vec<TrendPoint>),
    ProductWise(Vec<ProductRevenue>),
    RegionWise(Vec<RegionRevenue>),
    CategoryWise(Vec<CategoryRevenue>),
    Categories(Vec<String>),
    Regions(Vec<String>),
}

impl SalesPayload {
    pub fn slot(&self) -> SalesSlot {
        match self {
            SalesPayload::Summary(_) => SalesSlot::Summary,
            SalesPayload::Trends(_) => SalesSlot::Trends,
            SalesPayload::ProductWise(_) => SalesSlot::ProductWise,
            SalesPayload::RegionWise(_) => SalesSlot::RegionWise,
            SalesPayload::CategoryWise(_) => SalesSlot::CategoryWise,
            SalesPayload::Categories(_) => SalesSlot::Categories,
            SalesPayload::Regions(_) => SalesSlot::Regions,
        }
    }
}

/// User edits of the filter bar
#[derive(Debug, Clone, PartialEq)]
pub enum SalesFilterChange {
    StartDate(String),
    EndDate(String),
    Category(String),
    Region(String),
    Granularity(TrendGranularity),
    Page(usize),
    RowsPerPage(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SalesAction {
    Filter(SalesFilterChange),
    Loaded {
        token: RequestToken<SalesSlot>,
        payload: SalesPayload,
    },
    Failed {
        token: RequestToken<SalesSlot>,
        error: ApiError,
    },
    UploadStarted,
    UploadFinished(Result<UploadResponse, ApiError>),
    /// Client-side check refused the file before anything was sent
    UploadRejected(String),
    DismissError,
    ClearUpload,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesData {
    pub summary: SalesSummary,
    pub trends: Vec<TrendPoint>,
    pub product_wise: Vec<ProductRevenue>,
    pub region_wise: Vec<RegionRevenue>,
    pub category_wise: Vec<CategoryRevenue>,
    pub filter_options: SalesFilterOptions,
}

#[derive(Debug, Clone)]
pub struct SalesState {
    pub data: SalesData,
    pub filters: SalesFilters,
    pub granularity: TrendGranularity,
    pub upload: UploadState,
    pub loading: LoadingFlags<SalesSlot>,
    /// Banner text, cleared on dismiss or when a new fetch starts
    pub error: Option<String>,
    /// Bumped on every successful upload; pages refetch when it changes
    pub upload_generation: u64,
    tracker: RequestTracker<SalesSlot>,
}

impl SalesState {
    pub fn new(today: NaiveDate, rows_per_page: usize) -> Self {
        Self {
            data: SalesData::default(),
            filters: SalesFilters::for_today(today, rows_per_page),
            granularity: TrendGranularity::default(),
            upload: UploadState::default(),
            loading: LoadingFlags::default(),
            error: None,
            upload_generation: 0,
            tracker: RequestTracker::default(),
        }
    }

    /// Default period ending today, table paged by `rows_per_page`
    pub fn with_rows_per_page(rows_per_page: usize) -> Self {
        Self::new(Utc::now().date_naive(), rows_per_page)
    }

    /// Register a fetch for `slot` and return its token
    pub fn begin(&mut self, slot: SalesSlot) -> RequestToken<SalesSlot> {
        self.loading.set(slot, true);
        self.error = None;
        self.tracker.issue(slot)
    }

    /// Reduce one action. Returns `false` when the action was ignored
    /// (stale response, upload already running, nothing to do).
    pub fn apply(&mut self, action: SalesAction) -> bool {
        match action {
            SalesAction::Filter(change) => {
                self.apply_filter(change);
                true
            }
            SalesAction::Loaded { token, payload } => {
                if !self.tracker.is_latest(&token) || payload.slot() != token.slot {
                    log::debug!("dropping stale sales/{} response #{}", token.slot.name(), token.seq);
                    return false;
                }
                self.loading.set(token.slot, false);
                self.store(payload);
                true
            }
            SalesAction::Failed { token, error } => {
                if !self.tracker.is_latest(&token) {
                    log::debug!("dropping stale sales/{} failure #{}", token.slot.name(), token.seq);
                    return false;
                }
                log::error!("sales/{} failed: {}", token.slot.name(), error);
                self.loading.set(token.slot, false);
                self.clear_slot(token.slot);
                self.error = Some(error.user_message(REQUEST_FAILED));
                true
            }
            SalesAction::UploadStarted => {
                if !self.upload.start() {
                    return false;
                }
                self.error = None;
                true
            }
            SalesAction::UploadFinished(result) => {
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
            SalesAction::UploadRejected(message) => {
                self.upload.reset();
                self.error = Some(message);
                true
            }
            SalesAction::DismissError => self.error.take().is_some(),
            SalesAction::ClearUpload => {
                self.upload.reset();
                self.error = None;
                true
            }
        }
    }

    fn apply_filter(&mut self, change: SalesFilterChange) {
        match change {
            SalesFilterChange::StartDate(raw) => self.filters.set_start_date(&raw),
            SalesFilterChange::EndDate(raw) => self.filters.set_end_date(&raw),
            SalesFilterChange::Category(raw) => self.filters.set_category(&raw),
            SalesFilterChange::Region(raw) => self.filters.set_region(&raw),
            SalesFilterChange::Granularity(granularity) => self.granularity = granularity,
            SalesFilterChange::Page(page) => self.filters.pagination.set_page(page),
            SalesFilterChange::RowsPerPage(rows) => self.filters.set_rows_per_page(rows),
        }
    }

    fn store(&mut self, payload: SalesPayload) {
        match payload {
            SalesPayload::Summary(summary) => self.data.summary = summary,
            SalesPayload::Trends(points) => self.data.trends = points,
            SalesPayload::ProductWise(rows) => {
                // the table pages over these rows client-side
                if rows.len() != self.data.product_wise.len() {
                    self.filters.pagination.reset();
                }
                self.data.product_wise = rows;
            }
            SalesPayload::RegionWise(rows) => self.data.region_wise = rows,
            SalesPayload::CategoryWise(rows) => self.data.category_wise = rows,
            SalesPayload::Categories(list) => self.data.filter_options.categories = list,
            SalesPayload::Regions(list) => self.data.filter_options.regions = list,
        }
    }

    /// Arrays are emptied on failure; summary and filter options keep the last good value
    fn clear_slot(&mut self, slot: SalesSlot) {
        match slot {
            SalesSlot::Trends => self.data.trends.clear(),
            SalesSlot::ProductWise => self.data.product_wise.clear(),
            SalesSlot::RegionWise => self.data.region_wise.clear(),
            SalesSlot::CategoryWise => self.data.category_wise.clear(),
            SalesSlot::Summary | SalesSlot::Categories | SalesSlot::Regions => {}
        }
    }

    pub fn is_loading(&self, slot: SalesSlot) -> bool {
        self.loading.is_loading(slot)
    }
}
