//! Sales analytics: overview, revenue trends, product and regional sales.

pub mod actions;
pub mod api;
pub mod metrics;
pub mod query;
pub mod state;
pub mod ui;

pub use state::{SalesAction, SalesFilterChange, SalesSlot, SalesState};
pub use ui::{ProductSalesPage, RegionSalesPage, RevenueTrendsPage, SalesOverviewDashboard};
