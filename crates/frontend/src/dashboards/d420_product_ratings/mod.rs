//! Product ratings: upload, filters, four charts and the paginated list.

pub mod actions;
pub mod api;
pub mod query;
pub mod state;
pub mod ui;
pub mod view_model;

pub use state::{RatingsAction, RatingsFilterChange, RatingsSlot, RatingsState};
pub use ui::ProductRatingsDashboard;
