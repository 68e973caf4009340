mod dashboard;
mod list;

pub use dashboard::ProductRatingsDashboard;
