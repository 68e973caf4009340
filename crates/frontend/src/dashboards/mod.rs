pub mod d410_sales_analytics;
pub mod d420_product_ratings;

pub use d410_sales_analytics::{
    ProductSalesPage, RegionSalesPage, RevenueTrendsPage, SalesOverviewDashboard,
};
pub use d420_product_ratings::ProductRatingsDashboard;
