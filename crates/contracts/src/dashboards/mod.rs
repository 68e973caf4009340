pub mod d410_sales_analytics;
pub mod d420_product_ratings;
