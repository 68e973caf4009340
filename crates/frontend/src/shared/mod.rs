pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod error;
pub mod icons;
pub mod pagination;
pub mod request_tracker;
pub mod upload;
