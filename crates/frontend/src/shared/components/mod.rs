pub mod charts;
pub mod date_input;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod upload_panel;
