pub mod api;
pub mod charts;
pub mod coordinator;
pub mod filter;
pub mod ui;
