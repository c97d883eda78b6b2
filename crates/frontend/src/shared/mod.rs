pub mod api_utils;
pub mod components;
pub mod data_context;
pub mod number_format;
pub mod toast;
