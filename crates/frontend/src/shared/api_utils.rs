//! API utilities for frontend-backend communication.

use crate::config;

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/upload-sales/?period=all");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}
