//! Process-wide configuration, resolved once at startup.

use once_cell::sync::OnceCell;

static API_BASE: OnceCell<String> = OnceCell::new();

/// Resolve the backend base URL and store it for the lifetime of the app.
///
/// The compile-time `API_BASE_URL` environment variable wins when set;
/// otherwise the base is derived from the current window location with
/// the backend's port. Returns an error when neither source is available
/// (non-browser context without `API_BASE_URL`), in which case the caller
/// must refuse to mount.
pub fn init() -> Result<(), String> {
    let base = match option_env!("API_BASE_URL") {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => base_from_location()
            .ok_or_else(|| "API base URL is not configured: set API_BASE_URL".to_string())?,
    };
    API_BASE
        .set(base)
        .map_err(|_| "configuration already initialized".to_string())
}

fn base_from_location() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let protocol = location.protocol().ok()?;
    let hostname = location.hostname().ok()?;
    Some(format!("{}//{}:8000", protocol, hostname))
}

/// The configured API base URL. `init` runs before the app mounts, so an
/// empty result is only observable if initialization was skipped.
pub fn api_base() -> &'static str {
    API_BASE.get().map(|base| base.as_str()).unwrap_or("")
}
