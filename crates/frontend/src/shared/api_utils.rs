//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Порт сервера каталогов по умолчанию
pub const API_PORT: u16 = 5000;

/// Get the base URL for API requests
///
/// `CATALOGUE_API_BASE` (задаётся при сборке) имеет приоритет. Иначе URL
/// строится из текущего window location с портом [`API_PORT`].
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("CATALOGUE_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/catalogues");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Склеивает base и path ровно одним `/`
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
