//! API utilities for frontend-backend communication
//!
//! The POS pages are served by the same server that answers the API, so the
//! default base is empty and every URL stays relative (which also keeps the
//! CSRF same-origin rule satisfied).

/// Build a full API URL from the configured base and a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// assert_eq!(api_url("", "/ventas/api/procesar"), "/ventas/api/procesar");
/// assert_eq!(api_url("http://pos.local/", "/ventas/api/procesar"), "http://pos.local/ventas/api/procesar");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Reload the current page, discarding all client state
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }
}
