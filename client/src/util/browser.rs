//! Full-page browser navigation.
//!
//! These leave the SPA router entirely (OAuth redirect, hard reload), so they
//! go through `window.location`. No-ops outside the browser.

/// Navigate the whole window to `url`.
pub fn redirect_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::error!("failed to navigate to {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Reload the current page from scratch.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
