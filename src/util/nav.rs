//! Top-level navigation outside the client-side router.

/// Force a full document navigation to `path`.
///
/// Unlike a router transition this reloads the application, resetting all
/// in-memory state along with the navigation. Used by the session-expiry
/// path.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::error!("hard redirect to {path} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
