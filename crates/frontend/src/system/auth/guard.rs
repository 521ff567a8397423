use super::storage;

/// Login page of the yard system (served outside this bundle)
pub const LOGIN_PATH: &str = "/login";

/// Reaction to a 401 from the backend: drop the stale token and send the
/// browser to the login page.
pub fn on_unauthorized() {
    log::warn!("Backend rejected the access token, redirecting to {}", LOGIN_PATH);
    storage::clear_tokens();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}
