//! Session-scoped access-token storage.
//!
//! The token lives in `window.sessionStorage` so it dies with the tab. The
//! HTTP wrapper reads it on every request and evicts it on a 401.

const TOKEN_STORAGE_KEY: &str = "jwt_access_token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.session_storage().ok().flatten())
}

/// The stored access token, if any. Empty strings count as absent.
pub fn access_token() -> Option<String> {
    storage()
        .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(TOKEN_STORAGE_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(s) = storage() {
        let _ = s.remove_item(TOKEN_STORAGE_KEY);
    }
}
