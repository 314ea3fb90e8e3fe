use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "eshipping_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
            log::warn!("Access token could not be persisted");
        }
    }
}

/// Get access token from localStorage; empty values count as absent
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// Clear the persisted token
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
