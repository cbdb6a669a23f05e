//! Cached sign-in state. The login flow stores the user object under
//! `localStorage["user"]`; only its role title is read here.

use culture_archive_shared::dashboard::role_from_cached_user;

const USER_KEY: &str = "user";

/// Role of the cached user, or `None` when storage is unavailable, the key
/// is missing, or the value is not a user object.
pub fn cached_role() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(USER_KEY).ok()??;
    role_from_cached_user(&raw)
}
