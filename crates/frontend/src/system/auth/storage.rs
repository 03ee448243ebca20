use contracts::system::auth::Session;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the bearer token written by the login page
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Get the raw user JSON written by the login page
pub fn get_user_json() -> Option<String> {
    get_local_storage()?.get_item(USER_KEY).ok()?
}

pub fn load_session() -> Session {
    Session::from_storage(get_token(), get_user_json().as_deref())
}

/// Drop everything the app keeps in localStorage
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.clear();
    }
}
