use gloo::storage::{LocalStorage, Storage};
use shared::ParentProfile;

/// The only two browser-local entries the portal persists.
pub const SESSION_KEY: &str = "parent_session_id";
pub const PROFILE_KEY: &str = "parent_info";

pub fn persisted_session_id() -> Option<String> {
    LocalStorage::get(SESSION_KEY).ok()
}

pub fn persisted_profile() -> Option<ParentProfile> {
    LocalStorage::get(PROFILE_KEY).ok()
}

pub fn persist(session_id: &str, profile: &ParentProfile) {
    let _ = LocalStorage::set(SESSION_KEY, session_id);
    persist_profile(profile);
}

/// The cached profile is a convenience only; the server stays authoritative.
pub fn persist_profile(profile: &ParentProfile) {
    let _ = LocalStorage::set(PROFILE_KEY, profile);
}

pub fn clear() {
    LocalStorage::delete(SESSION_KEY);
    LocalStorage::delete(PROFILE_KEY);
}

/// Unauthorized-response handler: drop the persisted session and reload the
/// page, which lands the user back on the login screen.
pub fn expire() {
    clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ChildRecord;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_profile() -> ParentProfile {
        ParentProfile {
            id: 3,
            name: "Moussa Ba".to_string(),
            email: "moussa.ba@example.com".to_string(),
            children: vec![ChildRecord {
                id: 42,
                name: "Awa Diop".to_string(),
                ..ChildRecord::default()
            }],
            ..ParentProfile::default()
        }
    }

    #[wasm_bindgen_test]
    fn persisted_entries_round_trip() {
        clear();
        assert_eq!(persisted_session_id(), None);
        assert_eq!(persisted_profile(), None);

        let profile = sample_profile();
        persist("sess-1234", &profile);

        assert_eq!(persisted_session_id().as_deref(), Some("sess-1234"));
        assert_eq!(persisted_profile(), Some(profile));
    }

    #[wasm_bindgen_test]
    fn clear_removes_both_entries() {
        persist("sess-1234", &sample_profile());
        clear();

        assert_eq!(persisted_session_id(), None);
        assert_eq!(persisted_profile(), None);
    }
}
