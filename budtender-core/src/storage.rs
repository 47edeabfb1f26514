use crate::constants::{STORAGE_AGE_VERIFIED, STORAGE_AUTH_TOKEN, STORAGE_USER_ID};
use crate::model::UserId;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Minimal string key/value persistence (browser `localStorage`, in-memory map).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// The slice of the session that survives a reload.
///
/// All three keys live in the same store; the session ends on explicit logout
/// or when the profile can no longer be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSession {
    pub user_id: Option<UserId>,
    pub age_verified: bool,
    pub auth_token: Option<String>,
}

impl PersistedSession {
    /// Read the persisted slice; malformed ids are treated as absent.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            user_id: store
                .get(STORAGE_USER_ID)
                .and_then(|raw| raw.trim().parse().ok()),
            age_verified: store
                .get(STORAGE_AGE_VERIFIED)
                .is_some_and(|v| v == "true"),
            auth_token: store.get(STORAGE_AUTH_TOKEN).filter(|t| !t.is_empty()),
        }
    }

    pub fn save_user(store: &impl KeyValueStore, user_id: UserId, token: Option<&str>) {
        store.set(STORAGE_USER_ID, &user_id.to_string());
        match token {
            Some(token) => store.set(STORAGE_AUTH_TOKEN, token),
            None => store.remove(STORAGE_AUTH_TOKEN),
        }
    }

    pub fn clear_user(store: &impl KeyValueStore) {
        store.remove(STORAGE_USER_ID);
        store.remove(STORAGE_AUTH_TOKEN);
    }

    pub fn save_age_verified(store: &impl KeyValueStore, verified: bool) {
        if verified {
            store.set(STORAGE_AGE_VERIFIED, "true");
        } else {
            store.remove(STORAGE_AGE_VERIFIED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_tolerates_garbage_user_id() {
        let store = MemoryStore::new();
        store.set(STORAGE_USER_ID, "seven");
        store.set(STORAGE_AGE_VERIFIED, "yes");
        let loaded = PersistedSession::load(&store);
        assert_eq!(loaded, PersistedSession::default());
    }

    #[test]
    fn save_and_clear_user_round_trip() {
        let store = MemoryStore::new();
        PersistedSession::save_user(&store, 7, Some("tok"));
        PersistedSession::save_age_verified(&store, true);
        let loaded = PersistedSession::load(&store);
        assert_eq!(loaded.user_id, Some(7));
        assert_eq!(loaded.auth_token.as_deref(), Some("tok"));
        assert!(loaded.age_verified);

        PersistedSession::clear_user(&store);
        let cleared = PersistedSession::load(&store);
        assert_eq!(cleared.user_id, None);
        assert_eq!(cleared.auth_token, None);
        assert!(cleared.age_verified, "age flag survives logout");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn revoking_age_removes_key() {
        let store = MemoryStore::new();
        PersistedSession::save_age_verified(&store, true);
        PersistedSession::save_age_verified(&store, false);
        assert!(store.is_empty());
    }
}
