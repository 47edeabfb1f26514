#![cfg(target_arch = "wasm32")]

use budtender_core::constants::{STORAGE_AGE_VERIFIED, STORAGE_USER_ID};
use budtender_core::{ApiClient, KeyValueStore, SessionStore};
use budtender_web::dom::{self, BrowserStorage, FetchTransport};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn clear_session_keys() {
    let storage = BrowserStorage;
    storage.remove(STORAGE_USER_ID);
    storage.remove(STORAGE_AGE_VERIFIED);
}

#[wasm_bindgen_test]
fn browser_storage_round_trips_through_local_storage() {
    clear_session_keys();
    let storage = BrowserStorage;
    storage.set(STORAGE_USER_ID, "42");
    assert_eq!(storage.get(STORAGE_USER_ID).as_deref(), Some("42"));

    let raw = dom::local_storage().expect("localStorage");
    assert_eq!(
        raw.get_item(STORAGE_USER_ID).expect("read item").as_deref(),
        Some("42")
    );

    storage.remove(STORAGE_USER_ID);
    assert_eq!(storage.get(STORAGE_USER_ID), None);
}

#[wasm_bindgen_test]
fn age_verification_survives_a_new_store() {
    clear_session_keys();
    let store = SessionStore::new(
        ApiClient::new(FetchTransport::new("http://127.0.0.1:9")),
        BrowserStorage,
    );
    store.verify_age(true);

    let reopened = SessionStore::new(
        ApiClient::new(FetchTransport::new("http://127.0.0.1:9")),
        BrowserStorage,
    );
    assert!(reopened.snapshot().age_verified);
    clear_session_keys();
}
