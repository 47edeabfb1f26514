use budtender_core::feed::notifications::{mark_all_read, toggle_read};
use budtender_core::{
    ApiClient, FavoriteList, HttpMethod, MemoryStore, MockTransport, Notification,
    NotificationKind, SessionError, SessionStore, SurveyDraft, SurveyError,
};
use futures::executor::block_on;
use serde_json::json;
use std::rc::{Rc, Weak};

type Store = SessionStore<Rc<MockTransport>, MemoryStore>;

fn store_with(mock: &Rc<MockTransport>) -> Rc<Store> {
    Rc::new(SessionStore::new(
        ApiClient::new(Rc::clone(mock)),
        MemoryStore::new(),
    ))
}

fn script_login(mock: &MockTransport, user_id: u64) {
    mock.respond_ok(
        HttpMethod::Post,
        "/login/",
        &json!({"message": "Login successful", "user": {"user_id": user_id}, "token": "t"}),
    );
    mock.respond_ok(
        HttpMethod::Get,
        &format!("/profile/{user_id}"),
        &json!({"profile": {"user_id": user_id, "email": "a@b.co"}}),
    );
}

#[test]
fn login_exposes_user_and_fetches_profile_once() {
    let mock = Rc::new(MockTransport::new());
    script_login(&mock, 7);
    let store = store_with(&mock);
    block_on(store.restore()).unwrap();

    block_on(store.login("a@b.co", "Abcdef1!")).unwrap();

    let session = store.snapshot();
    assert_eq!(session.user_id, Some(7));
    assert!(session.is_authenticated());
    assert!(!session.loading);
    assert_eq!(session.auth_token.as_deref(), Some("t"));
    assert_eq!(mock.count(HttpMethod::Get, "/profile/7"), 1);
    let profile_req = mock
        .requests()
        .into_iter()
        .find(|r| r.path == "/profile/7")
        .unwrap();
    assert_eq!(profile_req.bearer.as_deref(), Some("t"));
}

#[test]
fn logout_during_profile_fetch_discards_the_response() {
    let mock = Rc::new(MockTransport::new());
    script_login(&mock, 7);
    let store = store_with(&mock);

    let weak: Weak<Store> = Rc::downgrade(&store);
    mock.on_request(move |req| {
        if req.path == "/profile/7" {
            if let Some(store) = weak.upgrade() {
                store.logout();
            }
        }
    });

    let result = block_on(store.login("a@b.co", "Abcdef1!"));
    assert_eq!(result, Err(SessionError::Superseded));
    let session = store.snapshot();
    assert_eq!(session.user_id, None);
    assert!(session.user.is_none());
    assert_eq!(session.auth_error, None);
}

#[test]
fn empty_survey_never_reaches_the_network() {
    let mock = Rc::new(MockTransport::new());
    script_login(&mock, 3);
    let store = store_with(&mock);
    block_on(store.login("a@b.co", "Abcdef1!")).unwrap();
    let before = mock.requests().len();

    let draft = SurveyDraft::default();
    let outcome = draft
        .validate(3)
        .map(|request| block_on(store.api().submit_survey(&request)));
    assert_eq!(outcome.err(), Some(SurveyError::NoEffects));
    assert_eq!(mock.requests().len(), before);
}

#[test]
fn favorite_toggled_twice_costs_two_calls_and_ends_absent() {
    let mock = Rc::new(MockTransport::new());
    mock.respond_ok(HttpMethod::Post, "/favorites/", &json!({"message": "added"}));
    mock.respond_ok(HttpMethod::Delete, "/favorites/", &json!({"message": "removed"}));
    let api = ApiClient::new(Rc::clone(&mock));
    let mut favorites = FavoriteList::default();

    assert_eq!(block_on(favorites.toggle(&api, 7, "gelato")), Ok(true));
    assert!(favorites.contains("gelato"));
    assert_eq!(block_on(favorites.toggle(&api, 7, "gelato")), Ok(false));

    assert_eq!(mock.requests().len(), 2);
    assert!(!favorites.contains("gelato"));
}

fn notification(id: &str, kind: NotificationKind, ts: &str) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        title: "t".into(),
        message: "m".into(),
        timestamp: ts.to_string(),
        read: false,
        strain_id: None,
    }
}

#[test]
fn mark_all_read_only_flips_read_flags() {
    let mock = Rc::new(MockTransport::new());
    mock.respond_ok(
        HttpMethod::Post,
        "/notifications/7/mark-all-read",
        &json!({"message": "ok"}),
    );
    let api = ApiClient::new(Rc::clone(&mock));
    let original = vec![
        notification("1", NotificationKind::Badge, "2024-01-01T00:00:00Z"),
        notification("2", NotificationKind::Like, "2024-02-01T00:00:00Z"),
    ];
    let mut items = original.clone();

    block_on(mark_all_read(&api, 7, &mut items)).unwrap();

    assert!(items.iter().all(|n| n.read));
    for (after, before) in items.iter().zip(&original) {
        assert_eq!(after.id, before.id);
        assert_eq!(after.timestamp, before.timestamp);
        assert_eq!(after.kind, before.kind);
    }
}

#[test]
fn failed_mark_read_keeps_local_state() {
    let mock = Rc::new(MockTransport::new());
    mock.fail(HttpMethod::Post, "/notifications/1/mark-read", "offline");
    let api = ApiClient::new(Rc::clone(&mock));
    let mut items = vec![notification("1", NotificationKind::Review, "")];
    assert!(block_on(toggle_read(&api, &mut items, "1")).is_err());
    assert!(!items[0].read);
}
