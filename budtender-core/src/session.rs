//! Session/auth store.
//!
//! A [`SessionStore`] is an explicit object: the web client builds one at start
//! and shares it through context, tests build as many isolated ones as they
//! like. State changes are pushed to subscribers after every mutation.
//!
//! Every auth action (login, signup, logout, profile refresh) opens a new
//! epoch. A profile response that arrives after a newer action started is
//! dropped with [`SessionError::Superseded`] instead of overwriting the state.

use crate::api::ApiClient;
use crate::constants::{LOGIN_FAILED, PROFILE_FAILED, SIGNUP_FAILED};
use crate::error::{ApiError, ErrorClass};
use crate::model::{AuthResponse, UserId, UserProfile};
use crate::route::GuardFlags;
use crate::storage::{KeyValueStore, PersistedSession};
use crate::transport::Transport;
use crate::validation::FieldErrors;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Snapshot of the client session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user_id: Option<UserId>,
    /// Last fetched profile; present only while `user_id` is set.
    pub user: Option<UserProfile>,
    pub age_verified: bool,
    pub auth_token: Option<String>,
    pub loading: bool,
    pub auth_error: Option<String>,
}

impl Session {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn survey_completed(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.survey_completed)
    }

    #[must_use]
    pub fn guard_flags(&self) -> GuardFlags {
        GuardFlags::new(
            self.age_verified,
            self.is_authenticated(),
            self.survey_completed(),
        )
    }

    fn clear_auth(&mut self) {
        self.user_id = None;
        self.user = None;
        self.auth_token = None;
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("profile could not be loaded: {0}")]
    ProfileUnavailable(ApiError),
    #[error("not signed in")]
    NotAuthenticated,
    #[error("superseded by a newer session action")]
    Superseded,
}

impl SessionError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Api(err) => err.class(),
            Self::ProfileUnavailable(_) | Self::Superseded => ErrorClass::Session,
            Self::NotAuthenticated => ErrorClass::Authentication,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&Session)>;

#[derive(Clone, Copy)]
enum AuthAction {
    Login,
    Signup,
}

pub struct SessionStore<T, S> {
    api: ApiClient<T>,
    storage: S,
    state: RefCell<Session>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_listener: Cell<u64>,
    epoch: Cell<u64>,
}

impl<T: Transport, S: KeyValueStore> SessionStore<T, S> {
    /// Build a store in the loading state. Call [`Self::restore`] to finish.
    pub fn new(api: ApiClient<T>, storage: S) -> Self {
        let persisted = PersistedSession::load(&storage);
        let state = Session {
            age_verified: persisted.age_verified,
            loading: true,
            ..Session::default()
        };
        Self {
            api,
            storage,
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            epoch: Cell::new(0),
        }
    }

    pub const fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.state.borrow().user_id
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn survey_completed(&self) -> bool {
        self.state.borrow().survey_completed()
    }

    #[must_use]
    pub fn guard_flags(&self) -> GuardFlags {
        self.state.borrow().guard_flags()
    }

    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn update(&self, apply: impl FnOnce(&mut Session)) {
        apply(&mut self.state.borrow_mut());
        self.notify();
    }

    fn begin(&self) -> u64 {
        let next = self.epoch.get() + 1;
        self.epoch.set(next);
        next
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    fn end_session(&self, error: Option<String>) {
        PersistedSession::clear_user(&self.storage);
        self.api.set_token(None);
        self.update(|s| {
            s.clear_auth();
            s.loading = false;
            s.auth_error = error;
        });
    }

    /// Resume from persisted state, fetching the profile when a user id is stored.
    ///
    /// # Errors
    ///
    /// [`SessionError::ProfileUnavailable`] when the stored user can no longer be
    /// loaded; the persisted user is cleared in that case.
    pub async fn restore(&self) -> Result<(), SessionError> {
        let epoch = self.begin();
        let persisted = PersistedSession::load(&self.storage);
        self.api.set_token(persisted.auth_token.clone());
        let Some(user_id) = persisted.user_id else {
            log::info!("no stored session");
            self.update(|s| {
                s.age_verified = persisted.age_verified;
                s.loading = false;
            });
            return Ok(());
        };
        log::info!("restoring session for user {user_id}");
        self.update(|s| {
            s.user_id = Some(user_id);
            s.auth_token = persisted.auth_token.clone();
            s.age_verified = persisted.age_verified;
            s.loading = true;
        });
        self.load_profile(epoch, user_id).await
    }

    /// # Errors
    ///
    /// [`SessionError::Api`] when the backend rejects the credentials; the
    /// session is cleared and `auth_error` set.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let epoch = self.begin();
        self.update(|s| {
            s.loading = true;
            s.auth_error = None;
        });
        let result = self.api.login(email, password).await;
        self.finish_auth(epoch, AuthAction::Login, result).await
    }

    /// # Errors
    ///
    /// [`SessionError::Api`] when registration fails. A duplicate email or a
    /// field-bound error leaves `auth_error` empty so the form can show it inline.
    pub async fn signup(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let epoch = self.begin();
        self.update(|s| {
            s.loading = true;
            s.auth_error = None;
        });
        let result = self.api.signup(email, password).await;
        self.finish_auth(epoch, AuthAction::Signup, result).await
    }

    async fn finish_auth(
        &self,
        epoch: u64,
        action: AuthAction,
        result: Result<AuthResponse, ApiError>,
    ) -> Result<(), SessionError> {
        if !self.is_current(epoch) {
            log::debug!("discarding auth response from a superseded action");
            return Err(SessionError::Superseded);
        }
        match result {
            Ok(auth) => {
                let user_id = auth.user.user_id;
                PersistedSession::save_user(&self.storage, user_id, auth.token.as_deref());
                self.api.set_token(auth.token.clone());
                log::info!("signed in as user {user_id}");
                self.update(|s| {
                    s.user_id = Some(user_id);
                    s.auth_token = auth.token;
                    s.user = None;
                });
                self.load_profile(epoch, user_id).await
            }
            Err(err) => {
                let message = match action {
                    AuthAction::Login => Some(LOGIN_FAILED.to_string()),
                    AuthAction::Signup if FieldErrors::from_signup_error(&err).is_some() => None,
                    AuthAction::Signup => Some(SIGNUP_FAILED.to_string()),
                };
                log::warn!("authentication failed: {err}");
                self.end_session(message);
                Err(SessionError::Api(err))
            }
        }
    }

    async fn load_profile(&self, epoch: u64, user_id: UserId) -> Result<(), SessionError> {
        let result = self.api.profile(user_id).await;
        if !self.is_current(epoch) {
            log::debug!("discarding stale profile response for user {user_id}");
            return Err(SessionError::Superseded);
        }
        match result {
            Ok(profile) => {
                self.update(|s| {
                    s.user = Some(profile);
                    s.loading = false;
                    s.auth_error = None;
                });
                Ok(())
            }
            Err(err) => {
                log::error!("profile fetch failed, clearing session: {err}");
                self.end_session(Some(PROFILE_FAILED.to_string()));
                Err(SessionError::ProfileUnavailable(err))
            }
        }
    }

    /// Re-fetch the profile of the signed-in user.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotAuthenticated`] without a user id; otherwise as for
    /// [`Self::restore`].
    pub async fn refresh_profile(&self) -> Result<(), SessionError> {
        let user_id = self.user_id().ok_or(SessionError::NotAuthenticated)?;
        let epoch = self.begin();
        self.load_profile(epoch, user_id).await
    }

    /// Record a successful survey submission, then refetch the profile.
    ///
    /// # Errors
    ///
    /// As for [`Self::refresh_profile`].
    pub async fn mark_survey_completed(&self) -> Result<(), SessionError> {
        self.update(|s| {
            if let Some(user) = s.user.as_mut() {
                user.survey_completed = true;
            }
        });
        self.refresh_profile().await
    }

    /// Sign out. The age flag survives.
    pub fn logout(&self) {
        self.begin();
        log::info!("signed out");
        self.end_session(None);
    }

    /// Self-reported age claim; only stored locally.
    pub fn verify_age(&self, verified: bool) {
        PersistedSession::save_age_verified(&self.storage, verified);
        log::info!("age verification set to {verified}");
        self.update(|s| s.age_verified = verified);
    }

    pub fn clear_error(&self) {
        self.update(|s| s.auth_error = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::transport::{HttpMethod, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    fn store() -> SessionStore<MockTransport, MemoryStore> {
        SessionStore::new(ApiClient::new(MockTransport::new()), MemoryStore::new())
    }

    fn mock(store: &SessionStore<MockTransport, MemoryStore>) -> &MockTransport {
        store.api().transport()
    }

    #[test]
    fn restore_without_user_just_stops_loading() {
        let store = store();
        assert!(store.snapshot().loading);
        block_on(store.restore()).unwrap();
        let s = store.snapshot();
        assert!(!s.loading);
        assert_eq!(s.user_id, None);
        assert!(mock(&store).requests().is_empty());
    }

    #[test]
    fn restore_with_user_fetches_profile() {
        let store = store();
        PersistedSession::save_user(&store.storage, 4, Some("tok"));
        mock(&store).respond_ok(
            HttpMethod::Get,
            "/profile/4",
            &json!({"profile": {"user_id": 4, "survey_completed": true}}),
        );
        block_on(store.restore()).unwrap();
        assert!(store.is_authenticated());
        assert!(store.survey_completed());
        assert_eq!(
            mock(&store).requests()[0].bearer.as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn failed_login_sets_banner_and_clears() {
        let store = store();
        mock(&store).respond(
            HttpMethod::Post,
            "/login/",
            401,
            &json!({"detail": "Invalid email or password."}),
        );
        let err = block_on(store.login("a@b.co", "nope")).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Authentication);
        let s = store.snapshot();
        assert_eq!(s.auth_error.as_deref(), Some(LOGIN_FAILED));
        assert_eq!(s.user_id, None);
        assert!(!s.loading);
    }

    #[test]
    fn duplicate_signup_leaves_banner_empty() {
        let store = store();
        mock(&store).respond(
            HttpMethod::Post,
            "/onboarding/",
            400,
            &json!({"detail": "Email already registered."}),
        );
        let err = block_on(store.signup("a@b.co", "Abcdef1!")).unwrap_err();
        assert!(matches!(err, SessionError::Api(ref e) if e.is_duplicate_email()));
        assert_eq!(store.snapshot().auth_error, None);
    }

    #[test]
    fn generic_signup_failure_uses_fallback_copy() {
        let store = store();
        mock(&store).fail(HttpMethod::Post, "/onboarding/", "offline");
        block_on(store.signup("a@b.co", "Abcdef1!")).unwrap_err();
        assert_eq!(store.snapshot().auth_error.as_deref(), Some(SIGNUP_FAILED));
    }

    #[test]
    fn profile_failure_ends_session() {
        let store = store();
        mock(&store).respond_ok(
            HttpMethod::Post,
            "/login/",
            &json!({"user": {"user_id": 3}, "token": "t"}),
        );
        mock(&store).respond(HttpMethod::Get, "/profile/3", 500, &json!({}));
        let err = block_on(store.login("a@b.co", "pw")).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Session);
        let s = store.snapshot();
        assert_eq!(s.auth_error.as_deref(), Some(PROFILE_FAILED));
        assert_eq!(s.user_id, None);
        assert_eq!(PersistedSession::load(&store.storage).user_id, None);
    }

    #[test]
    fn logout_keeps_age_flag() {
        let store = store();
        store.verify_age(true);
        mock(&store).respond_ok(
            HttpMethod::Post,
            "/login/",
            &json!({"user": {"user_id": 3}, "token": "t"}),
        );
        mock(&store).respond_ok(
            HttpMethod::Get,
            "/profile/3",
            &json!({"profile": {"user_id": 3}}),
        );
        block_on(store.login("a@b.co", "pw")).unwrap();
        store.logout();
        let s = store.snapshot();
        assert!(s.age_verified);
        assert!(!s.is_authenticated());
        assert_eq!(store.api().token(), None);
        assert!(PersistedSession::load(&store.storage).age_verified);
    }

    #[test]
    fn listeners_see_every_change_until_unsubscribed() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |s| sink.borrow_mut().push(s.age_verified));
        store.verify_age(true);
        store.verify_age(false);
        store.unsubscribe(id);
        store.verify_age(true);
        assert_eq!(seen.borrow().as_slice(), &[true, false]);
    }

    #[test]
    fn survey_completion_refetches_profile() {
        let store = store();
        mock(&store).respond_ok(
            HttpMethod::Post,
            "/login/",
            &json!({"user": {"user_id": 5}}),
        );
        mock(&store).respond_ok(
            HttpMethod::Get,
            "/profile/5",
            &json!({"profile": {"user_id": 5}}),
        );
        mock(&store).respond_ok(
            HttpMethod::Get,
            "/profile/5",
            &json!({"profile": {"user_id": 5, "survey_completed": true}}),
        );
        block_on(store.login("a@b.co", "pw")).unwrap();
        assert!(!store.survey_completed());
        block_on(store.mark_survey_completed()).unwrap();
        assert!(store.survey_completed());
        assert_eq!(mock(&store).count(HttpMethod::Get, "/profile/5"), 2);
    }

    #[test]
    fn refresh_without_user_is_rejected() {
        let store = store();
        assert_eq!(
            block_on(store.refresh_profile()),
            Err(SessionError::NotAuthenticated)
        );
    }
}
