use crate::dom::{BrowserStorage, FetchTransport};
use budtender_core::{
    ApiClient, FavoriteList, FeedbackLedger, FeedbackRecord, FieldErrors, LeaderboardEntry,
    ManualRetry, Notification, Recommendation, Session, SessionStore, StrainDetails, StrainTally,
    TimeFrame, unread_count,
};
use std::rc::Rc;
use yew::prelude::*;

pub type WebSession = SessionStore<FetchTransport, BrowserStorage>;

/// One fetched list or record plus its request status.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feed<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Clone> Feed<T> {
    #[must_use]
    pub fn started(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: true,
            error: None,
        }
    }

    #[must_use]
    pub const fn ready(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    /// Keep the last good data next to the error.
    #[must_use]
    pub fn failed(&self, error: String) -> Self {
        Self {
            data: self.data.clone(),
            loading: false,
            error: Some(error),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Rc<WebSession>,
    /// Mirror of the store, updated by its subscription.
    pub session: UseStateHandle<Session>,
    pub current_language: UseStateHandle<String>,
    pub banner: UseStateHandle<Option<String>>,
    pub busy: UseStateHandle<bool>,
    pub signup_errors: UseStateHandle<FieldErrors>,
    pub recommendations: UseStateHandle<Feed<Vec<Recommendation>>>,
    pub manual_retry: UseStateHandle<ManualRetry>,
    pub favorites: UseStateHandle<FavoriteList>,
    pub feedback: UseStateHandle<FeedbackLedger>,
    pub feedback_history: UseStateHandle<Vec<FeedbackRecord>>,
    pub strains: UseStateHandle<Feed<Vec<String>>>,
    pub strain_detail: UseStateHandle<Feed<Option<StrainDetails>>>,
    pub strain_tally: UseStateHandle<Option<StrainTally>>,
    pub review_submitted: UseStateHandle<bool>,
    pub notifications: UseStateHandle<Feed<Vec<Notification>>>,
    pub leaderboard: UseStateHandle<Feed<Vec<LeaderboardEntry>>>,
    pub time_frame: UseStateHandle<TimeFrame>,
    pub profile_refreshing: UseStateHandle<bool>,
}

#[must_use]
pub fn new_store() -> WebSession {
    SessionStore::new(ApiClient::new(FetchTransport::default()), BrowserStorage)
}

#[hook]
pub fn use_app_state() -> AppState {
    let store = use_memo((), |()| new_store());
    let initial = store.snapshot();
    AppState {
        store,
        session: use_state(move || initial),
        current_language: use_state(crate::i18n::current_lang),
        banner: use_state(|| None::<String>),
        busy: use_state(|| false),
        signup_errors: use_state(FieldErrors::default),
        recommendations: use_state(Feed::default),
        manual_retry: use_state(ManualRetry::default),
        favorites: use_state(FavoriteList::default),
        feedback: use_state(FeedbackLedger::default),
        feedback_history: use_state(Vec::<FeedbackRecord>::new),
        strains: use_state(Feed::default),
        strain_detail: use_state(Feed::default),
        strain_tally: use_state(|| None::<StrainTally>),
        review_submitted: use_state(|| false),
        notifications: use_state(Feed::default),
        leaderboard: use_state(Feed::default),
        time_frame: use_state(TimeFrame::default),
        profile_refreshing: use_state(|| false),
    }
}

impl AppState {
    /// Unread count for the nav badge; the profile's copy until the inbox was fetched.
    #[must_use]
    pub fn unread(&self) -> usize {
        if self.notifications.data.is_empty() {
            self.session
                .user
                .as_ref()
                .map_or(0, |user| unread_count(&user.notifications))
        } else {
            unread_count(&self.notifications.data)
        }
    }
}
