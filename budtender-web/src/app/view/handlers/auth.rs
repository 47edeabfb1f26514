use crate::app::state::{AppState, Feed};
use crate::router::Route;
use budtender_core::constants::DENIED_EXIT_URL;
use budtender_core::{
    Credentials, FavoriteList, FeedbackLedger, FieldErrors, ManualRetry, SessionError,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn build_verify_age(state: &AppState) -> Callback<()> {
    let store = Rc::clone(&state.store);
    Callback::from(move |()| store.verify_age(true))
}

pub fn build_exit_age(state: &AppState) -> Callback<()> {
    let store = Rc::clone(&state.store);
    Callback::from(move |()| {
        store.verify_age(false);
        crate::dom::redirect_external(DENIED_EXIT_URL);
    })
}

pub fn build_login(state: &AppState) -> Callback<Credentials> {
    let store = Rc::clone(&state.store);
    let busy = state.busy.clone();
    Callback::from(move |credentials: Credentials| {
        let store = Rc::clone(&store);
        let busy = busy.clone();
        busy.set(true);
        spawn_local(async move {
            if let Err(err) = store.login(&credentials.email, &credentials.password).await {
                log::warn!("login failed: {err}");
            }
            busy.set(false);
        });
    })
}

pub fn build_signup(state: &AppState) -> Callback<Credentials> {
    let store = Rc::clone(&state.store);
    let busy = state.busy.clone();
    let signup_errors = state.signup_errors.clone();
    Callback::from(move |credentials: Credentials| {
        let store = Rc::clone(&store);
        let busy = busy.clone();
        let signup_errors = signup_errors.clone();
        busy.set(true);
        signup_errors.set(FieldErrors::default());
        spawn_local(async move {
            match store.signup(&credentials.email, &credentials.password).await {
                Ok(()) => log::info!("account created"),
                Err(SessionError::Api(err)) => {
                    log::warn!("signup failed: {err}");
                    if let Some(fields) = FieldErrors::from_signup_error(&err) {
                        signup_errors.set(fields);
                    }
                }
                Err(err) => log::warn!("signup failed: {err}"),
            }
            busy.set(false);
        });
    })
}

/// Sign out and forget everything fetched for the previous user.
pub fn build_logout(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        state.store.logout();
        state.recommendations.set(Feed::default());
        state.manual_retry.set(ManualRetry::default());
        state.favorites.set(FavoriteList::default());
        state.feedback.set(FeedbackLedger::default());
        state.feedback_history.set(Vec::new());
        state.notifications.set(Feed::default());
        state.banner.set(None);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Login);
        }
    })
}

pub fn build_dismiss(state: &AppState) -> Callback<()> {
    let store = Rc::clone(&state.store);
    let banner = state.banner.clone();
    Callback::from(move |()| {
        store.clear_error();
        banner.set(None);
    })
}
