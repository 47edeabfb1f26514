//! Fetch-on-mount for the listing screens.
//!
//! Each loader flips its feed into the loading state and finishes in a
//! spawned task. Lists are replaced wholesale; nothing is merged.

use crate::app::state::{AppState, Feed};
use crate::i18n::t;
use budtender_core::{FavoriteList, RetryPolicy, Screen, TimeFrame, retry_async};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub fn load_recommendations(state: &AppState) {
    let Some(user_id) = state.session.user_id else {
        return;
    };
    let feed = state.recommendations.clone();
    let store = Rc::clone(&state.store);
    feed.set(feed.started());
    spawn_local(async move {
        match store.api().recommend(user_id).await {
            Ok(items) => {
                log::info!("{} recommendations loaded", items.len());
                feed.set(Feed::ready(items));
            }
            Err(err) => {
                log::warn!("recommendations failed: {err}");
                feed.set(feed.failed(err.user_message(&t("recommendations.error"))));
            }
        }
    });
}

/// Strain names for the survey suggestions, with bounded backoff.
pub fn load_strains(state: &AppState) {
    let feed = state.strains.clone();
    if feed.loading || !feed.data.is_empty() {
        return;
    }
    let store = Rc::clone(&state.store);
    feed.set(feed.started());
    spawn_local(async move {
        let policy = RetryPolicy::default();
        let result = retry_async(
            &policy,
            |attempt| {
                let store = Rc::clone(&store);
                async move {
                    log::debug!("strain list attempt {attempt}");
                    store.api().strains_list().await
                }
            },
            crate::dom::pause,
        )
        .await;
        match result {
            Ok(names) => feed.set(Feed::ready(names)),
            Err(err) => feed.set(feed.failed(err.user_message(&t("survey.strains_error")))),
        }
    });
}

pub fn load_favorites(state: &AppState) {
    let Some(user_id) = state.session.user_id else {
        return;
    };
    let favorites = state.favorites.clone();
    let store = Rc::clone(&state.store);
    spawn_local(async move {
        match store.api().favorites(user_id).await {
            Ok(list) => favorites.set(FavoriteList::from(list)),
            Err(err) => log::warn!("favorites failed: {err}"),
        }
    });
}

pub fn load_feedback_history(state: &AppState) {
    let Some(user_id) = state.session.user_id else {
        return;
    };
    let history = state.feedback_history.clone();
    let store = Rc::clone(&state.store);
    spawn_local(async move {
        match store.api().feedbacks(user_id).await {
            Ok(records) => history.set(records),
            Err(err) => log::warn!("feedback history failed: {err}"),
        }
    });
}

pub fn load_strain(state: &AppState, name: &str) {
    let detail = state.strain_detail.clone();
    let tally = state.strain_tally.clone();
    let store = Rc::clone(&state.store);
    let name = name.to_string();
    detail.set(Feed {
        data: None,
        loading: true,
        error: None,
    });
    tally.set(None);
    spawn_local(async move {
        match store.api().strain(&name).await {
            Ok(found) => detail.set(Feed::ready(Some(found))),
            Err(err) => {
                log::warn!("strain {name} failed: {err}");
                detail.set(Feed {
                    data: None,
                    loading: false,
                    error: Some(err.user_message(&t("strain.error"))),
                });
            }
        }
        match store.api().strain_tally(&name).await {
            Ok(counts) => tally.set(Some(counts)),
            Err(err) => log::debug!("no tally for {name}: {err}"),
        }
    });
}

pub fn load_notifications(state: &AppState) {
    let Some(user_id) = state.session.user_id else {
        return;
    };
    let feed = state.notifications.clone();
    let store = Rc::clone(&state.store);
    feed.set(feed.started());
    spawn_local(async move {
        match store.api().notifications(user_id).await {
            Ok(items) => feed.set(Feed::ready(items)),
            Err(err) => {
                log::warn!("notifications failed: {err}");
                feed.set(feed.failed(err.user_message(&t("notifications.error"))));
            }
        }
    });
}

pub fn load_leaderboard(state: &AppState, frame: TimeFrame) {
    let feed = state.leaderboard.clone();
    let store = Rc::clone(&state.store);
    feed.set(feed.started());
    spawn_local(async move {
        match store.api().leaderboard(frame).await {
            Ok(entries) => feed.set(Feed::ready(entries)),
            Err(err) => {
                log::warn!("leaderboard failed: {err}");
                feed.set(feed.failed(err.user_message(&t("leaderboard.error"))));
            }
        }
    });
}

/// Fetch what `screen` lists when it becomes visible.
pub fn load_for_screen(state: &AppState, screen: &Screen) {
    match screen {
        Screen::Recommendations => {
            load_recommendations(state);
            load_favorites(state);
        }
        Screen::Survey => load_strains(state),
        Screen::Profile => {
            load_favorites(state);
            load_feedback_history(state);
        }
        Screen::Strain(name) => {
            load_strain(state, name);
            load_favorites(state);
        }
        Screen::Review(_) => state.review_submitted.set(false),
        Screen::Notifications => load_notifications(state),
        Screen::Leaderboard => load_leaderboard(state, *state.time_frame),
        Screen::AgeGate | Screen::Signup | Screen::Login | Screen::NotFound => {}
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_screen_loader(state: &AppState, screen: Screen) {
    let state = state.clone();
    let user_id = state.session.user_id;
    use_effect_with((screen, user_id), move |(screen, _)| {
        load_for_screen(&state, screen);
    });
}
