use crate::app::loaders::{load_leaderboard, load_notifications};
use crate::app::state::{AppState, Feed};
use crate::i18n::t;
use crate::router::Route;
use budtender_core::feed::notifications;
use budtender_core::{Screen, TimeFrame};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

fn inbox_failed(state: &AppState, action: &str, err: &budtender_core::ApiError) {
    log::warn!("notification {action} failed: {err}");
    state
        .banner
        .set(Some(err.user_message(&t("notifications.action_error"))));
}

pub fn build_toggle_read(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |id: String| {
        let state = state.clone();
        spawn_local(async move {
            let mut items = state.notifications.data.clone();
            match notifications::toggle_read(state.store.api(), &mut items, &id).await {
                Ok(read) => {
                    log::debug!("notification {id} read: {read}");
                    state.notifications.set(Feed::ready(items));
                }
                Err(err) => inbox_failed(&state, "toggle", &err),
            }
        });
    })
}

pub fn build_mark_all_read(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(user_id) = state.session.user_id else {
            return;
        };
        let state = state.clone();
        spawn_local(async move {
            let mut items = state.notifications.data.clone();
            match notifications::mark_all_read(state.store.api(), user_id, &mut items).await {
                Ok(()) => state.notifications.set(Feed::ready(items)),
                Err(err) => inbox_failed(&state, "mark-all", &err),
            }
        });
    })
}

pub fn build_delete_notification(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |id: String| {
        let state = state.clone();
        spawn_local(async move {
            let mut items = state.notifications.data.clone();
            match notifications::delete(state.store.api(), &mut items, &id).await {
                Ok(()) => state.notifications.set(Feed::ready(items)),
                Err(err) => inbox_failed(&state, "delete", &err),
            }
        });
    })
}

pub fn build_open_notification(navigator: Option<Navigator>) -> Callback<Screen> {
    Callback::from(move |screen: Screen| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::from_screen(&screen));
        }
    })
}

pub fn build_refresh_notifications(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| load_notifications(&state))
}

pub fn build_time_frame(state: &AppState) -> Callback<TimeFrame> {
    let state = state.clone();
    Callback::from(move |frame: TimeFrame| {
        state.time_frame.set(frame);
        load_leaderboard(&state, frame);
    })
}

pub fn build_refresh_leaderboard(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| load_leaderboard(&state, *state.time_frame))
}
