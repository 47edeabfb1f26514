use crate::app::loaders::load_recommendations;
use crate::app::state::{AppState, Feed};
use crate::i18n::t;
use crate::router::Route;
use budtender_core::{
    FeedbackKind, ManualRetry, Recommendation, ReviewRequest, SurveyRequest,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Submit the survey, wait for the refreshed profile, then open recommendations.
pub fn build_submit_survey(state: &AppState, navigator: Option<Navigator>) -> Callback<SurveyRequest> {
    let state = state.clone();
    Callback::from(move |request: SurveyRequest| {
        let state = state.clone();
        let navigator = navigator.clone();
        state.busy.set(true);
        state.banner.set(None);
        spawn_local(async move {
            match state.store.api().submit_survey(&request).await {
                Ok(items) => {
                    if let Err(err) = state.store.mark_survey_completed().await {
                        log::warn!("profile refresh after survey failed: {err}");
                    }
                    state.recommendations.set(feed_after_survey(items));
                    state.manual_retry.set(ManualRetry::default());
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&Route::Recommendations);
                    }
                }
                Err(err) => {
                    log::warn!("survey submit failed: {err}");
                    state
                        .banner
                        .set(Some(err.user_message(&t("survey.submit_error"))));
                }
            }
            state.busy.set(false);
        });
    })
}

/// Seed the recommendations feed with what the survey submit returned. An empty
/// list leaves the feed idle so the screen loader fetches it.
pub(crate) fn feed_after_survey(items: Vec<Recommendation>) -> Feed<Vec<Recommendation>> {
    if items.is_empty() {
        Feed::default()
    } else {
        Feed::ready(items)
    }
}

/// User-triggered refetch, limited by the screen's retry budget.
pub fn build_retry_recommendations(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let mut budget = *state.manual_retry;
        if !budget.try_consume() {
            log::info!("manual retries exhausted");
            return;
        }
        state.manual_retry.set(budget);
        load_recommendations(&state);
    })
}

pub fn build_feedback(state: &AppState) -> Callback<(String, FeedbackKind)> {
    let state = state.clone();
    Callback::from(move |(strain, kind): (String, FeedbackKind)| {
        let Some(user_id) = state.session.user_id else {
            return;
        };
        let state = state.clone();
        spawn_local(async move {
            let mut ledger = (*state.feedback).clone();
            match ledger.send(state.store.api(), user_id, &strain, kind).await {
                Ok(true) => state.feedback.set(ledger),
                Ok(false) => {}
                Err(err) => {
                    log::warn!("feedback for {strain} failed: {err}");
                    state
                        .banner
                        .set(Some(err.user_message(&t("recommendations.feedback_error"))));
                }
            }
        });
    })
}

pub fn build_favorite(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |strain: String| {
        let Some(user_id) = state.session.user_id else {
            return;
        };
        let state = state.clone();
        spawn_local(async move {
            let mut favorites = (*state.favorites).clone();
            match favorites.toggle(state.store.api(), user_id, &strain).await {
                Ok(now) => {
                    log::debug!("{strain} favorite: {now}");
                    state.favorites.set(favorites);
                }
                Err(err) => {
                    log::warn!("favorite toggle for {strain} failed: {err}");
                    state
                        .banner
                        .set(Some(err.user_message(&t("strain.favorite_error"))));
                }
            }
        });
    })
}

pub fn build_submit_review(state: &AppState) -> Callback<ReviewRequest> {
    let state = state.clone();
    Callback::from(move |review: ReviewRequest| {
        let state = state.clone();
        state.busy.set(true);
        state.banner.set(None);
        spawn_local(async move {
            match state.store.api().submit_review(&review).await {
                Ok(()) => {
                    log::info!("review for {} submitted", review.strain_name);
                    state.review_submitted.set(true);
                    if let Err(err) = state.store.refresh_profile().await {
                        log::warn!("profile refresh after review failed: {err}");
                    }
                }
                Err(err) => {
                    log::warn!("review submit failed: {err}");
                    state
                        .banner
                        .set(Some(err.user_message(&t("review.submit_error"))));
                }
            }
            state.busy.set(false);
        });
    })
}

pub fn build_refresh_profile(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let state = state.clone();
        state.profile_refreshing.set(true);
        crate::app::loaders::load_favorites(&state);
        crate::app::loaders::load_feedback_history(&state);
        spawn_local(async move {
            if let Err(err) = state.store.refresh_profile().await {
                log::warn!("profile refresh failed: {err}");
            }
            state.profile_refreshing.set(false);
        });
    })
}
