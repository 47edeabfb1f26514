mod auth;
mod feed;
mod inbox;
mod prefs;

use crate::app::state::AppState;
use crate::router::Route;
use budtender_core::{Credentials, FeedbackKind, ReviewRequest, Screen, SurveyRequest, TimeFrame};
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub use auth::{
    build_dismiss, build_exit_age, build_login, build_logout, build_signup, build_verify_age,
};
pub use feed::{
    build_favorite, build_feedback, build_refresh_profile, build_retry_recommendations,
    build_submit_review, build_submit_survey,
};
pub use inbox::{
    build_delete_notification, build_mark_all_read, build_open_notification,
    build_refresh_leaderboard, build_refresh_notifications, build_time_frame, build_toggle_read,
};
pub use prefs::{
    build_go, build_lang_change, build_navigate, build_review_done, build_strain_details,
    build_write_review,
};

#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<Route>,
    pub lang_change: Callback<String>,
    pub logout: Callback<()>,
    pub dismiss: Callback<()>,
    pub verify_age: Callback<()>,
    pub exit_age: Callback<()>,
    pub login: Callback<Credentials>,
    pub signup: Callback<Credentials>,
    pub go_login: Callback<()>,
    pub go_signup: Callback<()>,
    pub go_survey: Callback<()>,
    pub go_back: Callback<()>,
    pub submit_survey: Callback<SurveyRequest>,
    pub retry_recommendations: Callback<()>,
    pub feedback: Callback<(String, FeedbackKind)>,
    pub favorite: Callback<String>,
    pub details: Callback<String>,
    pub write_review: Callback<String>,
    pub review: Callback<ReviewRequest>,
    pub review_done: Callback<String>,
    pub refresh_profile: Callback<()>,
    pub toggle_read: Callback<String>,
    pub mark_all_read: Callback<()>,
    pub delete_notification: Callback<String>,
    pub open_notification: Callback<Screen>,
    pub refresh_notifications: Callback<()>,
    pub time_frame: Callback<TimeFrame>,
    pub refresh_leaderboard: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            navigate: build_navigate(navigator.clone()),
            lang_change: build_lang_change(state),
            logout: build_logout(state, navigator.clone()),
            dismiss: build_dismiss(state),
            verify_age: build_verify_age(state),
            exit_age: build_exit_age(state),
            login: build_login(state),
            signup: build_signup(state),
            go_login: build_go(navigator.clone(), Route::Login),
            go_signup: build_go(navigator.clone(), Route::Signup),
            go_survey: build_go(navigator.clone(), Route::Survey),
            go_back: build_go(navigator.clone(), Route::Recommendations),
            submit_survey: build_submit_survey(state, navigator.clone()),
            retry_recommendations: build_retry_recommendations(state),
            feedback: build_feedback(state),
            favorite: build_favorite(state),
            details: build_strain_details(navigator.clone()),
            write_review: build_write_review(navigator.clone()),
            review: build_submit_review(state),
            review_done: build_review_done(state, navigator.clone()),
            refresh_profile: build_refresh_profile(state),
            toggle_read: build_toggle_read(state),
            mark_all_read: build_mark_all_read(state),
            delete_notification: build_delete_notification(state),
            open_notification: build_open_notification(navigator),
            refresh_notifications: build_refresh_notifications(state),
            time_frame: build_time_frame(state),
            refresh_leaderboard: build_refresh_leaderboard(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Feed, new_store};
    use budtender_core::{
        FavoriteList, FeedbackLedger, FieldErrors, ManualRetry, Session, StrainTally,
    };
    use futures::executor::block_on;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    #[hook]
    fn use_test_state(retry: ManualRetry) -> AppState {
        AppState {
            store: use_memo((), |()| new_store()),
            session: use_state(|| Session {
                age_verified: true,
                ..Session::default()
            }),
            current_language: use_state(|| String::from("en")),
            banner: use_state(|| Some(String::from("stale"))),
            busy: use_state(|| false),
            signup_errors: use_state(FieldErrors::default),
            recommendations: use_state(Feed::default),
            manual_retry: use_state(move || retry),
            favorites: use_state(FavoriteList::default),
            feedback: use_state(FeedbackLedger::default),
            feedback_history: use_state(Vec::new),
            strains: use_state(Feed::default),
            strain_detail: use_state(Feed::default),
            strain_tally: use_state(|| None::<StrainTally>),
            review_submitted: use_state(|| true),
            notifications: use_state(Feed::default),
            leaderboard: use_state(Feed::default),
            time_frame: use_state(TimeFrame::default),
            profile_refreshing: use_state(|| false),
        }
    }

    #[function_component(SignedOutHandlersHarness)]
    fn signed_out_handlers_harness() -> Html {
        crate::i18n::set_lang("en");
        let invoked = use_state(|| false);
        let app_state = use_test_state(ManualRetry::default());
        let handlers = AppHandlers::new(&app_state, None);

        if !*invoked {
            invoked.set(true);
            handlers.lang_change.emit(String::from("es"));
            handlers.navigate.emit(Route::Leaderboard);
            handlers.go_login.emit(());
            handlers.go_signup.emit(());
            handlers.details.emit(String::from("gelato"));
            handlers.write_review.emit(String::from("gelato"));
            handlers.review_done.emit(String::from("gelato"));
            handlers.open_notification.emit(Screen::Profile);
            handlers.verify_age.emit(());
            handlers.dismiss.emit(());
            // Signed out: these return before touching the network.
            handlers.retry_recommendations.emit(());
            handlers.feedback.emit((String::from("gelato"), FeedbackKind::Like));
            handlers.favorite.emit(String::from("gelato"));
            handlers.mark_all_read.emit(());
            handlers.logout.emit(());
        }
        Html::default()
    }

    #[function_component(ExhaustedRetryHarness)]
    fn exhausted_retry_harness() -> Html {
        let invoked = use_state(|| false);
        let mut spent = ManualRetry::default();
        while spent.try_consume() {}
        let app_state = use_test_state(spent);
        let handlers = AppHandlers::new(&app_state, None);
        if !*invoked {
            invoked.set(true);
            handlers.retry_recommendations.emit(());
        }
        html! { <p>{ app_state.manual_retry.remaining() }</p> }
    }

    #[test]
    fn handlers_cover_signed_out_paths() {
        let _ = block_on(LocalServerRenderer::<SignedOutHandlersHarness>::new().render());
        crate::i18n::set_lang("en");
    }

    #[test]
    fn exhausted_retry_budget_stays_spent() {
        let html = block_on(LocalServerRenderer::<ExhaustedRetryHarness>::new().render());
        assert!(html.contains("<p>0</p>"), "{html}");
    }

    #[test]
    fn survey_result_seeds_the_recommendations_feed() {
        let items = vec![budtender_core::Recommendation {
            name: String::from("Blue Dream"),
            strain_type: String::from("hybrid"),
            effects: vec![String::from("Relaxed")],
            terpenes: Vec::new(),
            may_relieve: Vec::new(),
            similarity_score: Some(0.9),
        }];
        let seeded = feed::feed_after_survey(items.clone());
        assert_eq!(seeded, Feed::ready(items));

        let empty = feed::feed_after_survey(Vec::new());
        assert_eq!(empty, Feed::default());
        assert!(!empty.loading);
    }

    #[test]
    fn fresh_store_is_shared_by_clone() {
        let store = Rc::new(new_store());
        let other = Rc::clone(&store);
        store.verify_age(true);
        assert!(other.snapshot().age_verified);
    }
}
