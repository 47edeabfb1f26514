mod handlers;
mod screens;

pub use handlers::AppHandlers;
pub use screens::render_screen;

use crate::app::routing::screen_for;
use crate::app::state::AppState;
use crate::components::{footer::Footer, header::Header};
use crate::pages::loading::LoadingPage;
use crate::router::Route;
use budtender_core::Session;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let session = &*state.session;
    let body = if session_pending(session, route) {
        html! { <LoadingPage /> }
    } else {
        let screen = screen_for(session.guard_flags(), route);
        render_screen(state, &handlers, &screen)
    };

    html! {
        <>
            <Header
                age_verified={session.age_verified}
                authenticated={session.is_authenticated()}
                unread={state.unread()}
                current_lang={(*state.current_language).clone()}
                on_lang_change={handlers.lang_change.clone()}
                on_navigate={handlers.navigate.clone()}
                on_logout={handlers.logout.clone()}
            />
            <main id="main" role="main" class="container mx-auto p-4">
                { body }
            </main>
            <Footer />
        </>
    }
}

/// A stored session is still being restored. The guard cannot tell a returning
/// member from a visitor yet, so only the auth forms render in the meantime.
fn session_pending(session: &Session, route: Option<&Route>) -> bool {
    session.loading
        && session.age_verified
        && !matches!(route, Some(Route::Login | Route::Signup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Feed, new_store};
    use budtender_core::{
        FavoriteList, FeedbackLedger, FieldErrors, ManualRetry, Notification, NotificationKind,
        Recommendation, Session, StrainTally, TimeFrame, UserProfile,
    };
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq, Clone)]
    struct HarnessProps {
        session: Session,
        route: Option<Route>,
        #[prop_or_default]
        recommendations: Vec<Recommendation>,
    }

    #[hook]
    fn use_test_state(session: Session, recommendations: Vec<Recommendation>) -> AppState {
        AppState {
            store: use_memo((), |()| new_store()),
            session: use_state(move || session),
            current_language: use_state(|| String::from("en")),
            banner: use_state(|| None::<String>),
            busy: use_state(|| false),
            signup_errors: use_state(FieldErrors::default),
            recommendations: use_state(move || Feed::ready(recommendations)),
            manual_retry: use_state(ManualRetry::default),
            favorites: use_state(FavoriteList::default),
            feedback: use_state(FeedbackLedger::default),
            feedback_history: use_state(Vec::new),
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

    #[function_component(AppHarness)]
    fn app_harness(props: &HarnessProps) -> Html {
        let state = use_test_state(props.session.clone(), props.recommendations.clone());
        render_app(&state, props.route.as_ref(), None)
    }

    fn render(session: Session, route: Option<Route>, recommendations: Vec<Recommendation>) -> String {
        crate::i18n::set_lang("en");
        block_on(
            LocalServerRenderer::<AppHarness>::with_props(HarnessProps {
                session,
                route,
                recommendations,
            })
            .render(),
        )
    }

    fn member(survey_completed: bool) -> Session {
        let mut profile = UserProfile::new(7);
        profile.survey_completed = survey_completed;
        profile.notifications = vec![Notification {
            id: String::from("n1"),
            kind: NotificationKind::Badge,
            title: String::from("New badge"),
            message: String::from("First review"),
            timestamp: String::new(),
            read: false,
            strain_id: None,
        }];
        Session {
            user_id: Some(7),
            user: Some(profile),
            age_verified: true,
            auth_token: Some(String::from("token")),
            loading: false,
            auth_error: None,
        }
    }

    #[test]
    fn unverified_visitor_sees_age_gate_on_any_path() {
        let html = render(Session::default(), Some(Route::Leaderboard), Vec::new());
        assert!(html.contains("age-confirm"), "{html}");
        assert!(!html.contains("leaderboard-standing"));
    }

    #[test]
    fn pending_session_shows_loading_except_on_auth_forms() {
        let pending = Session {
            age_verified: true,
            loading: true,
            ..Session::default()
        };
        let html = render(pending.clone(), Some(Route::Profile), Vec::new());
        assert!(html.contains(&crate::i18n::t("ui.loading")), "{html}");
        let html = render(pending, Some(Route::Login), Vec::new());
        assert!(html.contains("login-form"), "{html}");
    }

    #[test]
    fn restoring_session_holds_member_routes_on_the_loading_view() {
        let pending = Session {
            age_verified: true,
            loading: true,
            ..Session::default()
        };
        for route in [Route::Recommendations, Route::Notifications, Route::Leaderboard] {
            let html = render(pending.clone(), Some(route), Vec::new());
            assert!(!html.contains("signup-form"), "{html}");
            assert!(html.contains(&crate::i18n::t("ui.loading")), "{html}");
        }
        let html = render(pending.clone(), Some(Route::Signup), Vec::new());
        assert!(html.contains("signup-form"), "{html}");
        assert!(session_pending(&pending, None));
        assert!(!session_pending(&pending, Some(&Route::Login)));
    }

    #[test]
    fn unverified_visitor_skips_the_loading_view() {
        let unverified = Session {
            loading: true,
            ..Session::default()
        };
        let html = render(unverified, Some(Route::Profile), Vec::new());
        assert!(html.contains("age-confirm"), "{html}");
    }

    #[test]
    fn signed_out_member_route_renders_signup() {
        let signed_out = Session {
            age_verified: true,
            loading: false,
            ..Session::default()
        };
        let html = render(signed_out, Some(Route::Notifications), Vec::new());
        assert!(html.contains("signup-form"), "{html}");
    }

    #[test]
    fn new_member_is_held_on_the_survey() {
        let html = render(member(false), Some(Route::Recommendations), Vec::new());
        assert!(html.contains(&crate::i18n::t("survey.title")), "{html}");
    }

    #[test]
    fn surveyed_member_sees_cards_and_unread_badge() {
        let items = vec![Recommendation {
            name: String::from("Blue Dream"),
            strain_type: String::from("hybrid"),
            effects: vec![String::from("Relaxed")],
            terpenes: vec![String::from("Myrcene")],
            may_relieve: Vec::new(),
            similarity_score: Some(0.92),
        }];
        let html = render(member(true), Some(Route::Recommendations), items);
        assert!(html.contains("Blue Dream"), "{html}");
        assert!(html.contains(&crate::i18n::t("nav.logout")), "{html}");
        assert!(html.contains("badge-secondary"), "{html}");
    }

    #[test]
    fn unknown_path_lands_on_recommendations_for_members() {
        let html = render(member(true), None, Vec::new());
        assert!(html.contains(&crate::i18n::t("recommendations.title")), "{html}");
    }
}
