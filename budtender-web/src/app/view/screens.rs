use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::{
    age_gate::AgeGatePage, leaderboard::LeaderboardPage, loading::LoadingPage, login::LoginPage,
    notifications::NotificationsPage, profile::ProfilePage, recommendations::RecommendationsPage,
    review::ReviewPage, signup::SignupPage, strain::StrainPage, survey::SurveyPage,
};
use budtender_core::{Screen, SurveyDraft};
use yew::prelude::*;

/// The page for an already-resolved screen.
pub fn render_screen(state: &AppState, handlers: &AppHandlers, screen: &Screen) -> Html {
    let session = &*state.session;
    match screen {
        Screen::AgeGate => html! {
            <AgeGatePage
                current_year={crate::dom::current_year()}
                on_verified={handlers.verify_age.clone()}
                on_exit={handlers.exit_age.clone()}
            />
        },
        Screen::Signup => {
            // Field-level errors replace the banner.
            let banner = if state.signup_errors.is_empty() {
                session.auth_error.clone()
            } else {
                None
            };
            html! {
                <SignupPage
                    busy={*state.busy || session.loading}
                    server_errors={(*state.signup_errors).clone()}
                    {banner}
                    on_submit={handlers.signup.clone()}
                    on_dismiss={handlers.dismiss.clone()}
                    on_login={handlers.go_login.clone()}
                />
            }
        }
        Screen::Login => html! {
            <LoginPage
                busy={*state.busy || session.loading}
                banner={session.auth_error.clone()}
                on_submit={handlers.login.clone()}
                on_dismiss={handlers.dismiss.clone()}
                on_signup={handlers.go_signup.clone()}
            />
        },
        Screen::Survey => {
            let Some(user) = session.user.as_ref() else {
                return html! { <LoadingPage /> };
            };
            html! {
                <SurveyPage
                    user_id={user.user_id}
                    initial={SurveyDraft::from_preferences(&user.preferences)}
                    strains={state.strains.data.clone()}
                    strains_loading={state.strains.loading}
                    busy={*state.busy}
                    banner={(*state.banner).clone()}
                    on_submit={handlers.submit_survey.clone()}
                    on_dismiss={handlers.dismiss.clone()}
                />
            }
        }
        Screen::Recommendations => html! {
            <RecommendationsPage
                items={state.recommendations.data.clone()}
                loading={state.recommendations.loading}
                error={state.recommendations.error.clone()}
                retries_left={state.manual_retry.remaining()}
                favorites={(*state.favorites).clone()}
                feedback={(*state.feedback).clone()}
                banner={(*state.banner).clone()}
                on_retry={handlers.retry_recommendations.clone()}
                on_feedback={handlers.feedback.clone()}
                on_favorite={handlers.favorite.clone()}
                on_details={handlers.details.clone()}
                on_survey={handlers.go_survey.clone()}
                on_dismiss={handlers.dismiss.clone()}
            />
        },
        Screen::Profile => {
            let Some(user) = session.user.as_ref() else {
                return html! { <LoadingPage /> };
            };
            html! {
                <ProfilePage
                    profile={user.clone()}
                    feedbacks={(*state.feedback_history).clone()}
                    favorites={(*state.favorites).clone()}
                    refreshing={*state.profile_refreshing}
                    banner={(*state.banner).clone()}
                    on_refresh={handlers.refresh_profile.clone()}
                    on_strain={handlers.details.clone()}
                    on_edit_survey={handlers.go_survey.clone()}
                    on_dismiss={handlers.dismiss.clone()}
                />
            }
        }
        Screen::Strain(name) => html! {
            <StrainPage
                name={name.clone()}
                details={state.strain_detail.data.clone()}
                tally={(*state.strain_tally).clone()}
                loading={state.strain_detail.loading}
                error={state.strain_detail.error.clone()}
                favorite={state.favorites.contains(name)}
                banner={(*state.banner).clone()}
                on_favorite={handlers.favorite.clone()}
                on_review={handlers.write_review.clone()}
                on_back={handlers.go_back.clone()}
                on_dismiss={handlers.dismiss.clone()}
            />
        },
        Screen::Review(strain) => {
            let Some(user_id) = session.user_id else {
                return html! { <LoadingPage /> };
            };
            let on_done = {
                let done = handlers.review_done.clone();
                let strain = strain.clone();
                Callback::from(move |()| done.emit(strain.clone()))
            };
            html! {
                <ReviewPage
                    strain={strain.clone()}
                    {user_id}
                    busy={*state.busy}
                    submitted={*state.review_submitted}
                    banner={(*state.banner).clone()}
                    on_submit={handlers.review.clone()}
                    on_dismiss={handlers.dismiss.clone()}
                    {on_done}
                />
            }
        }
        Screen::Notifications => html! {
            <NotificationsPage
                items={state.notifications.data.clone()}
                loading={state.notifications.loading}
                error={state.notifications.error.clone()}
                banner={(*state.banner).clone()}
                on_toggle_read={handlers.toggle_read.clone()}
                on_mark_all={handlers.mark_all_read.clone()}
                on_delete={handlers.delete_notification.clone()}
                on_open={handlers.open_notification.clone()}
                on_refresh={handlers.refresh_notifications.clone()}
                on_dismiss={handlers.dismiss.clone()}
            />
        },
        Screen::Leaderboard => html! {
            <LeaderboardPage
                entries={state.leaderboard.data.clone()}
                time_frame={*state.time_frame}
                user_id={session.user_id}
                loading={state.leaderboard.loading}
                error={state.leaderboard.error.clone()}
                on_time_frame={handlers.time_frame.clone()}
                on_refresh={handlers.refresh_leaderboard.clone()}
            />
        },
        // Resolution never lands here; the guard maps it to a landing screen.
        Screen::NotFound => Html::default(),
    }
}
