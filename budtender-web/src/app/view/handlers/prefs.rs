use crate::app::state::AppState;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(code);
    })
}

pub fn build_navigate(navigator: Option<Navigator>) -> Callback<Route> {
    Callback::from(move |route: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

/// Navigate to a fixed route, ignoring the payload.
pub fn build_go<T: 'static>(navigator: Option<Navigator>, route: Route) -> Callback<T> {
    Callback::from(move |_: T| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

/// Strain names open their detail page.
pub fn build_strain_details(navigator: Option<Navigator>) -> Callback<String> {
    Callback::from(move |name: String| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Strain { name });
        }
    })
}

pub fn build_write_review(navigator: Option<Navigator>) -> Callback<String> {
    Callback::from(move |strain: String| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Review { strain });
        }
    })
}

/// Leave the thank-you panel for the reviewed strain's page.
pub fn build_review_done(state: &AppState, navigator: Option<Navigator>) -> Callback<String> {
    let submitted = state.review_submitted.clone();
    Callback::from(move |name: String| {
        submitted.set(false);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Strain { name });
        }
    })
}
