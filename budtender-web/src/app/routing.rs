use crate::router::Route;
use budtender_core::{GuardFlags, Screen, resolve_route};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// Screen actually shown for `route`; an unknown path falls back to the root rules.
#[must_use]
pub fn screen_for(flags: GuardFlags, route: Option<&Route>) -> Screen {
    let requested = route.map_or(Screen::NotFound, Route::to_screen);
    resolve_route(flags, &requested)
}

/// Where the browser must be sent instead of `route`, if anywhere.
#[must_use]
pub fn redirect_for(flags: GuardFlags, route: Option<&Route>) -> Option<Route> {
    let target = Route::from_screen(&screen_for(flags, route));
    (Some(&target) != route).then_some(target)
}

/// Replace the URL whenever the guard resolves the current route elsewhere.
/// Nothing moves while the session is still loading.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_route_guard(
    flags: GuardFlags,
    loading: bool,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    use_effect_with((flags, loading, route), move |(flags, loading, route)| {
        if *loading {
            return;
        }
        if let (Some(nav), Some(target)) = (navigator.as_ref(), redirect_for(*flags, route.as_ref())) {
            log::debug!("guard redirect to {target:?}");
            nav.replace(&target);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNED_OUT: GuardFlags = GuardFlags::new(true, false, false);
    const NEW_MEMBER: GuardFlags = GuardFlags::new(true, true, false);
    const MEMBER: GuardFlags = GuardFlags::new(true, true, true);

    #[test]
    fn age_gate_blocks_everything() {
        let flags = GuardFlags::new(false, true, true);
        assert_eq!(
            redirect_for(flags, Some(&Route::Profile)),
            Some(Route::Home)
        );
        assert_eq!(redirect_for(flags, Some(&Route::Home)), None);
    }

    #[test]
    fn signed_out_visitors_land_on_signup() {
        assert_eq!(
            redirect_for(SIGNED_OUT, Some(&Route::Recommendations)),
            Some(Route::Signup)
        );
        assert_eq!(redirect_for(SIGNED_OUT, Some(&Route::Login)), None);
        assert_eq!(redirect_for(SIGNED_OUT, Some(&Route::Home)), Some(Route::Signup));
    }

    #[test]
    fn survey_gates_only_recommendations() {
        assert_eq!(
            redirect_for(NEW_MEMBER, Some(&Route::Recommendations)),
            Some(Route::Survey)
        );
        assert_eq!(redirect_for(NEW_MEMBER, Some(&Route::Profile)), None);
        let review = Route::Review {
            strain: "gelato".into(),
        };
        assert_eq!(redirect_for(NEW_MEMBER, Some(&review)), None);
    }

    #[test]
    fn unknown_paths_follow_the_root_rules() {
        assert_eq!(redirect_for(MEMBER, None), Some(Route::Recommendations));
        assert_eq!(
            redirect_for(MEMBER, Some(&Route::NotFound)),
            Some(Route::Recommendations)
        );
        assert_eq!(screen_for(MEMBER, Some(&Route::Login)), Screen::Recommendations);
    }
}
