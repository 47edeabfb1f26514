//! Navigation guard.
//!
//! The reachable screen is a pure function of the three session flags and the
//! requested screen; nothing about "where the user currently is" is stored.

/// Every navigable screen of the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Screen {
    AgeGate,
    Signup,
    Login,
    Survey,
    Recommendations,
    Profile,
    /// Review form for the named strain.
    Review(String),
    /// Detail page for the named strain.
    Strain(String),
    Notifications,
    Leaderboard,
    NotFound,
}

/// Who may see a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Root / fallback: always redirected to the landing screen.
    Open,
    /// Only while signed out (signup, login).
    Guest,
    /// Any signed-in user, survey or not.
    Member,
    /// Signed in with a completed survey.
    Surveyed,
}

impl Screen {
    #[must_use]
    pub const fn access(&self) -> Access {
        match self {
            Self::AgeGate | Self::NotFound => Access::Open,
            Self::Signup | Self::Login => Access::Guest,
            Self::Survey
            | Self::Profile
            | Self::Review(_)
            | Self::Strain(_)
            | Self::Notifications
            | Self::Leaderboard => Access::Member,
            Self::Recommendations => Access::Surveyed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct GuardFlags {
    pub age_verified: bool,
    pub authenticated: bool,
    pub survey_completed: bool,
}

impl GuardFlags {
    #[must_use]
    pub const fn new(age_verified: bool, authenticated: bool, survey_completed: bool) -> Self {
        Self {
            age_verified,
            authenticated,
            survey_completed,
        }
    }

    /// All eight flag combinations, in binary order.
    #[must_use]
    pub fn all() -> [Self; 8] {
        std::array::from_fn(|bits| Self::new(bits & 4 != 0, bits & 2 != 0, bits & 1 != 0))
    }
}

/// Canonical landing screen for a flag combination.
#[must_use]
pub const fn landing_for(flags: GuardFlags) -> Screen {
    if !flags.age_verified {
        Screen::AgeGate
    } else if !flags.authenticated {
        Screen::Signup
    } else if !flags.survey_completed {
        Screen::Survey
    } else {
        Screen::Recommendations
    }
}

/// Decide which screen to show when `requested` is asked for under `flags`.
///
/// Rules are evaluated top-down: age first, then authentication, then survey
/// completion for screens that need it.
#[must_use]
pub fn resolve_route(flags: GuardFlags, requested: &Screen) -> Screen {
    if !flags.age_verified {
        return Screen::AgeGate;
    }
    match requested.access() {
        Access::Open => landing_for(flags),
        Access::Guest if flags.authenticated => landing_for(flags),
        Access::Guest => requested.clone(),
        Access::Member | Access::Surveyed if !flags.authenticated => Screen::Signup,
        Access::Surveyed if !flags.survey_completed => Screen::Survey,
        Access::Member | Access::Surveyed => requested.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_screen() -> Vec<Screen> {
        vec![
            Screen::AgeGate,
            Screen::Signup,
            Screen::Login,
            Screen::Survey,
            Screen::Recommendations,
            Screen::Profile,
            Screen::Review("gelato".into()),
            Screen::Strain("gelato".into()),
            Screen::Notifications,
            Screen::Leaderboard,
            Screen::NotFound,
        ]
    }

    #[test]
    fn unverified_age_always_lands_on_gate() {
        for flags in GuardFlags::all().into_iter().filter(|f| !f.age_verified) {
            for screen in every_screen() {
                assert_eq!(resolve_route(flags, &screen), Screen::AgeGate);
            }
        }
    }

    #[test]
    fn signed_out_users_reach_signup_or_login_only() {
        let flags = GuardFlags::new(true, false, false);
        assert_eq!(resolve_route(flags, &Screen::Login), Screen::Login);
        assert_eq!(resolve_route(flags, &Screen::Signup), Screen::Signup);
        for screen in every_screen() {
            let resolved = resolve_route(flags, &screen);
            assert!(
                matches!(resolved, Screen::Signup | Screen::Login),
                "{screen:?} resolved to {resolved:?}"
            );
        }
    }

    #[test]
    fn survey_gates_recommendations_only() {
        let flags = GuardFlags::new(true, true, false);
        assert_eq!(resolve_route(flags, &Screen::Recommendations), Screen::Survey);
        assert_eq!(resolve_route(flags, &Screen::Profile), Screen::Profile);
        assert_eq!(
            resolve_route(flags, &Screen::Review("x".into())),
            Screen::Review("x".into())
        );
        assert_eq!(resolve_route(flags, &Screen::Login), Screen::Survey);
    }

    #[test]
    fn surveyed_users_land_on_recommendations() {
        let flags = GuardFlags::new(true, true, true);
        assert_eq!(resolve_route(flags, &Screen::NotFound), Screen::Recommendations);
        assert_eq!(resolve_route(flags, &Screen::Signup), Screen::Recommendations);
        assert_eq!(resolve_route(flags, &Screen::Survey), Screen::Survey);
        assert_eq!(
            resolve_route(flags, &Screen::Recommendations),
            Screen::Recommendations
        );
    }

    #[test]
    fn root_resolves_to_one_landing_per_combination() {
        for flags in GuardFlags::all() {
            let landing = resolve_route(flags, &Screen::AgeGate);
            assert_eq!(landing, landing_for(flags));
            assert!(matches!(
                landing,
                Screen::AgeGate | Screen::Signup | Screen::Survey | Screen::Recommendations
            ));
            // Resolving the landing again is stable.
            assert_eq!(resolve_route(flags, &landing), landing);
        }
    }

    #[test]
    fn guard_is_idempotent() {
        for flags in GuardFlags::all() {
            for screen in every_screen() {
                let once = resolve_route(flags, &screen);
                assert_eq!(resolve_route(flags, &once), once);
            }
        }
    }
}
