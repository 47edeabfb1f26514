use budtender_core::Screen;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/survey")]
    Survey,
    #[at("/recommendations")]
    Recommendations,
    #[at("/profile")]
    Profile,
    #[at("/review/:strain")]
    Review { strain: String },
    #[at("/strain/:name")]
    Strain { name: String },
    #[at("/notifications")]
    Notifications,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// The screen this URL asks for. The root path is the age gate.
    #[must_use]
    pub fn to_screen(&self) -> Screen {
        match self {
            Self::Home => Screen::AgeGate,
            Self::Signup => Screen::Signup,
            Self::Login => Screen::Login,
            Self::Survey => Screen::Survey,
            Self::Recommendations => Screen::Recommendations,
            Self::Profile => Screen::Profile,
            Self::Review { strain } => Screen::Review(strain.clone()),
            Self::Strain { name } => Screen::Strain(name.clone()),
            Self::Notifications => Screen::Notifications,
            Self::Leaderboard => Screen::Leaderboard,
            Self::NotFound => Screen::NotFound,
        }
    }

    #[must_use]
    pub fn from_screen(screen: &Screen) -> Self {
        match screen {
            Screen::AgeGate => Self::Home,
            Screen::Signup => Self::Signup,
            Screen::Login => Self::Login,
            Screen::Survey => Self::Survey,
            Screen::Recommendations => Self::Recommendations,
            Screen::Profile => Self::Profile,
            Screen::Review(strain) => Self::Review {
                strain: strain.clone(),
            },
            Screen::Strain(name) => Self::Strain { name: name.clone() },
            Screen::Notifications => Self::Notifications,
            Screen::Leaderboard => Self::Leaderboard,
            Screen::NotFound => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_round_trip_through_routes() {
        let screens = [
            Screen::AgeGate,
            Screen::Signup,
            Screen::Login,
            Screen::Survey,
            Screen::Recommendations,
            Screen::Profile,
            Screen::Review("blue dream".into()),
            Screen::Strain("og kush".into()),
            Screen::Notifications,
            Screen::Leaderboard,
            Screen::NotFound,
        ];
        for screen in screens {
            assert_eq!(Route::from_screen(&screen).to_screen(), screen);
        }
    }

    #[test]
    fn paths_match_route_table() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Leaderboard.to_path(), "/leaderboard");
        assert_eq!(
            Route::recognize("/strain/gelato"),
            Some(Route::Strain {
                name: "gelato".into()
            })
        );
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
