//! Screens. Every page is driven by props and callbacks so it renders the same
//! in the browser and under server-side rendering in tests.

pub mod age_gate;
pub mod leaderboard;
pub mod loading;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod recommendations;
pub mod review;
pub mod signup;
pub mod strain;
pub mod survey;

use crate::components::daisy_ui::{Alert, DaisyColor};
use yew::prelude::*;

/// Dismissible error banner shared by the form and listing screens.
#[must_use]
pub fn error_banner(message: Option<&String>, on_dismiss: &Callback<()>) -> Html {
    message.map_or_else(Html::default, |msg| {
        html! {
            <Alert
                variant={DaisyColor::Error}
                message={AttrValue::from(msg.clone())}
                on_dismiss={on_dismiss.clone()}
            />
        }
    })
}
