use crate::components::daisy_ui::{Badge, DaisyColor, Navbar};
use crate::i18n::{locales, t};
use crate::router::Route;
use wasm_bindgen::JsCast;
use yew_router::Routable;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub age_verified: bool,
    pub authenticated: bool,
    #[prop_or_default]
    pub unread: usize,
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

fn nav_button(label: String, route: Route, on_navigate: &Callback<Route>) -> Html {
    let onclick = {
        let cb = on_navigate.clone();
        let route = route.clone();
        Callback::from(move |_: MouseEvent| cb.emit(route.clone()))
    };
    html! {
        <button type="button" class="btn btn-ghost btn-sm" data-route={route.to_path()} {onclick}>{ label }</button>
    }
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let lang_select = html! {
        <>
            <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
            <select id="lang-select" class="select select-sm" onchange={on_change} aria-label={t("nav.language")}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                }) }
            </select>
        </>
    };
    let brand = html! { <span class="text-xl font-bold">{ t("app.title") }</span> };

    // Nothing to navigate to until the visitor has passed the age gate.
    if !p.age_verified {
        return html! {
            <header role="banner">
                <Navbar brand={brand} end={lang_select} />
            </header>
        };
    }

    let links = if p.authenticated {
        let notifications_label = t("nav.notifications");
        let notifications = {
            let cb = p.on_navigate.clone();
            let onclick = Callback::from(move |_: MouseEvent| cb.emit(Route::Notifications));
            html! {
                <button type="button" class="btn btn-ghost btn-sm" data-route="/notifications" {onclick}>
                    { notifications_label }
                    if p.unread > 0 {
                        <Badge variant={DaisyColor::Secondary} label={AttrValue::from(p.unread.to_string())} />
                    }
                </button>
            }
        };
        html! {
            <>
                { nav_button(t("nav.recommendations"), Route::Recommendations, &p.on_navigate) }
                { nav_button(t("nav.survey"), Route::Survey, &p.on_navigate) }
                { nav_button(t("nav.profile"), Route::Profile, &p.on_navigate) }
                { notifications }
                { nav_button(t("nav.leaderboard"), Route::Leaderboard, &p.on_navigate) }
            </>
        }
    } else {
        html! {
            <>
                { nav_button(t("nav.login"), Route::Login, &p.on_navigate) }
                { nav_button(t("nav.signup"), Route::Signup, &p.on_navigate) }
            </>
        }
    };

    let end = {
        let logout = p.authenticated.then(|| {
            let cb = p.on_logout.clone();
            let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
            html! { <button id="logout-btn" type="button" class="btn btn-outline btn-sm" {onclick}>{ t("nav.logout") }</button> }
        });
        html! {
            <>
                { lang_select }
                { logout.unwrap_or_default() }
            </>
        }
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <Navbar brand={brand} center={links} end={end} />
        </header>
    }
}
