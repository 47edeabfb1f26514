use crate::components::daisy_ui::{Card, Input};
use crate::i18n::t;
use crate::pages::error_banner;
use budtender_core::{Credentials, Field, FieldErrors, LoginForm};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoginPageProps {
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub banner: Option<String>,
    pub on_submit: Callback<Credentials>,
    pub on_dismiss: Callback<()>,
    pub on_signup: Callback<()>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let form = use_state(LoginForm::default);
    let errors = use_state(FieldErrors::default);

    let on_email = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            form.set(LoginForm {
                email: value,
                ..(*form).clone()
            });
            let mut errs = (*errors).clone();
            errs.clear(Field::Email);
            errors.set(errs);
        })
    };
    let on_password = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            form.set(LoginForm {
                password: value,
                ..(*form).clone()
            });
            let mut errs = (*errors).clone();
            errs.clear(Field::Password);
            errors.set(errs);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let cb = props.on_submit.clone();
        let busy = props.busy;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if busy {
                return;
            }
            match form.validate() {
                Ok(credentials) => {
                    errors.set(FieldErrors::default());
                    cb.emit(credentials);
                }
                Err(errs) => errors.set(errs),
            }
        })
    };

    let on_signup = {
        let cb = props.on_signup.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let err = |field| errors.get(field).map(|m| AttrValue::from(m.to_string()));

    html! {
        <section class="max-w-md mx-auto py-8" aria-labelledby="login-title">
            <Card>
                <h1 id="login-title" class="text-2xl font-bold">{ t("login.title") }</h1>
                { error_banner(props.banner.as_ref(), &props.on_dismiss) }
                <form id="login-form" class="flex flex-col gap-3" onsubmit={on_submit} novalidate=true>
                    <Input
                        id="login-email"
                        label={AttrValue::from(t("form.email"))}
                        input_type="email"
                        autocomplete="email"
                        value={AttrValue::from(form.email.clone())}
                        error={err(Field::Email)}
                        oninput={on_email}
                    />
                    <Input
                        id="login-password"
                        label={AttrValue::from(t("form.password"))}
                        input_type="password"
                        autocomplete="current-password"
                        value={AttrValue::from(form.password.clone())}
                        error={err(Field::Password)}
                        oninput={on_password}
                    />
                    <button type="submit" class="btn btn-primary" disabled={props.busy}>
                        { if props.busy { t("login.submitting") } else { t("login.submit") } }
                    </button>
                </form>
                <p class="text-sm">
                    { t("login.no_account") }{ " " }
                    <button type="button" class="btn btn-link btn-sm" onclick={on_signup}>{ t("nav.signup") }</button>
                </p>
            </Card>
        </section>
    }
}
