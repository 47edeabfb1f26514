use crate::components::daisy_ui::{Card, Input};
use crate::i18n::t;
use crate::pages::error_banner;
use budtender_core::{Credentials, Field, FieldErrors, SignupForm};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SignupPageProps {
    #[prop_or_default]
    pub busy: bool,
    /// Field errors reported by the server for the last attempt.
    #[prop_or_default]
    pub server_errors: FieldErrors,
    #[prop_or_default]
    pub banner: Option<String>,
    pub on_submit: Callback<Credentials>,
    pub on_dismiss: Callback<()>,
    pub on_login: Callback<()>,
}

/// Local errors win; server errors show until the field is edited.
pub(crate) fn field_error(
    local: &FieldErrors,
    server: &FieldErrors,
    edited: &[Field],
    field: Field,
) -> Option<AttrValue> {
    local
        .get(field)
        .or_else(|| (!edited.contains(&field)).then(|| server.get(field)).flatten())
        .map(|msg| AttrValue::from(msg.to_string()))
}

#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    let form = use_state(SignupForm::default);
    let errors = use_state(FieldErrors::default);
    let edited = use_state(Vec::<Field>::new);

    {
        // A new server verdict applies to the inputs as they are now.
        let edited = edited.clone();
        use_effect_with(props.server_errors.clone(), move |_| {
            edited.set(Vec::new());
        });
    }

    let on_field = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        let edited = edited.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            match field {
                Field::Email => next.email = value,
                Field::Password => next.password = value,
                Field::ConfirmPassword => next.confirm_password = value,
            }
            form.set(next);
            let mut errs = (*errors).clone();
            errs.clear(field);
            errors.set(errs);
            if !edited.contains(&field) {
                let mut list = (*edited).clone();
                list.push(field);
                edited.set(list);
            }
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

    let on_login = {
        let cb = props.on_login.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let err = |field| field_error(&errors, &props.server_errors, &edited, field);

    html! {
        <section class="max-w-md mx-auto py-8" aria-labelledby="signup-title">
            <Card>
                <h1 id="signup-title" class="text-2xl font-bold">{ t("signup.title") }</h1>
                { error_banner(props.banner.as_ref(), &props.on_dismiss) }
                <form id="signup-form" class="flex flex-col gap-3" onsubmit={on_submit} novalidate=true>
                    <Input
                        id="signup-email"
                        label={AttrValue::from(t("form.email"))}
                        input_type="email"
                        autocomplete="email"
                        value={AttrValue::from(form.email.clone())}
                        error={err(Field::Email)}
                        oninput={on_field(Field::Email)}
                    />
                    <Input
                        id="signup-password"
                        label={AttrValue::from(t("form.password"))}
                        input_type="password"
                        autocomplete="new-password"
                        value={AttrValue::from(form.password.clone())}
                        error={err(Field::Password)}
                        oninput={on_field(Field::Password)}
                    />
                    <p class="text-xs opacity-70">{ t("signup.password_rules") }</p>
                    <Input
                        id="signup-confirm"
                        label={AttrValue::from(t("form.confirm_password"))}
                        input_type="password"
                        autocomplete="new-password"
                        value={AttrValue::from(form.confirm_password.clone())}
                        error={err(Field::ConfirmPassword)}
                        oninput={on_field(Field::ConfirmPassword)}
                    />
                    <button type="submit" class="btn btn-primary" disabled={props.busy}>
                        { if props.busy { t("signup.submitting") } else { t("signup.submit") } }
                    </button>
                </form>
                <p class="text-sm">
                    { t("signup.have_account") }{ " " }
                    <button type="button" class="btn btn-link btn-sm" onclick={on_login}>{ t("nav.login") }</button>
                </p>
            </Card>
        </section>
    }
}
