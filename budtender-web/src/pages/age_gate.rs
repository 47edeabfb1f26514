use crate::components::daisy_ui::{Alert, Card, Checkbox, DaisyColor, Modal};
use crate::i18n::{t, tr};
use budtender_core::constants::MINIMUM_AGE;
use budtender_core::{AgeClaim, AgeError};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Youngest birth year offered is `current_year - OFFSET`.
const BIRTH_YEAR_OFFSET: i32 = 15;
const BIRTH_YEAR_SPAN: i32 = 100;

#[derive(Properties, Clone, PartialEq)]
pub struct AgeGatePageProps {
    pub current_year: i32,
    pub on_verified: Callback<()>,
    /// Visitor is under age and chose to leave.
    pub on_exit: Callback<()>,
}

#[must_use]
pub fn birth_years(current_year: i32) -> Vec<i32> {
    (0..BIRTH_YEAR_SPAN)
        .map(|i| current_year - BIRTH_YEAR_OFFSET - i)
        .collect()
}

#[function_component(AgeGatePage)]
pub fn age_gate_page(props: &AgeGatePageProps) -> Html {
    let detailed = use_state(|| false);
    let year = use_state(|| None::<i32>);
    let terms = use_state(|| false);
    let error = use_state(|| None::<String>);
    let underage = use_state(|| false);

    let minimum = MINIMUM_AGE.to_string();
    let age_args = BTreeMap::from([("age", minimum.as_str())]);

    let on_confirm = {
        let on_verified = props.on_verified.clone();
        Callback::from(move |_: MouseEvent| on_verified.emit(()))
    };
    let on_deny = {
        let underage = underage.clone();
        Callback::from(move |_: MouseEvent| underage.set(true))
    };
    let on_show_detailed = {
        let detailed = detailed.clone();
        Callback::from(move |_: MouseEvent| detailed.set(true))
    };

    let on_year = {
        let year = year.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                year.set(sel.value().parse::<i32>().ok());
                error.set(None);
            }
        })
    };
    let on_terms = {
        let terms = terms.clone();
        let error = error.clone();
        Callback::from(move |checked: bool| {
            terms.set(checked);
            error.set(None);
        })
    };

    let on_submit = {
        let year = year.clone();
        let terms = terms.clone();
        let error = error.clone();
        let underage = underage.clone();
        let on_verified = props.on_verified.clone();
        let current_year = props.current_year;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let claim = AgeClaim::BirthYear {
                year: *year,
                terms_accepted: *terms,
            };
            match claim.check(current_year, MINIMUM_AGE) {
                Ok(()) => on_verified.emit(()),
                Err(AgeError::Incomplete) => error.set(Some(t("age.incomplete"))),
                Err(AgeError::Underage { .. }) => underage.set(true),
            }
        })
    };

    let on_exit = {
        let cb = props.on_exit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_back = {
        let underage = underage.clone();
        Callback::from(move |()| underage.set(false))
    };

    let simple = html! {
        <div class="flex flex-col gap-3">
            <button id="age-confirm" type="button" class="btn btn-primary" onclick={on_confirm}>
                { tr("age.confirm", Some(&age_args)) }
            </button>
            <button id="age-deny" type="button" class="btn btn-ghost" onclick={on_deny}>
                { tr("age.deny", Some(&age_args)) }
            </button>
            <button type="button" class="btn btn-link btn-sm" onclick={on_show_detailed}>
                { t("age.use_birth_year") }
            </button>
        </div>
    };

    let detailed_form = html! {
        <form id="age-form" class="flex flex-col gap-3" onsubmit={on_submit} novalidate=true>
            <label for="birth-year" class="label">{ t("age.birth_year") }</label>
            <select id="birth-year" class="select select-bordered" onchange={on_year} required=true>
                <option value="" selected={year.is_none()} disabled=true>{ t("age.select_year") }</option>
                { for birth_years(props.current_year).into_iter().map(|y| html! {
                    <option value={y.to_string()} selected={*year == Some(y)}>{ y.to_string() }</option>
                }) }
            </select>
            <Checkbox label={AttrValue::from(t("age.terms"))} checked={*terms} on_toggle={on_terms} />
            if let Some(msg) = (*error).clone() {
                <Alert variant={DaisyColor::Warning} message={AttrValue::from(msg)} />
            }
            <button type="submit" class="btn btn-primary">{ t("age.continue") }</button>
        </form>
    };

    let exit_actions = html! {
        <>
            <button id="age-exit" type="button" class="btn btn-error" onclick={on_exit}>{ t("age.exit") }</button>
        </>
    };

    html! {
        <section class="max-w-md mx-auto py-8" aria-labelledby="age-title">
            <Card>
                <h1 id="age-title" class="text-2xl font-bold">{ t("age.title") }</h1>
                <p>{ tr("age.intro", Some(&age_args)) }</p>
                if *detailed { { detailed_form } } else { { simple } }
                <p class="text-xs opacity-70">{ t("age.disclaimer") }</p>
            </Card>
            <Modal
                open={*underage}
                title={AttrValue::from(t("age.denied_title"))}
                description={AttrValue::from(tr("age.denied_message", Some(&age_args)))}
                actions={exit_actions}
                on_close={on_back}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_years_cover_a_century_below_the_cutoff() {
        let years = birth_years(2025);
        assert_eq!(years.len(), 100);
        assert_eq!(years.first(), Some(&2010));
        assert_eq!(years.last(), Some(&1911));
    }
}
