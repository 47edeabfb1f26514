use crate::components::daisy_ui::{Alert, Card, Checkbox, DaisyColor, Input, Loading};
use crate::i18n::t;
use crate::pages::error_banner;
use budtender_core::catalog::{CONDITIONS, SURVEY_EFFECTS, TERPENES};
use budtender_core::{ExperienceLevel, SurveyDraft, SurveyError, SurveyRequest, UserId};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SurveyPageProps {
    pub user_id: UserId,
    /// Answers already on the profile, if any.
    #[prop_or_default]
    pub initial: SurveyDraft,
    /// Strain names for the familiar-strain suggestions.
    #[prop_or_default]
    pub strains: Vec<String>,
    #[prop_or_default]
    pub strains_loading: bool,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub banner: Option<String>,
    pub on_submit: Callback<SurveyRequest>,
    pub on_dismiss: Callback<()>,
}

const fn error_key(err: SurveyError) -> &'static str {
    match err {
        SurveyError::NoEffects => "survey.error.no_effects",
        SurveyError::NoExperience => "survey.error.no_experience",
    }
}

const fn experience_hint_key(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Novice => "survey.experience.novice_hint",
        ExperienceLevel::Intermediate => "survey.experience.intermediate_hint",
        ExperienceLevel::Experienced => "survey.experience.experienced_hint",
    }
}

/// Checkbox grid that toggles names in one list of the draft.
fn choice_grid(
    names: &[&'static str],
    selected: &[String],
    draft: &UseStateHandle<SurveyDraft>,
    pick: fn(&mut SurveyDraft) -> &mut Vec<String>,
) -> Html {
    html! {
        <div class="grid grid-cols-2 gap-1">
            { for names.iter().map(|name| {
                let draft = draft.clone();
                let name = *name;
                let on_toggle = Callback::from(move |_: bool| {
                    let mut next = (*draft).clone();
                    SurveyDraft::toggle(pick(&mut next), name);
                    draft.set(next);
                });
                html! {
                    <Checkbox
                        label={AttrValue::from(name)}
                        checked={selected.iter().any(|s| s == name)}
                        on_toggle={on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[function_component(SurveyPage)]
pub fn survey_page(props: &SurveyPageProps) -> Html {
    let draft = use_state(|| props.initial.clone());
    let error = use_state(|| None::<SurveyError>);
    let strain_query = use_state(String::new);

    {
        let draft = draft.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            draft.set(initial.clone());
        });
    }

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let cb = props.on_submit.clone();
        let user_id = props.user_id;
        let busy = props.busy;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if busy {
                return;
            }
            match draft.validate(user_id) {
                Ok(request) => {
                    error.set(None);
                    cb.emit(request);
                }
                Err(err) => error.set(Some(err)),
            }
        })
    };

    let on_query = {
        let strain_query = strain_query.clone();
        Callback::from(move |value: String| strain_query.set(value))
    };
    let on_add_strain = {
        let draft = draft.clone();
        let strain_query = strain_query.clone();
        Callback::from(move |_: MouseEvent| {
            let name = strain_query.trim().to_string();
            if name.is_empty() || draft.familiar_strains.contains(&name) {
                return;
            }
            let mut next = (*draft).clone();
            next.familiar_strains.push(name);
            draft.set(next);
            strain_query.set(String::new());
        })
    };

    let familiar = html! {
        <div class="flex flex-wrap gap-1">
            { for draft.familiar_strains.iter().map(|name| {
                let draft = draft.clone();
                let owned = name.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    let mut next = (*draft).clone();
                    next.familiar_strains.retain(|s| s != &owned);
                    draft.set(next);
                });
                html! {
                    <button type="button" class="badge badge-outline gap-1" {onclick} aria-label={format!("{} {name}", t("ui.remove"))}>
                        { name.clone() }{ " ✕" }
                    </button>
                }
            }) }
        </div>
    };

    let experience = html! {
        <div class="flex flex-col gap-1" role="radiogroup" aria-label={t("survey.experience.title")}>
            { for ExperienceLevel::ALL.into_iter().map(|level| {
                let checked = draft.experience_level == Some(level);
                let draft = draft.clone();
                let error = error.clone();
                let onchange = Callback::from(move |_: Event| {
                    draft.set(SurveyDraft {
                        experience_level: Some(level),
                        ..(*draft).clone()
                    });
                    error.set(None);
                });
                html! {
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="radio"
                            name="experience"
                            class="radio"
                            value={level.label()}
                            {checked}
                            {onchange}
                        />
                        <span>{ level.label() }</span>
                    </label>
                }
            }) }
            if let Some(level) = draft.experience_level {
                <p class="text-sm opacity-80">{ t(experience_hint_key(level)) }</p>
            }
        </div>
    };

    let effects = html! {
        <div class="flex flex-col gap-1">
            { for SURVEY_EFFECTS.iter().map(|option| {
                let name = option.name;
                let checked = draft.desired_effects.iter().any(|s| s == name);
                let draft = draft.clone();
                let error = error.clone();
                let on_toggle = Callback::from(move |_: bool| {
                    let mut next = (*draft).clone();
                    SurveyDraft::toggle(&mut next.desired_effects, name);
                    draft.set(next);
                    error.set(None);
                });
                html! {
                    <div>
                        <Checkbox
                            label={AttrValue::from(name)}
                            {checked}
                            on_toggle={on_toggle}
                        />
                        <p class="text-xs opacity-70 ml-8">{ option.description }</p>
                    </div>
                }
            }) }
        </div>
    };

    html! {
        <section class="max-w-2xl mx-auto py-6" aria-labelledby="survey-title">
            <Card>
                <h1 id="survey-title" class="text-2xl font-bold">{ t("survey.title") }</h1>
                <p>{ t("survey.welcome") }</p>
                { error_banner(props.banner.as_ref(), &props.on_dismiss) }
                <form id="survey-form" class="flex flex-col gap-6" onsubmit={on_submit} novalidate=true>
                    <fieldset>
                        <legend class="font-semibold">{ t("survey.effects") }</legend>
                        { effects }
                    </fieldset>
                    <fieldset>
                        <legend class="font-semibold">{ t("survey.experience.title") }</legend>
                        { experience }
                    </fieldset>
                    <fieldset>
                        <legend class="font-semibold">{ t("survey.familiar") }</legend>
                        if props.strains_loading {
                            <Loading label={AttrValue::from(t("survey.strains_loading"))} />
                        }
                        <div class="flex gap-2 items-end">
                            <Input
                                id="familiar-strain"
                                list="strain-options"
                                value={AttrValue::from((*strain_query).clone())}
                                placeholder={AttrValue::from(t("survey.familiar_placeholder"))}
                                oninput={on_query}
                            />
                            <button type="button" class="btn btn-sm" onclick={on_add_strain}>{ t("ui.add") }</button>
                        </div>
                        <datalist id="strain-options">
                            { for props.strains.iter().map(|s| html! { <option value={s.clone()} /> }) }
                        </datalist>
                        { familiar }
                    </fieldset>
                    <fieldset>
                        <legend class="font-semibold">{ t("survey.terpenes") }</legend>
                        <p class="text-xs opacity-70">{ t("survey.terpenes_hint") }</p>
                        { choice_grid(&TERPENES, &draft.terpenes, &draft, |d| &mut d.terpenes) }
                    </fieldset>
                    <fieldset>
                        <legend class="font-semibold">{ t("survey.conditions") }</legend>
                        { choice_grid(&CONDITIONS, &draft.may_relieve, &draft, |d| &mut d.may_relieve) }
                        <p class="text-xs opacity-70">{ t("survey.medical_disclaimer") }</p>
                    </fieldset>
                    if let Some(err) = *error {
                        <Alert variant={DaisyColor::Warning} message={AttrValue::from(t(error_key(err)))} />
                    }
                    <div class="flex justify-end">
                        <button type="submit" class="btn btn-primary" disabled={props.busy}>
                            { if props.busy { t("survey.submitting") } else { t("survey.submit") } }
                        </button>
                    </div>
                </form>
            </Card>
        </section>
    }
}
