use crate::components::daisy_ui::{Badge, Card, DaisyColor, Loading, Progress, Rating};
use crate::i18n::{fmt_date_iso, t, tr};
use crate::pages::error_banner;
use budtender_core::feed::{
    FeedbackMomentum, ProfileProgress, feedbacks_newest_first, reviews_newest_first,
};
use budtender_core::{FavoriteList, FeedbackKind, FeedbackRecord, UserProfile};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProfilePageProps {
    pub profile: UserProfile,
    #[prop_or_default]
    pub feedbacks: Vec<FeedbackRecord>,
    #[prop_or_default]
    pub favorites: FavoriteList,
    #[prop_or_default]
    pub refreshing: bool,
    #[prop_or_default]
    pub banner: Option<String>,
    pub on_refresh: Callback<()>,
    pub on_strain: Callback<String>,
    pub on_edit_survey: Callback<()>,
    pub on_dismiss: Callback<()>,
}

fn strain_link(name: &str, on_strain: &Callback<String>) -> Html {
    let cb = on_strain.clone();
    let owned = name.to_string();
    let onclick = Callback::from(move |_: MouseEvent| cb.emit(owned.clone()));
    html! { <button type="button" class="link link-primary" {onclick}>{ name.to_string() }</button> }
}

fn progress_card(progress: ProfileProgress) -> Html {
    let level = progress.level.to_string();
    let points = progress.total_points.to_string();
    let args = BTreeMap::from([("level", level.as_str()), ("points", points.as_str())]);
    html! {
        <Card title={AttrValue::from(tr("profile.level", Some(&args)))}>
            <Progress
                value={progress.percent()}
                variant={DaisyColor::Success}
                label={AttrValue::from(tr("profile.points", Some(&args)))}
            />
        </Card>
    }
}

fn achievements_list(profile: &UserProfile) -> Html {
    if profile.achievements.is_empty() && profile.badges.is_empty() {
        return html! { <p class="opacity-70">{ t("profile.no_achievements") }</p> };
    }
    html! {
        <>
            <div class="flex flex-wrap gap-1">
                { for profile.badges.iter().map(|b| html! {
                    <Badge variant={DaisyColor::Secondary} label={AttrValue::from(b.clone())} />
                }) }
            </div>
            <table class="table table-sm">
                <tbody>
                    { for profile.achievements.iter().map(|(name, pts)| html! {
                        <tr><td>{ name.clone() }</td><td class="text-right">{ pts.to_string() }</td></tr>
                    }) }
                </tbody>
            </table>
        </>
    }
}

fn feedback_history(feedbacks: &[FeedbackRecord], on_strain: &Callback<String>) -> Html {
    let momentum = FeedbackMomentum::from_count(feedbacks.len());
    let sorted = feedbacks_newest_first(feedbacks);
    html! {
        <>
            <p class="text-sm">{ t(momentum.i18n_key()) }</p>
            <ul class="flex flex-col gap-1">
                { for sorted.iter().map(|f| {
                    let icon = match f.feedback_type {
                        FeedbackKind::Like => "👍",
                        FeedbackKind::Dislike => "👎",
                    };
                    html! {
                        <li class="flex gap-2 items-center">
                            <span aria-hidden="true">{ icon }</span>
                            { strain_link(&f.strain_name, on_strain) }
                            <span class="text-xs opacity-60">{ fmt_date_iso(&f.date) }</span>
                        </li>
                    }
                }) }
            </ul>
        </>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let profile = &props.profile;
    let progress = ProfileProgress::from_achievements(&profile.achievements);

    let on_refresh = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_edit_survey = {
        let cb = props.on_edit_survey.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let reviews = reviews_newest_first(&profile.reviews);
    let prefs = &profile.preferences;

    html! {
        <section class="py-6 flex flex-col gap-4" aria-labelledby="profile-title">
            <header class="flex justify-between items-center">
                <div>
                    <h1 id="profile-title" class="text-2xl font-bold">{ t("profile.title") }</h1>
                    { profile.email.as_ref().map(|e| html!{ <p class="opacity-70">{ e.clone() }</p> }).unwrap_or_default() }
                </div>
                <button id="profile-refresh" type="button" class="btn btn-sm" onclick={on_refresh} disabled={props.refreshing}>
                    if props.refreshing { <Loading /> } else { { t("ui.refresh") } }
                </button>
            </header>
            { error_banner(props.banner.as_ref(), &props.on_dismiss) }
            { progress_card(progress) }

            <Card title={AttrValue::from(t("profile.achievements"))}>
                { achievements_list(profile) }
            </Card>

            <Card title={AttrValue::from(t("profile.preferences"))}>
                if let Some(level) = prefs.experience_level {
                    <p>{ format!("{}: {}", t("survey.experience.title"), level.label()) }</p>
                }
                if !prefs.desired_effects.is_empty() {
                    <p>{ format!("{}: {}", t("survey.effects"), prefs.desired_effects.join(", ")) }</p>
                }
                <button type="button" class="btn btn-link btn-sm" onclick={on_edit_survey}>{ t("profile.edit_survey") }</button>
            </Card>

            <Card title={AttrValue::from(t("profile.favorites"))}>
                if props.favorites.is_empty() {
                    <p class="opacity-70">{ t("profile.no_favorites") }</p>
                } else {
                    <ul class="flex flex-wrap gap-2">
                        { for props.favorites.as_slice().iter().map(|name| html! {
                            <li>{ strain_link(name, &props.on_strain) }</li>
                        }) }
                    </ul>
                }
            </Card>

            <Card title={AttrValue::from(t("profile.reviews"))}>
                if reviews.is_empty() {
                    <p class="opacity-70">{ t("profile.no_reviews") }</p>
                } else {
                    <ul class="flex flex-col gap-3">
                        { for reviews.iter().enumerate().map(|(idx, r)| {
                            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                            let stars = r.rating.round().max(0.0) as u32;
                            html! {
                                <li class="review-entry">
                                    { strain_link(&r.strain_name, &props.on_strain) }
                                    <Rating value={stars} read_only=true name={AttrValue::from(format!("review-rating-{idx}"))} />
                                    if !r.text.is_empty() { <p>{ r.text.clone() }</p> }
                                    <span class="text-xs opacity-60">{ fmt_date_iso(&r.date) }</span>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </Card>

            <Card title={AttrValue::from(t("profile.feedback"))}>
                { feedback_history(&props.feedbacks, &props.on_strain) }
            </Card>
        </section>
    }
}
