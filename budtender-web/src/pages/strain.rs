use crate::components::daisy_ui::{Alert, Badge, Card, DaisyColor, Loading};
use crate::i18n::{fmt_number, t, tr};
use crate::pages::error_banner;
use budtender_core::catalog::terpene_info;
use budtender_core::{StrainDetails, StrainTally};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StrainPageProps {
    pub name: String,
    #[prop_or_default]
    pub details: Option<StrainDetails>,
    #[prop_or_default]
    pub tally: Option<StrainTally>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub favorite: bool,
    #[prop_or_default]
    pub banner: Option<String>,
    pub on_favorite: Callback<String>,
    pub on_review: Callback<String>,
    pub on_back: Callback<()>,
    pub on_dismiss: Callback<()>,
}

fn chips(items: &[String], variant: DaisyColor) -> Html {
    html! {
        <div class="flex flex-wrap gap-1">
            { for items.iter().map(|item| html! {
                <Badge variant={variant} outline=true label={AttrValue::from(item.clone())} />
            }) }
        </div>
    }
}

fn details_view(details: &StrainDetails, tally: Option<StrainTally>) -> Html {
    let rating = details.rating.map(|r| {
        let value = fmt_number((r * 10.0).round() / 10.0);
        let args = BTreeMap::from([("rating", value.as_str())]);
        html! { <p class="strain-rating">{ tr("strain.rating", Some(&args)) }</p> }
    });
    let tally = tally.map(|tally| {
        let likes = tally.likes.to_string();
        let dislikes = tally.dislikes.to_string();
        let args = BTreeMap::from([("likes", likes.as_str()), ("dislikes", dislikes.as_str())]);
        html! { <p class="strain-tally text-sm">{ tr("strain.tally", Some(&args)) }</p> }
    });
    html! {
        <>
            if !details.strain_type.is_empty() {
                <Badge variant={DaisyColor::Neutral} label={AttrValue::from(details.strain_type.clone())} />
            }
            { rating.unwrap_or_default() }
            { tally.unwrap_or_default() }
            <section>
                <h2 class="font-semibold">{ t("strain.effects") }</h2>
                { chips(&details.effects, DaisyColor::Primary) }
            </section>
            <section>
                <h2 class="font-semibold">{ t("strain.terpenes") }</h2>
                <ul class="flex flex-col gap-2">
                    { for details.terpenes.iter().map(|name| {
                        let info = terpene_info(name);
                        html! {
                            <li>
                                <span aria-hidden="true">{ info.icon }</span>{ " " }
                                <strong>{ name.clone() }</strong>
                                <p class="text-sm opacity-80">{ info.description }</p>
                                if !info.taste.is_empty() {
                                    <p class="text-xs opacity-60">{ format!("{}: {}", t("strain.taste"), info.taste.join(", ")) }</p>
                                }
                            </li>
                        }
                    }) }
                </ul>
            </section>
            <section>
                <h2 class="font-semibold">{ t("strain.may_relieve") }</h2>
                { chips(&details.may_relieve, DaisyColor::Accent) }
            </section>
        </>
    }
}

#[function_component(StrainPage)]
pub fn strain_page(props: &StrainPageProps) -> Html {
    let on_favorite = {
        let cb = props.on_favorite.clone();
        let name = props.name.clone();
        Callback::from(move |_: MouseEvent| cb.emit(name.clone()))
    };
    let on_review = {
        let cb = props.on_review.clone();
        let name = props.name.clone();
        Callback::from(move |_: MouseEvent| cb.emit(name.clone()))
    };
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let body = if props.loading {
        html! { <Loading label={AttrValue::from(t("ui.loading"))} /> }
    } else if let Some(err) = &props.error {
        html! { <Alert variant={DaisyColor::Error} message={AttrValue::from(err.clone())} /> }
    } else if let Some(details) = &props.details {
        details_view(details, props.tally)
    } else {
        html! { <p>{ t("strain.not_found") }</p> }
    };

    let favorite_label = if props.favorite {
        t("strain.favorite_remove")
    } else {
        t("strain.favorite_add")
    };
    let actions = html! {
        <>
            <button type="button" class="btn btn-ghost btn-sm" onclick={on_back}>{ t("ui.back") }</button>
            <button id="strain-favorite" type="button" class="btn btn-outline btn-sm" aria-pressed={props.favorite.to_string()} onclick={on_favorite}>
                { if props.favorite { "♥ " } else { "♡ " } }{ favorite_label }
            </button>
            <button id="strain-review" type="button" class="btn btn-primary btn-sm" onclick={on_review}>{ t("strain.write_review") }</button>
        </>
    };

    html! {
        <section class="max-w-2xl mx-auto py-6">
            { error_banner(props.banner.as_ref(), &props.on_dismiss) }
            <Card title={AttrValue::from(props.name.clone())} actions={actions}>
                { body }
            </Card>
        </section>
    }
}
