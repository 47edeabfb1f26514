//! Recommendation card: strain summary, terpene notes and the feedback row.

use crate::components::daisy_ui::{Badge, Card, DaisyColor};
use crate::i18n::{fmt_number, t, tr};
use budtender_core::catalog::terpene_info;
use budtender_core::{FeedbackKind, Recommendation};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StrainCardProps {
    pub strain: Recommendation,
    #[prop_or_default]
    pub favorite: bool,
    /// Feedback already given on this screen, if any.
    #[prop_or_default]
    pub feedback: Option<FeedbackKind>,
    pub on_feedback: Callback<(String, FeedbackKind)>,
    pub on_favorite: Callback<String>,
    pub on_details: Callback<String>,
}

fn chip_list(items: &[String], variant: DaisyColor) -> Html {
    html! {
        <div class="flex flex-wrap gap-1">
            { for items.iter().map(|item| html! {
                <Badge variant={variant} outline=true label={AttrValue::from(item.clone())} />
            }) }
        </div>
    }
}

fn terpene_notes(terpenes: &[String]) -> Html {
    html! {
        <ul class="terpenes text-sm">
            { for terpenes.iter().map(|name| {
                let info = terpene_info(name);
                html! {
                    <li title={info.description}>
                        <span aria-hidden="true">{ info.icon }</span>
                        { " " }
                        <strong>{ name.clone() }</strong>
                        { " " }
                        <span class="opacity-70">{ info.description }</span>
                    </li>
                }
            }) }
        </ul>
    }
}

#[function_component(StrainCard)]
pub fn strain_card(props: &StrainCardProps) -> Html {
    let name = props.strain.name.clone();
    let sent = props.feedback;

    let feedback_button = |kind: FeedbackKind, key: &str, icon: &str| {
        let cb = props.on_feedback.clone();
        let name = name.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit((name.clone(), kind)));
        let mut class = classes!("btn", "btn-sm");
        if sent == Some(kind) {
            class.push("btn-active");
        }
        html! {
            <button type="button" class={class} disabled={sent.is_some()} aria-label={t(key)} {onclick}>
                { icon.to_string() }{ " " }{ t(key) }
            </button>
        }
    };

    let favorite_toggle = {
        let cb = props.on_favorite.clone();
        let name = name.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(name.clone()));
        let label = if props.favorite {
            t("strain.favorite_remove")
        } else {
            t("strain.favorite_add")
        };
        html! {
            <button type="button" class="btn btn-ghost btn-sm favorite-toggle" aria-pressed={props.favorite.to_string()} aria-label={label} {onclick}>
                { if props.favorite { "♥" } else { "♡" } }
            </button>
        }
    };

    let details = {
        let cb = props.on_details.clone();
        let name = name.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(name.clone()));
        html! { <button type="button" class="btn btn-link btn-sm" {onclick}>{ t("recommendations.details") }</button> }
    };

    let subtitle = props.strain.similarity_score.map_or_else(
        || props.strain.strain_type.clone(),
        |score| {
            let pct = fmt_number((score * 100.0).round());
            let args = BTreeMap::from([("score", pct.as_str())]);
            format!("{} · {}", props.strain.strain_type, tr("recommendations.match", Some(&args)))
        },
    );

    let actions = html! {
        <>
            { feedback_button(FeedbackKind::Like, "recommendations.like", "👍") }
            { feedback_button(FeedbackKind::Dislike, "recommendations.dislike", "👎") }
            { details }
        </>
    };

    html! {
        <Card
            class={classes!("strain-card")}
            title={AttrValue::from(name.clone())}
            subtitle={AttrValue::from(subtitle)}
            title_extra={favorite_toggle}
            actions={actions}
        >
            if !props.strain.effects.is_empty() {
                <section>
                    <h4 class="font-semibold">{ t("strain.effects") }</h4>
                    { chip_list(&props.strain.effects, DaisyColor::Primary) }
                </section>
            }
            if !props.strain.terpenes.is_empty() {
                <section>
                    <h4 class="font-semibold">{ t("strain.terpenes") }</h4>
                    { terpene_notes(&props.strain.terpenes) }
                </section>
            }
            if !props.strain.may_relieve.is_empty() {
                <section>
                    <h4 class="font-semibold">{ t("strain.may_relieve") }</h4>
                    { chip_list(&props.strain.may_relieve, DaisyColor::Accent) }
                </section>
            }
        </Card>
    }
}
