use crate::components::daisy_ui::{Alert, DaisyColor, DaisySize, Loading};
use crate::components::strain_card::StrainCard;
use crate::i18n::{t, tr};
use crate::pages::error_banner;
use budtender_core::{FavoriteList, FeedbackKind, FeedbackLedger, Recommendation};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RecommendationsPageProps {
    pub items: Vec<Recommendation>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    /// Manual retries still available after a failed fetch.
    #[prop_or_default]
    pub retries_left: u32,
    #[prop_or_default]
    pub favorites: FavoriteList,
    #[prop_or_default]
    pub feedback: FeedbackLedger,
    /// Failure of a like/dislike/favorite action.
    #[prop_or_default]
    pub banner: Option<String>,
    pub on_retry: Callback<()>,
    pub on_feedback: Callback<(String, FeedbackKind)>,
    pub on_favorite: Callback<String>,
    pub on_details: Callback<String>,
    pub on_survey: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[function_component(RecommendationsPage)]
pub fn recommendations_page(props: &RecommendationsPageProps) -> Html {
    let disclaimer = html! {
        <Alert variant={DaisyColor::Info} class={classes!("text-sm")}>
            <p>{ t("recommendations.disclaimer") }</p>
        </Alert>
    };

    let body = if props.loading {
        html! {
            <div class="flex flex-col items-center gap-2 py-12">
                <Loading size={DaisySize::Lg} label={AttrValue::from(t("recommendations.loading"))} />
                <p class="text-sm opacity-70">{ t("recommendations.loading_hint") }</p>
            </div>
        }
    } else if let Some(err) = &props.error {
        let actions = if props.retries_left > 0 {
            let cb = props.on_retry.clone();
            let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
            let left = props.retries_left.to_string();
            let args = BTreeMap::from([("count", left.as_str())]);
            html! {
                <button id="recommendations-retry" type="button" class="btn btn-sm" {onclick}>
                    { tr("recommendations.retry", Some(&args)) }
                </button>
            }
        } else {
            html! { <span class="text-sm">{ t("recommendations.retry_exhausted") }</span> }
        };
        html! {
            <Alert
                variant={DaisyColor::Error}
                title={AttrValue::from(t("recommendations.error_title"))}
                message={AttrValue::from(err.clone())}
                actions={actions}
            />
        }
    } else if props.items.is_empty() {
        let cb = props.on_survey.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
        html! {
            <div class="text-center py-12 flex flex-col items-center gap-3">
                <p>{ t("recommendations.empty") }</p>
                <button type="button" class="btn btn-primary btn-sm" {onclick}>{ t("recommendations.take_survey") }</button>
            </div>
        }
    } else {
        html! {
            <div class="grid gap-4 md:grid-cols-2">
                { for props.items.iter().map(|item| html! {
                    <StrainCard
                        key={item.name.clone()}
                        strain={item.clone()}
                        favorite={props.favorites.contains(&item.name)}
                        feedback={props.feedback.get(&item.name)}
                        on_feedback={props.on_feedback.clone()}
                        on_favorite={props.on_favorite.clone()}
                        on_details={props.on_details.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <section class="py-6 flex flex-col gap-4" aria-labelledby="recommendations-title">
            <h1 id="recommendations-title" class="text-2xl font-bold">{ t("recommendations.title") }</h1>
            { disclaimer }
            { error_banner(props.banner.as_ref(), &props.on_dismiss) }
            { body }
        </section>
    }
}
