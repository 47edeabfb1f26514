use crate::components::daisy_ui::{Alert, Card, Checkbox, DaisyColor, Range, Rating, Textarea};
use crate::i18n::{t, tr};
use crate::pages::error_banner;
use budtender_core::catalog::REVIEW_EFFECTS;
use budtender_core::{ReviewDraft, ReviewError, ReviewMetrics, ReviewRequest, SurveyDraft, UserId};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ReviewPageProps {
    pub strain: String,
    pub user_id: UserId,
    #[prop_or_default]
    pub busy: bool,
    /// Set once the server accepted the review.
    #[prop_or_default]
    pub submitted: bool,
    #[prop_or_default]
    pub banner: Option<String>,
    pub on_submit: Callback<ReviewRequest>,
    pub on_dismiss: Callback<()>,
    pub on_done: Callback<()>,
}

fn error_message(err: ReviewError) -> String {
    match err {
        ReviewError::MissingRating | ReviewError::RatingOutOfRange(_) => t("review.error.rating"),
        ReviewError::MetricOutOfRange { metric, .. } => {
            let label = t(&format!("review.metric.{metric}"));
            let args = BTreeMap::from([("metric", label.as_str())]);
            tr("review.error.metric", Some(&args))
        }
    }
}

type MetricSlot = fn(&mut ReviewMetrics) -> &mut u8;

const METRICS: [(&str, MetricSlot); 4] = [
    ("potency", |m| &mut m.potency),
    ("taste", |m| &mut m.taste),
    ("aroma", |m| &mut m.aroma),
    ("value", |m| &mut m.value),
];

#[function_component(ReviewPage)]
pub fn review_page(props: &ReviewPageProps) -> Html {
    let draft = use_state(ReviewDraft::default);
    let error = use_state(|| None::<ReviewError>);

    let on_rating = {
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |stars: u32| {
            draft.set(ReviewDraft {
                rating: f32::from(u16::try_from(stars).unwrap_or(u16::MAX)),
                ..(*draft).clone()
            });
            error.set(None);
        })
    };
    let on_text = {
        let draft = draft.clone();
        Callback::from(move |text: String| {
            draft.set(ReviewDraft {
                text,
                ..(*draft).clone()
            });
        })
    };
    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let cb = props.on_submit.clone();
        let user_id = props.user_id;
        let strain = props.strain.clone();
        let busy = props.busy;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if busy {
                return;
            }
            match draft.validate(user_id, &strain) {
                Ok(request) => {
                    error.set(None);
                    cb.emit(request);
                }
                Err(err) => error.set(Some(err)),
            }
        })
    };

    if props.submitted {
        let cb = props.on_done.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
        return html! {
            <section class="max-w-xl mx-auto py-6">
                <Alert variant={DaisyColor::Success} message={AttrValue::from(t("review.thanks"))}>
                    <button type="button" class="btn btn-sm" {onclick}>{ t("review.done") }</button>
                </Alert>
            </section>
        };
    }

    let metrics = html! {
        <div class="grid gap-2 md:grid-cols-2">
            { for METRICS.iter().map(|&(key, slot)| {
                let value = {
                    let mut m = draft.metrics;
                    *slot(&mut m)
                };
                let draft = draft.clone();
                let on_change = Callback::from(move |v: u8| {
                    let mut next = (*draft).clone();
                    *slot(&mut next.metrics) = v;
                    draft.set(next);
                });
                html! {
                    <Range
                        id={AttrValue::from(format!("metric-{key}"))}
                        label={AttrValue::from(t(&format!("review.metric.{key}")))}
                        {value}
                        {on_change}
                    />
                }
            }) }
        </div>
    };

    let effects = html! {
        <div class="grid grid-cols-2 gap-1">
            { for REVIEW_EFFECTS.iter().map(|&name| {
                let checked = draft.effects.iter().any(|e| e == name);
                let draft = draft.clone();
                let on_toggle = Callback::from(move |_: bool| {
                    let mut next = (*draft).clone();
                    SurveyDraft::toggle(&mut next.effects, name);
                    draft.set(next);
                });
                html! { <Checkbox label={AttrValue::from(name)} {checked} {on_toggle} /> }
            }) }
        </div>
    };

    let args = BTreeMap::from([("strain", props.strain.as_str())]);
    // Ratings are whole stars in the form.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stars = draft.rating.round().max(0.0) as u32;

    html! {
        <section class="max-w-xl mx-auto py-6" aria-labelledby="review-title">
            <Card>
                <h1 id="review-title" class="text-2xl font-bold">{ tr("review.title", Some(&args)) }</h1>
                { error_banner(props.banner.as_ref(), &props.on_dismiss) }
                <form id="review-form" class="flex flex-col gap-4" onsubmit={on_submit} novalidate=true>
                    <Rating value={stars} on_change={on_rating} />
                    <Textarea
                        id="review-text"
                        value={AttrValue::from(draft.text.clone())}
                        placeholder={AttrValue::from(t("review.text_placeholder"))}
                        oninput={on_text}
                    />
                    <fieldset>
                        <legend class="font-semibold">{ t("review.metrics") }</legend>
                        { metrics }
                    </fieldset>
                    <fieldset>
                        <legend class="font-semibold">{ t("review.effects") }</legend>
                        { effects }
                    </fieldset>
                    if let Some(err) = *error {
                        <Alert variant={DaisyColor::Warning} message={AttrValue::from(error_message(err))} />
                    }
                    <button type="submit" class="btn btn-primary" disabled={props.busy}>
                        { if props.busy { t("review.submitting") } else { t("review.submit") } }
                    </button>
                </form>
            </Card>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_slots_address_distinct_fields() {
        let mut m = ReviewMetrics::default();
        for (idx, (_, slot)) in METRICS.iter().enumerate() {
            *slot(&mut m) = u8::try_from(idx + 1).unwrap();
        }
        assert_eq!(
            m,
            ReviewMetrics {
                potency: 1,
                taste: 2,
                aroma: 3,
                value: 4
            }
        );
    }
}
