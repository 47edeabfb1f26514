use crate::components::daisy_ui::{Alert, Card, DaisyColor, Loading, Tab, TabItem};
use crate::i18n::{fmt_score, t, tr};
use budtender_core::feed::medal;
use budtender_core::{LeaderboardEntry, TimeFrame, UserId, user_rank, user_score};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LeaderboardPageProps {
    pub entries: Vec<LeaderboardEntry>,
    pub time_frame: TimeFrame,
    #[prop_or_default]
    pub user_id: Option<UserId>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_time_frame: Callback<TimeFrame>,
    pub on_refresh: Callback<()>,
}

fn frame_label(frame: TimeFrame) -> String {
    t(&format!("leaderboard.frame.{}", frame.query()))
}

fn standing(entries: &[LeaderboardEntry], user_id: Option<UserId>) -> Html {
    let Some(uid) = user_id else {
        return Html::default();
    };
    match (user_rank(entries, uid), user_score(entries, uid)) {
        (Some(rank), Some(score)) => {
            let rank = rank.to_string();
            let score = fmt_score(score);
            let args = BTreeMap::from([("rank", rank.as_str()), ("score", score.as_str())]);
            html! { <p id="leaderboard-standing" class="font-semibold">{ tr("leaderboard.your_rank", Some(&args)) }</p> }
        }
        _ => html! { <p id="leaderboard-standing" class="opacity-70">{ t("leaderboard.unranked") }</p> },
    }
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &LeaderboardPageProps) -> Html {
    let tabs: Vec<TabItem> = TimeFrame::ALL
        .into_iter()
        .map(|f| TabItem::new(f.query(), frame_label(f)))
        .collect();
    let on_tab = {
        let cb = props.on_time_frame.clone();
        Callback::from(move |id: AttrValue| {
            if let Some(frame) = TimeFrame::ALL.into_iter().find(|f| f.query() == id.as_str()) {
                cb.emit(frame);
            }
        })
    };
    let on_refresh = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let body = if props.loading {
        html! { <Loading label={AttrValue::from(t("ui.loading"))} /> }
    } else if let Some(err) = &props.error {
        html! { <Alert variant={DaisyColor::Error} message={AttrValue::from(err.clone())} /> }
    } else if props.entries.is_empty() {
        html! { <p class="opacity-70 py-8 text-center">{ t("leaderboard.empty") }</p> }
    } else {
        html! {
            <table class="table">
                <thead>
                    <tr>
                        <th>{ t("leaderboard.rank") }</th>
                        <th>{ t("leaderboard.user") }</th>
                        <th class="text-right">{ t("leaderboard.score") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.entries.iter().enumerate().map(|(idx, entry)| {
                        let rank = idx + 1;
                        let mine = props.user_id == Some(entry.user_id);
                        let marker = medal(rank).map_or_else(|| rank.to_string(), str::to_string);
                        html! {
                            <tr key={entry.user_id.to_string()} class={classes!(mine.then_some("bg-base-200"))} aria-current={mine.then_some("true")}>
                                <td>{ marker }</td>
                                <td>{ entry.email.clone() }</td>
                                <td class="text-right">{ fmt_score(entry.score) }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    };

    html! {
        <section class="py-6 flex flex-col gap-4" aria-labelledby="leaderboard-title">
            <header class="flex justify-between items-center">
                <h1 id="leaderboard-title" class="text-2xl font-bold">{ t("leaderboard.title") }</h1>
                <button type="button" class="btn btn-sm" onclick={on_refresh}>{ t("ui.refresh") }</button>
            </header>
            <Tab
                tabs={tabs}
                active_id={AttrValue::from(props.time_frame.query())}
                aria_label={AttrValue::from(t("leaderboard.frames"))}
                on_change={on_tab}
            />
            <Card>
                { standing(&props.entries, props.user_id) }
                { body }
            </Card>
        </section>
    }
}
