use crate::components::daisy_ui::{Alert, Badge, DaisyColor, Loading, Tab, TabItem};
use crate::i18n::{fmt_date_iso, t, tr};
use crate::pages::error_banner;
use budtender_core::feed::notification_target;
use budtender_core::{Notification, NotificationFilter, Screen, filter_notifications, unread_count};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct NotificationsPageProps {
    pub items: Vec<Notification>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub banner: Option<String>,
    pub on_toggle_read: Callback<String>,
    pub on_mark_all: Callback<()>,
    pub on_delete: Callback<String>,
    pub on_open: Callback<Screen>,
    pub on_refresh: Callback<()>,
    pub on_dismiss: Callback<()>,
}

fn tab_label(filter: NotificationFilter) -> String {
    t(&format!("notifications.tab.{}", filter.key()))
}

fn notification_row(item: &Notification, props: &NotificationsPageProps) -> Html {
    let id = item.id.clone();
    let toggle = {
        let cb = props.on_toggle_read.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let delete = {
        let cb = props.on_delete.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let open = notification_target(item).map(|target| {
        let cb = props.on_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(target.clone()));
        html! { <button type="button" class="btn btn-link btn-xs" {onclick}>{ t("notifications.open") }</button> }
    });
    let mut class = classes!("notification", "card", "bg-base-100", "p-3");
    if !item.read {
        class.push("unread");
        class.push("border-l-4");
        class.push("border-primary");
    }
    let toggle_label = if item.read {
        t("notifications.mark_unread")
    } else {
        t("notifications.mark_read")
    };
    html! {
        <li key={id.clone()} class={class} data-id={id}>
            <div class="flex justify-between gap-2">
                <div>
                    <Badge outline=true label={AttrValue::from(t(&format!("notifications.tab.{}", item.kind.key())))} />
                    <h3 class="font-semibold">{ item.title.clone() }</h3>
                    <p>{ item.message.clone() }</p>
                    <span class="text-xs opacity-60">{ fmt_date_iso(&item.timestamp) }</span>
                </div>
                <div class="flex flex-col gap-1 items-end">
                    <button type="button" class="btn btn-ghost btn-xs toggle-read" onclick={toggle}>{ toggle_label }</button>
                    <button type="button" class="btn btn-ghost btn-xs text-error delete" onclick={delete}>{ t("notifications.delete") }</button>
                    { open.unwrap_or_default() }
                </div>
            </div>
        </li>
    }
}

#[function_component(NotificationsPage)]
pub fn notifications_page(props: &NotificationsPageProps) -> Html {
    let filter = use_state(NotificationFilter::default);

    let tabs: Vec<TabItem> = NotificationFilter::tabs()
        .into_iter()
        .map(|f| TabItem::new(f.key(), tab_label(f)))
        .collect();
    let on_tab = {
        let filter = filter.clone();
        Callback::from(move |id: AttrValue| {
            if let Some(next) = NotificationFilter::tabs().into_iter().find(|f| f.key() == id.as_str()) {
                filter.set(next);
            }
        })
    };
    let on_mark_all = {
        let cb = props.on_mark_all.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_refresh = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let unread = unread_count(&props.items);
    let unread_text = unread.to_string();
    let args = BTreeMap::from([("count", unread_text.as_str())]);
    let visible = filter_notifications(&props.items, *filter);

    let body = if props.loading {
        html! { <Loading label={AttrValue::from(t("ui.loading"))} /> }
    } else if let Some(err) = &props.error {
        html! { <Alert variant={DaisyColor::Error} message={AttrValue::from(err.clone())} /> }
    } else if visible.is_empty() {
        html! { <p class="opacity-70 py-8 text-center">{ t("notifications.empty") }</p> }
    } else {
        html! {
            <ul class="flex flex-col gap-2">
                { for visible.iter().map(|item| notification_row(item, props)) }
            </ul>
        }
    };

    html! {
        <section class="py-6 flex flex-col gap-4" aria-labelledby="notifications-title">
            <header class="flex justify-between items-center">
                <div>
                    <h1 id="notifications-title" class="text-2xl font-bold">{ t("notifications.title") }</h1>
                    <p class="text-sm opacity-70">{ tr("notifications.unread", Some(&args)) }</p>
                </div>
                <div class="flex gap-2">
                    <button type="button" class="btn btn-sm" onclick={on_refresh}>{ t("ui.refresh") }</button>
                    <button id="mark-all-read" type="button" class="btn btn-primary btn-sm" disabled={unread == 0} onclick={on_mark_all}>
                        { t("notifications.mark_all") }
                    </button>
                </div>
            </header>
            { error_banner(props.banner.as_ref(), &props.on_dismiss) }
            <Tab
                tabs={tabs}
                active_id={AttrValue::from(filter.key())}
                aria_label={AttrValue::from(t("notifications.filters"))}
                on_change={on_tab}
            />
            { body }
        </section>
    }
}
