use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub id: f::AttrValue,
    pub label: f::AttrValue,
}

impl TabItem {
    pub fn new(id: impl Into<f::AttrValue>, label: impl Into<f::AttrValue>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Controlled tab strip: the owner keeps the active id.
#[derive(f::Properties, PartialEq, Clone)]
pub struct TabProps {
    pub tabs: Vec<TabItem>,
    pub active_id: f::AttrValue,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f::AttrValue>,
}

#[f::function_component(Tab)]
pub fn tab(props: &TabProps) -> f::Html {
    let class = f::class_list(&["tabs", "tabs-box"], &props.class);
    f::html! {
        <div class={class} role="tablist" aria-label={f::attr_value(&props.aria_label)}>
            { for props.tabs.iter().map(|tab| {
                let active = tab.id == props.active_id;
                let mut tab_class = f::classes!("tab");
                if active {
                    tab_class.push("tab-active");
                }
                let change = {
                    let on_change = props.on_change.clone();
                    let id = tab.id.clone();
                    f::Callback::from(move |_: f::MouseEvent| on_change.emit(id.clone()))
                };
                f::html! {
                    <button
                        type="button"
                        class={tab_class}
                        role="tab"
                        data-tab={tab.id.clone()}
                        aria-selected={active.to_string()}
                        onclick={change}
                    >
                        { tab.label.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
