use crate::components::daisy_ui::{DaisySize, Loading};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingPageProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingPage)]
pub fn loading_page(props: &LoadingPageProps) -> Html {
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::from(t("ui.loading")));
    html! {
        <section class="flex justify-center py-16" aria-busy="true">
            <Loading size={DaisySize::Lg} label={label} />
        </section>
    }
}
