use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<f::AttrValue>,
    /// Controls placed next to the title (favorite toggle and the like).
    #[prop_or_default]
    pub title_extra: Option<f::Html>,
    #[prop_or_default]
    pub actions: Option<f::Html>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Card)]
pub fn card(props: &CardProps) -> f::Html {
    let class = f::class_list(&["card", "bg-base-100", "shadow"], &props.class);
    f::html! {
        <article class={class}>
            <div class="card-body">
                { props.title.as_ref().map(|title| f::html! {
                    <header class="flex items-start justify-between gap-2">
                        <div>
                            <h3 class="card-title">{ title.clone() }</h3>
                            { props.subtitle.as_ref().map(|sub| f::html!{ <p class="text-sm opacity-70">{ sub.clone() }</p> }).unwrap_or_default() }
                        </div>
                        { props.title_extra.clone().unwrap_or_default() }
                    </header>
                }).unwrap_or_default() }
                { for props.children.iter() }
                { props.actions.clone().map(|actions| f::html!{
                    <footer class="card-actions justify-end">{ actions }</footer>
                }).unwrap_or_default() }
            </div>
        </article>
    }
}
