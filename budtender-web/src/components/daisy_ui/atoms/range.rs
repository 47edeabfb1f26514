use crate::components::daisy_ui::foundation as f;
use f::TargetCast;

/// Integer slider with a visible label and current value.
#[derive(f::Properties, PartialEq, Clone)]
pub struct RangeProps {
    pub id: f::AttrValue,
    pub label: f::AttrValue,
    pub value: u8,
    #[prop_or(1)]
    pub min: u8,
    #[prop_or(10)]
    pub max: u8,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<u8>,
}

#[f::function_component(Range)]
pub fn range(props: &RangeProps) -> f::Html {
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>()
                && let Ok(val) = input.value().parse::<u8>()
            {
                cb.emit(val);
            }
        })
    };
    let class = f::class_list(&["range", "range-sm"], &props.class);
    f::html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
                <span class="label-text-alt">{ props.value.to_string() }</span>
            </label>
            <input
                id={props.id.clone()}
                class={class}
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step="1"
                value={props.value.to_string()}
                oninput={on_change}
            />
        </div>
    }
}
