use crate::components::daisy_ui::foundation as f;
use f::TargetCast;

/// Labelled text input with an optional inline error underneath.
#[derive(f::Properties, PartialEq, Clone)]
pub struct InputProps {
    pub id: f::AttrValue,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub input_type: Option<f::AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<f::AttrValue>,
    /// Datalist id for suggestions.
    #[prop_or_default]
    pub list: Option<f::AttrValue>,
    #[prop_or_default]
    pub error: Option<f::AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(Input)]
pub fn input(props: &InputProps) -> f::Html {
    let oninput = {
        let cb = props.oninput.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let mut class = f::class_list(&["input", "input-bordered", "w-full"], &props.class);
    if props.error.is_some() {
        class.push("input-error");
    }
    let input_type = props.input_type.clone().unwrap_or_else(|| "text".into());
    let error_id = format!("{}-error", props.id);
    f::html! {
        <div class="form-control w-full">
            { props.label.as_ref().map(|label| f::html! {
                <label class="label" for={props.id.clone()}>
                    <span class="label-text">{ label.clone() }</span>
                </label>
            }).unwrap_or_default() }
            <input
                id={props.id.clone()}
                class={class}
                type={input_type}
                name={props.id.clone()}
                value={props.value.clone()}
                placeholder={f::attr_value(&props.placeholder)}
                autocomplete={f::attr_value(&props.autocomplete)}
                list={f::attr_value(&props.list)}
                disabled={props.disabled}
                aria-invalid={props.error.is_some().to_string()}
                aria-describedby={props.error.as_ref().map(|_| error_id.clone())}
                oninput={oninput}
            />
            { props.error.as_ref().map(|err| f::html! {
                <p id={error_id.clone()} class="text-error text-sm mt-1">{ err.clone() }</p>
            }).unwrap_or_default() }
        </div>
    }
}
