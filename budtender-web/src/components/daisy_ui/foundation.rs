pub use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DaisyColor {
    Neutral,
    #[default]
    Primary,
    Secondary,
    Accent,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DaisySize {
    Xs,
    Sm,
    Md,
    Lg,
}

impl DaisySize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

#[cfg(test)]
mod tests {
    use super::{DaisyColor, DaisySize, attr_value, class_list};
    use yew::Classes;

    #[test]
    fn color_and_size_classes_carry_prefix() {
        assert_eq!(DaisyColor::Error.class("alert"), "alert-error");
        assert_eq!(DaisyColor::default().class("btn"), "btn-primary");
        assert_eq!(DaisySize::Sm.class("loading"), "loading-sm");
    }

    #[test]
    fn class_list_combines_base_and_extra() {
        let rendered = class_list(&["badge", "badge-outline"], &Classes::from("mx-1")).to_string();
        assert!(rendered.contains("badge-outline"));
        assert!(rendered.contains("mx-1"));
    }

    #[test]
    fn attr_value_clones_optional_attr() {
        let value = Some(yew::AttrValue::from("email"));
        assert_eq!(attr_value(&value).as_deref(), Some("email"));
    }
}
