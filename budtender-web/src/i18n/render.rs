use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn host_plural(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let tags = Array::new();
        tags.push(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&tags, &Object::new());
        rules
            .select(count)
            .as_string()
            .unwrap_or_else(|| host_plural(count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        host_plural(count).to_string()
    }
}

/// Pick the text for `value`: plain strings as-is, plural objects by `count`
/// (falling back to their `_` entry), then substitute `{name}` / `{{name}}`.
fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let template = match value {
        Value::String(s) => s.clone(),
        Value::Object(forms) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|raw| raw.parse::<f64>().ok());
            count
                .and_then(|n| forms.get(&plural_category(lang, n)))
                .or_else(|| forms.get("_"))
                .or_else(|| count.and(forms.get("other")))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    let Some(args) = args else {
        return Some(template);
    };
    let text = args.iter().fold(template, |acc, (k, v)| {
        acc.replace(&format!("{{{{{k}}}}}"), v)
            .replace(&format!("{{{k}}}"), v)
    });
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                lookup(&bundle.fallback, key).and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate `key` in the active language, falling back to English and then
/// to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate `key` with `{name}` placeholders filled from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
