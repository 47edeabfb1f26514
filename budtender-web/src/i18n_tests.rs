//! Locale bundle coverage: every locale carries every key the screens ask for.

use budtender_core::{NotificationFilter, TimeFrame};
use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn find_string(json: &Value, key: &str) -> Option<String> {
    key.split('.')
        .try_fold(json, |node, part| node.get(part))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

fn placeholders(text: &str) -> BTreeSet<String> {
    text.split('{')
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(name, _)| name.to_string()))
        .collect()
}

#[test]
fn locales_have_matching_keys() {
    let (_, base_json) = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in &base_keys {
            assert!(
                keys.contains(key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn translations_keep_english_placeholders() {
    let (_, base_json) = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        for key in &base_keys {
            let english = find_string(&base_json, key).unwrap_or_default();
            let translated = find_string(&json, key).unwrap_or_default();
            assert_eq!(
                placeholders(&english),
                placeholders(&translated),
                "Placeholder mismatch for '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn required_feature_keys_exist() {
    let mut required: Vec<String> = [
        "app.title",
        "age.title",
        "age.confirm",
        "age.deny",
        "age.denied_message",
        "age.exit",
        "signup.title",
        "signup.password_rules",
        "login.title",
        "survey.title",
        "survey.error.no_effects",
        "survey.error.no_experience",
        "survey.medical_disclaimer",
        "recommendations.title",
        "recommendations.retry",
        "recommendations.retry_exhausted",
        "strain.not_found",
        "review.thanks",
        "review.error.metric",
        "profile.momentum.start",
        "profile.momentum.building",
        "profile.momentum.strong",
        "notifications.mark_all",
        "leaderboard.your_rank",
        "ui.loading",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    required.extend(
        NotificationFilter::tabs()
            .into_iter()
            .map(|tab| format!("notifications.tab.{}", tab.key())),
    );
    required.extend(
        TimeFrame::ALL
            .iter()
            .map(|frame| format!("leaderboard.frame.{}", frame.query())),
    );
    required.extend(
        ["potency", "taste", "aroma", "value"]
            .iter()
            .map(|metric| format!("review.metric.{metric}")),
    );

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        for key in &required {
            assert!(
                find_string(&json, key).is_some(),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn locales_have_balanced_templates() {
    for locale in locale_codes() {
        let (content, _json) = load_locale(&locale);
        let open_count = content.matches('{').count();
        let close_count = content.matches('}').count();
        assert_eq!(
            open_count, close_count,
            "Unmatched braces in {locale}: {open_count} open, {close_count} close"
        );
        assert!(
            !content.contains("{{{"),
            "Found triple opening brace in {locale}"
        );
    }
}

#[test]
fn locale_table_matches_files() {
    let codes: Vec<&str> = crate::i18n::locales().iter().map(|m| m.code).collect();
    assert_eq!(locale_codes(), codes.iter().map(ToString::to_string).collect::<Vec<_>>());
}
