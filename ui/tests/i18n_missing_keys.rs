use std::collections::{BTreeMap, BTreeSet};

/// Bundles compiled into the binary. Register new locales here.
const FALLBACK: (&str, &str) = ("es-ES", include_str!("../i18n/es-ES/phenoview-ui.ftl"));
const LOCALES: &[(&str, &str)] = &[("en-US", include_str!("../i18n/en-US/phenoview-ui.ftl"))];

/// Message id → sorted variable names (`{ $count }` → `count`).
/// Single-line messages only; attributes and comments are ignored.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let vars = value
            .split("{ $")
            .skip(1)
            .filter_map(|rest| rest.split_once(' ').map(|(name, _)| name.to_string()))
            .collect();
        if out.insert(id.to_string(), vars).is_some() {
            panic!("{locale}: duplicate message id {id} (line: \"{raw}\")");
        }
    }
    out
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let (fallback_locale, fallback_src) = FALLBACK;
    let fallback = messages(fallback_src, fallback_locale);
    assert!(!fallback.is_empty(), "fallback {fallback_locale} has no messages");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let translated = messages(src, locale);
        let missing: Vec<_> = fallback
            .keys()
            .filter(|id| !translated.contains_key(*id))
            .cloned()
            .collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
    }

    assert!(
        failures.is_empty(),
        "translation completeness check failed:\n{}",
        failures.join("\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let (fallback_locale, fallback_src) = FALLBACK;
    let fallback = messages(fallback_src, fallback_locale);
    assert_eq!(
        fallback.get("chart-samples"),
        Some(&BTreeSet::from(["count".to_string()]))
    );

    for (locale, src) in LOCALES {
        for (id, vars) in messages(src, locale) {
            if let Some(expected) = fallback.get(&id) {
                assert_eq!(&vars, expected, "{locale}: variables of {id} differ from {fallback_locale}");
            }
        }
    }
}
