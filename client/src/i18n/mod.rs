//! Static translation dictionaries.
//!
//! DESIGN
//! ======
//! Each language ships as an embedded JSON document. Nested objects are
//! flattened into dotted keys (`nav.home`) once, on first lookup. Lookups
//! fall back to English and then to the key itself, so a missing entry
//! shows up on screen instead of failing.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::util::storage::{BrowserStorage, load_json, save_json};

type Dictionary = HashMap<String, String>;

/// Storage key for the remembered language.
const LANGUAGE_KEY: &str = "lang";

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
    Ja,
    Fr,
    Es,
}

impl Language {
    pub const ALL: [Language; 5] = [Language::En, Language::Zh, Language::Ja, Language::Fr, Language::Es];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Ja => "ja",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Ja => "日本語",
            Self::Fr => "Français",
            Self::Es => "Español",
        }
    }

    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Zh => "🇨🇳",
            Self::Ja => "🇯🇵",
            Self::Fr => "🇫🇷",
            Self::Es => "🇪🇸",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::En => include_str!("locales/en.json"),
            Self::Zh => include_str!("locales/zh.json"),
            Self::Ja => include_str!("locales/ja.json"),
            Self::Fr => include_str!("locales/fr.json"),
            Self::Es => include_str!("locales/es.json"),
        }
    }
}

/// Flatten nested JSON objects into dotted keys. Non-string leaves are skipped.
fn flatten(prefix: &str, value: &serde_json::Value, out: &mut Dictionary) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                flatten(&path, child, out);
            }
        }
        serde_json::Value::String(text) => {
            out.insert(prefix.to_owned(), text.clone());
        }
        _ => {}
    }
}

fn parse_dictionary(source: &str) -> Result<Dictionary, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let mut out = Dictionary::new();
    flatten("", &value, &mut out);
    Ok(out)
}

fn dictionaries() -> &'static HashMap<Language, Dictionary> {
    static DICTIONARIES: OnceLock<HashMap<Language, Dictionary>> = OnceLock::new();
    DICTIONARIES.get_or_init(|| {
        Language::ALL
            .into_iter()
            .map(|lang| {
                let dict = parse_dictionary(lang.source()).unwrap_or_else(|e| {
                    leptos::logging::warn!("locale {} failed to parse: {e}", lang.code());
                    Dictionary::new()
                });
                (lang, dict)
            })
            .collect()
    })
}

fn lookup<'a>(primary: Option<&'a Dictionary>, fallback: Option<&'a Dictionary>, key: &'a str) -> &'a str {
    primary
        .and_then(|dict| dict.get(key))
        .or_else(|| fallback.and_then(|dict| dict.get(key)))
        .map_or(key, String::as_str)
}

/// Translate `key` into `lang`.
#[must_use]
pub fn translate(lang: Language, key: &str) -> &str {
    let all = dictionaries();
    lookup(all.get(&lang), all.get(&Language::En), key)
}

/// Language remembered from a previous visit, if any.
#[must_use]
pub fn stored_language() -> Option<Language> {
    load_json(&BrowserStorage, LANGUAGE_KEY)
}

/// Remember `lang` for later visits. Best effort.
pub fn remember_language(lang: Language) {
    if let Err(e) = save_json(&BrowserStorage, LANGUAGE_KEY, &lang) {
        leptos::logging::log!("language preference not saved: {e}");
    }
}
