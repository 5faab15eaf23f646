use super::*;

const KEYS: &[&str] = &[
    "nav.home",
    "nav.about",
    "nav.pricing",
    "nav.contact",
    "nav.login",
    "nav.signup",
    "header.welcome",
    "header.logout",
    "footer.privacy",
    "footer.cookies",
    "footer.terms",
    "auth.loading",
    "roles.intended_parent",
    "roles.surrogate",
];

#[test]
fn every_locale_parses() {
    for lang in Language::ALL {
        assert!(parse_dictionary(lang.source()).is_ok(), "locale {}", lang.code());
    }
}

#[test]
fn every_locale_covers_core_keys() {
    for lang in Language::ALL {
        let dict = parse_dictionary(lang.source()).unwrap();
        for key in KEYS {
            assert!(dict.contains_key(*key), "{} missing {key}", lang.code());
        }
    }
}

#[test]
fn translate_uses_requested_language() {
    assert_eq!(translate(Language::En, "nav.home"), "Home");
    assert_eq!(translate(Language::Fr, "nav.home"), "Accueil");
    assert_eq!(translate(Language::Ja, "header.logout"), "ログアウト");
}

#[test]
fn unknown_key_falls_back_to_key() {
    assert_eq!(translate(Language::Es, "nav.nowhere"), "nav.nowhere");
}

#[test]
fn lookup_falls_back_to_english() {
    let mut fr = Dictionary::new();
    fr.insert("a".to_owned(), "fr-a".to_owned());
    let mut en = Dictionary::new();
    en.insert("a".to_owned(), "en-a".to_owned());
    en.insert("b".to_owned(), "en-b".to_owned());

    assert_eq!(lookup(Some(&fr), Some(&en), "a"), "fr-a");
    assert_eq!(lookup(Some(&fr), Some(&en), "b"), "en-b");
    assert_eq!(lookup(None, None, "c"), "c");
}

#[test]
fn flatten_builds_dotted_keys_and_skips_non_strings() {
    let value = serde_json::json!({ "nav": { "home": "Home", "count": 3 }, "title": "T" });
    let mut out = Dictionary::new();
    flatten("", &value, &mut out);
    assert_eq!(out.get("nav.home").map(String::as_str), Some("Home"));
    assert_eq!(out.get("title").map(String::as_str), Some("T"));
    assert!(!out.contains_key("nav.count"));
}

#[test]
fn language_serializes_as_code() {
    assert_eq!(serde_json::to_value(Language::Ja).unwrap(), "ja");
    assert_eq!(serde_json::from_str::<Language>("\"es\"").unwrap(), Language::Es);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn stored_language_is_none_off_browser() {
    assert_eq!(stored_language(), None);
}
