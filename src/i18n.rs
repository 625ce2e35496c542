//! Localization Resolver
//!
//! Embedded en/ja translation tables with lookup fallback:
//! current language -> ja -> the key itself.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::storage;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    En,
    #[default]
    Ja,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
        }
    }

    /// Parse a selector value; unknown defaults to ja
    pub fn from_value(value: &str) -> Lang {
        match value {
            "en" => Lang::En,
            _ => Lang::Ja,
        }
    }

    /// Resolve a stored language value; absent or unknown defaults to ja
    pub fn from_stored(value: Option<&str>) -> Lang {
        value.map(Lang::from_value).unwrap_or_default()
    }
}

static EN: LazyLock<HashMap<String, String>> =
    LazyLock::new(|| parse_table(include_str!("../locales/en.json")));
static JA: LazyLock<HashMap<String, String>> =
    LazyLock::new(|| parse_table(include_str!("../locales/ja.json")));

fn parse_table(raw: &str) -> HashMap<String, String> {
    serde_json::from_str(raw).expect("locale table should be valid JSON")
}

fn table(lang: Lang) -> &'static HashMap<String, String> {
    match lang {
        Lang::En => &EN,
        Lang::Ja => &JA,
    }
}

/// Look up `key` for `lang`, falling back to the ja table, then the key itself
pub fn translate(lang: Lang, key: &str) -> String {
    table(lang)
        .get(key)
        .or_else(|| JA.get(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

/// Load the persisted language, defaulting to ja
pub fn load_language() -> Lang {
    Lang::from_stored(storage::load_language_value().as_deref())
}

/// Persist the selected language
pub fn save_language(lang: Lang) {
    storage::save_language_value(lang.as_str());
}
