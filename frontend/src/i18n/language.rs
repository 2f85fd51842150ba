use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::SiteError;
use crate::utils::dom;

static LANGUAGE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(az|ru|en)").expect("language prefix pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Az,
    Ru,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Az, Language::Ru, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Az => "az",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Label shown in the switcher controls.
    pub fn label(self) -> &'static str {
        match self {
            Language::Az => "AZ",
            Language::Ru => "RU",
            Language::En => "EN",
        }
    }

    /// Language addressed by a URL path. Paths without a known language
    /// prefix belong to the default language.
    pub fn from_path(path: &str) -> Language {
        LANGUAGE_PREFIX
            .captures(path)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_default()
    }

    /// Root page of this language, e.g. `/ru/`.
    pub fn root_path(self) -> String {
        format!("/{}/", self.code())
    }

    /// Reads the remembered choice from local storage. Only used to pre-select
    /// the switcher; an invalid stored token reads as no preference.
    pub fn stored_preference() -> Option<Language> {
        match dom::storage_get(config::LANGUAGE_STORAGE_KEY) {
            Ok(Some(token)) => token.parse().ok(),
            Ok(None) => None,
            Err(e) => {
                log::debug!("language preference unavailable: {}", e);
                None
            }
        }
    }

    pub fn store_preference(self) {
        if let Err(e) = dom::storage_set(config::LANGUAGE_STORAGE_KEY, self.code()) {
            log::warn!("failed to remember language {}: {}", self, e);
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "az" => Ok(Language::Az),
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            other => Err(SiteError::UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_language_prefix() {
        assert_eq!(Language::from_path("/ru/diseases/neperenosimost-moloka"), Language::Ru);
        assert_eq!(Language::from_path("/en/"), Language::En);
        assert_eq!(Language::from_path("/az"), Language::Az);
    }

    #[test]
    fn defaults_to_azerbaijani() {
        assert_eq!(Language::from_path("/"), Language::Az);
        assert_eq!(Language::from_path("/de/gallery"), Language::Az);
        assert_eq!(Language::from_path(""), Language::Az);
    }

    #[test]
    fn parses_only_known_tokens() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert!("EN".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Ru).unwrap(), "\"ru\"");
        let lang: Language = serde_json::from_str("\"az\"").unwrap();
        assert_eq!(lang, Language::Az);
    }
}
