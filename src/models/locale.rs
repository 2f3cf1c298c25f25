use serde::{Deserialize, Serialize};

/// Character set used for normalization and filler.
///
/// Only the `"zh"` tag selects CJK; every other tag behaves as Latin.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    #[default]
    Latin,
    Chinese,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "zh" => Locale::Chinese,
            _ => Locale::Latin,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::Latin => "en",
            Locale::Chinese => "zh",
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::from_tag(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}
