//! Supported locales.
//!
//! The locale selects which date vocabulary the grammar plugs into its
//! date-phrase rules. Marker sigils are the same for every locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::grammar::vocab::{self, Vocabulary};

/// A supported query locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Danish
    Da,
    /// German
    De,
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// Italian
    It,
    /// Japanese
    Ja,
    /// Korean
    Ko,
    /// Dutch
    Nl,
    /// Polish
    Pl,
    /// Portuguese
    Pt,
    /// Russian
    Ru,
    /// Swedish
    Sv,
    /// Chinese
    Zh,
}

impl Locale {
    /// Every supported locale, in code order.
    pub const ALL: [Self; 14] = [
        Self::Da,
        Self::De,
        Self::En,
        Self::Es,
        Self::Fr,
        Self::It,
        Self::Ja,
        Self::Ko,
        Self::Nl,
        Self::Pl,
        Self::Pt,
        Self::Ru,
        Self::Sv,
        Self::Zh,
    ];

    /// The two-letter locale code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Da => "da",
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Nl => "nl",
            Self::Pl => "pl",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::Sv => "sv",
            Self::Zh => "zh",
        }
    }

    /// The English name of the language.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Da => "Danish",
            Self::De => "German",
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::It => "Italian",
            Self::Ja => "Japanese",
            Self::Ko => "Korean",
            Self::Nl => "Dutch",
            Self::Pl => "Polish",
            Self::Pt => "Portuguese",
            Self::Ru => "Russian",
            Self::Sv => "Swedish",
            Self::Zh => "Chinese",
        }
    }

    /// The date vocabulary for this locale.
    #[must_use]
    pub const fn vocabulary(self) -> &'static Vocabulary {
        match self {
            Self::Da => &vocab::da::VOCABULARY,
            Self::De => &vocab::de::VOCABULARY,
            Self::En => &vocab::en::VOCABULARY,
            Self::Es => &vocab::es::VOCABULARY,
            Self::Fr => &vocab::fr::VOCABULARY,
            Self::It => &vocab::it::VOCABULARY,
            Self::Ja => &vocab::ja::VOCABULARY,
            Self::Ko => &vocab::ko::VOCABULARY,
            Self::Nl => &vocab::nl::VOCABULARY,
            Self::Pl => &vocab::pl::VOCABULARY,
            Self::Pt => &vocab::pt::VOCABULARY,
            Self::Ru => &vocab::ru::VOCABULARY,
            Self::Sv => &vocab::sv::VOCABULARY,
            Self::Zh => &vocab::zh::VOCABULARY,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = QueryError;

    /// Parse a locale code. Region suffixes (`en-US`, `pt_BR`) are accepted;
    /// any other language is an error, never a silent fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let language = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();

        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == language)
            .ok_or_else(|| QueryError::UnsupportedLocale(s.to_string()))
    }
}
