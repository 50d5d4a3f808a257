//! Quotation source for hello.
//!
//! Provides the greeting printed as the program's last line, plus a few fixed
//! Go proverbs. The binary only depends on the [`QuoteSource`] trait so the
//! provider can be swapped in tests.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Anything that can produce a greeting line.
pub trait QuoteSource {
    fn hello(&self) -> Cow<'static, str>;
}

/// Languages the greeting is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown greeting language: {0:?}")]
pub struct UnknownLanguageError(pub String);

impl Language {
    /// BCP 47 primary language subtag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Language] {
        &[Language::English, Language::French, Language::Spanish]
    }

    /// Parse a language from a tag or a name, ignoring case and surrounding
    /// whitespace.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "fr" | "french" | "français" | "francais" => Some(Language::French),
            "es" | "spanish" | "español" | "espanol" => Some(Language::Spanish),
            _ => None,
        }
    }

    const fn greeting(self) -> &'static str {
        match self {
            Language::English => "Hello, world.",
            Language::French => "Bonjour le monde.",
            Language::Spanish => "Hola, mundo.",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLanguageError(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The built-in quotation source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quotes {
    language: Language,
}

impl Quotes {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn glass() -> &'static str {
        "I can eat glass and it doesn't hurt me."
    }

    #[must_use]
    pub const fn go() -> &'static str {
        "Don't communicate by sharing memory, share memory by communicating."
    }

    #[must_use]
    pub const fn opt() -> &'static str {
        "If a program is too slow, it must have a loop."
    }
}

impl QuoteSource for Quotes {
    fn hello(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.language.greeting())
    }
}
