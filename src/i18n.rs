//! Internationalization (i18n) support for the rating widget and demo
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a settings language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// The other language, for the demo's language switch
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Details caption
    Votes,
    NoVotes,

    // Demo sections
    SectionBasic,
    SectionDetails,
    SectionCustomColor,
    SectionEditable,
    SectionTemplateLoading,

    // Editable section
    LastChange,
    NoChangeYet,

    // Template loading
    Loading,
    LoadFailed,
    Reload,
    EmptyList,

    // Header
    DarkMode,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::Votes,
        Key::NoVotes,
        Key::SectionBasic,
        Key::SectionDetails,
        Key::SectionCustomColor,
        Key::SectionEditable,
        Key::SectionTemplateLoading,
        Key::LastChange,
        Key::NoChangeYet,
        Key::Loading,
        Key::LoadFailed,
        Key::Reload,
        Key::EmptyList,
        Key::DarkMode,
    ];

    #[test]
    fn test_every_key_translated() {
        for lang in Language::all() {
            for key in ALL_KEYS {
                assert_ne!(t(*lang, *key), "???", "{:?} missing {:?}", lang, key);
            }
        }
    }

    #[test]
    fn test_language_codes() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
        assert_eq!(Language::from_code("fr"), Language::English);
        assert_eq!(Language::English.toggled(), Language::Chinese);
    }
}
