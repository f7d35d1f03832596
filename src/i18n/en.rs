//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Star Rating");

    // Details caption
    m.insert(Key::Votes, "votes");
    m.insert(Key::NoVotes, "No votes");

    // Demo sections
    m.insert(Key::SectionBasic, "Basic star-rating demo");
    m.insert(Key::SectionDetails, "Rating with details");
    m.insert(Key::SectionCustomColor, "Rating with custom color");
    m.insert(Key::SectionEditable, "Editable star-rating");
    m.insert(Key::SectionTemplateLoading, "Template loading");

    // Editable section
    m.insert(Key::LastChange, "Last change");
    m.insert(Key::NoChangeYet, "Click a star to rate");

    // Template loading
    m.insert(Key::Loading, "Loading...");
    m.insert(Key::LoadFailed, "Failed to load ratings");
    m.insert(Key::Reload, "Reload");
    m.insert(Key::EmptyList, "No ratings");

    // Header
    m.insert(Key::DarkMode, "Dark mode");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
