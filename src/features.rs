//! Feature modules - demo configuration and data loading
//!
//! Features should not depend on UI components directly.

pub mod ratings_source;
pub mod settings;

pub use settings::{DemoSettings, DisplaySettings, Settings, SettingsError};
