//! Application templates and the palette fill engine.

pub mod apps;
pub mod engine;

pub use apps::{app_names, find_app, AppProfile, APP_PROFILES};
pub use engine::{fill_enabled, fill_template, FilledTemplate, Template, TemplateError};
