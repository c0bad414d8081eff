pub mod app;
pub mod error;
pub mod forward;
pub mod launcher;
pub mod platform;
pub mod rules;
pub mod selector;
pub mod settings;

#[cfg(test)]
mod testutil;

pub use crate::app::{App, SelectorEvent};
pub use crate::error::{AppError, AppResult};
pub use crate::rules::Rule;
pub use crate::settings::{FileStore, MemoryStore, Settings, SettingsStore};
