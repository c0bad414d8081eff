//! macOS glue: screen and mouse queries, browser discovery and launching,
//! the status item and the two app windows. Compiles to an empty library on
//! other platforms; the core crate only links it on macOS.

#[cfg(target_os = "macos")]
mod browsers;
#[cfg(target_os = "macos")]
mod launch;
#[cfg(target_os = "macos")]
mod preferences;
#[cfg(target_os = "macos")]
mod screen;
#[cfg(target_os = "macos")]
mod selector_window;
#[cfg(target_os = "macos")]
mod status_item;
#[cfg(target_os = "macos")]
mod util;

#[cfg(target_os = "macos")]
pub use browsers::{list_browsers, InstalledBrowser};
#[cfg(target_os = "macos")]
pub use launch::open_in_app;
#[cfg(target_os = "macos")]
pub use preferences::{show_preferences, PREFERENCES_MIN_HEIGHT, PREFERENCES_MIN_WIDTH};
#[cfg(target_os = "macos")]
pub use screen::{display_frames, mouse_location, ScreenFrame};
#[cfg(target_os = "macos")]
pub use selector_window::{selector_clear_and_close, selector_is_key, selector_show_at};
#[cfg(target_os = "macos")]
pub use status_item::status_item_set_visible;
#[cfg(target_os = "macos")]
pub use util::{activate_ignoring_other_apps, set_accessory_activation_policy};
