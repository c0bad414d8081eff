#[cfg(target_os = "macos")]
pub mod macos;
pub mod portable;

use std::sync::Arc;

use url::Url;

use crate::error::{AppError, AppResult};
use crate::platform::types::{Browser, Point, Rect};
use crate::selector::SelectorWindow;

/// Narrow seam between the dispatch logic and the host OS. Every method has
/// a safe default so the core compiles and tests on any platform.
pub trait Platform: Send + Sync {
    fn id(&self) -> &str {
        "unsupported"
    }

    /// Current mouse position in screen coordinates, if known.
    fn mouse_location(&self) -> Option<Point> {
        None
    }

    /// Visible frames of all attached screens, main screen first.
    fn screens(&self) -> Vec<Rect> {
        Vec::new()
    }

    /// Browsers installed on this machine.
    fn list_browsers(&self) -> AppResult<Vec<Browser>> {
        Err(AppError::Unsupported("list_browsers"))
    }

    /// Hand `urls` to the application identified by `bundle_id`, with extra
    /// launch arguments appended.
    fn open_in_app(&self, _bundle_id: &str, _urls: &[Url], _args: &[String]) -> AppResult<()> {
        Err(AppError::Unsupported("open_in_app"))
    }

    /// Add or remove the menu-bar status item.
    fn set_status_item_visible(&self, _visible: bool) -> AppResult<()> {
        Err(AppError::Unsupported("set_status_item_visible"))
    }

    /// Keep the process an accessory app (no dock icon), whether or not the
    /// status item is installed.
    fn set_activation_policy_accessory(&self) {}

    /// Bring this process to the front even though it has no dock presence.
    fn activate_ignoring_other_apps(&self) {}

    /// Show the single, reused preferences window.
    fn show_preferences(&self) -> AppResult<()> {
        Err(AppError::Unsupported("show_preferences"))
    }

    /// Handle to the reusable selector popup window.
    fn selector_window(&self) -> Arc<dyn SelectorWindow>;
}

pub type SharedPlatform = Arc<dyn Platform>;
