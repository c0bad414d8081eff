use std::sync::Arc;

use url::Url;

use super::Platform;
use crate::error::{AppError, AppResult};
use crate::platform::types::{Browser, Point, Rect};
use crate::selector::geometry::{SELECTOR_HEIGHT, SELECTOR_WIDTH};
use crate::selector::SelectorWindow;

#[derive(Debug, Default)]
pub struct MacosPlatform;

impl MacosPlatform {
    pub fn new() -> Self {
        Self
    }
}

/// The native selector panel. The panel itself is created once by the glue
/// crate and reused; this handle is just a façade over it.
#[derive(Debug, Default)]
struct MacosSelectorWindow;

impl SelectorWindow for MacosSelectorWindow {
    fn show_at(&self, origin: Point, _urls: &[Url]) -> AppResult<()> {
        // The picker content view is owned by the shell app; it reads the
        // current batch back from the controller.
        platform_macos::selector_show_at(origin.x, origin.y, SELECTOR_WIDTH, SELECTOR_HEIGHT)
            .map_err(AppError::Platform)
    }

    fn clear_and_close(&self) {
        platform_macos::selector_clear_and_close();
    }

    fn is_key(&self) -> bool {
        platform_macos::selector_is_key()
    }
}

impl Platform for MacosPlatform {
    fn id(&self) -> &str {
        "macos"
    }

    fn mouse_location(&self) -> Option<Point> {
        let (x, y) = platform_macos::mouse_location()?;
        Some(Point::new(x, y))
    }

    fn screens(&self) -> Vec<Rect> {
        platform_macos::display_frames()
            .into_iter()
            .map(|frame| Rect::new(frame.x, frame.y, frame.width, frame.height))
            .collect()
    }

    fn list_browsers(&self) -> AppResult<Vec<Browser>> {
        let browsers = platform_macos::list_browsers();
        Ok(browsers
            .into_iter()
            .map(|browser| Browser {
                name: browser.name,
                bundle_id: browser.bundle_id,
                path: browser.path,
            })
            .collect())
    }

    fn open_in_app(&self, bundle_id: &str, urls: &[Url], args: &[String]) -> AppResult<()> {
        let urls: Vec<&str> = urls.iter().map(Url::as_str).collect();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        platform_macos::open_in_app(bundle_id, &urls, &args).map_err(AppError::Platform)
    }

    fn set_status_item_visible(&self, visible: bool) -> AppResult<()> {
        platform_macos::status_item_set_visible(visible).map_err(AppError::Platform)
    }

    fn set_activation_policy_accessory(&self) {
        platform_macos::set_accessory_activation_policy();
    }

    fn activate_ignoring_other_apps(&self) {
        platform_macos::activate_ignoring_other_apps();
    }

    fn show_preferences(&self) -> AppResult<()> {
        platform_macos::show_preferences().map_err(AppError::Platform)
    }

    fn selector_window(&self) -> Arc<dyn SelectorWindow> {
        Arc::new(MacosSelectorWindow)
    }
}
