//! Recording fakes shared by the unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use url::Url;

use crate::error::{AppError, AppResult};
use crate::platform::types::{Browser, Point, Rect};
use crate::platform::Platform;
use crate::selector::SelectorWindow;

/// One recorded launch request.
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    pub bundle_id: String,
    pub urls: Vec<String>,
    pub args: Vec<String>,
}

/// Selector window that records operations instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingWindow {
    ops: Mutex<Vec<&'static str>>,
    origins: Mutex<Vec<Point>>,
    closes: AtomicUsize,
    key: AtomicBool,
}

impl RecordingWindow {
    pub fn ops(&self) -> Vec<&'static str> {
        self.ops.lock().unwrap().clone()
    }

    pub fn origins(&self) -> Vec<Point> {
        self.origins.lock().unwrap().clone()
    }

    pub fn show_count(&self) -> usize {
        self.origins.lock().unwrap().len()
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl SelectorWindow for RecordingWindow {
    fn show_at(&self, origin: Point, _urls: &[Url]) -> AppResult<()> {
        self.ops.lock().unwrap().push("show");
        self.origins.lock().unwrap().push(origin);
        self.key.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn clear_and_close(&self) {
        self.ops.lock().unwrap().push("clear_and_close");
        self.closes.fetch_add(1, Ordering::SeqCst);
        self.key.store(false, Ordering::SeqCst);
    }

    fn is_key(&self) -> bool {
        self.key.load(Ordering::SeqCst)
    }
}

/// Platform fake with a recording selector window and launch log.
pub struct MockPlatform {
    pub window: Arc<RecordingWindow>,
    launches: Mutex<Vec<Launch>>,
    fail_launches: AtomicBool,
    status_item_visible: Mutex<Option<bool>>,
    accessory_policy_sets: AtomicUsize,
    preferences_shown: AtomicUsize,
    activations: AtomicUsize,
    browsers: Mutex<Vec<Browser>>,
    mouse: Mutex<Option<Point>>,
    screens: Mutex<Vec<Rect>>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self {
            window: Arc::new(RecordingWindow::default()),
            launches: Mutex::new(Vec::new()),
            fail_launches: AtomicBool::new(false),
            status_item_visible: Mutex::new(None),
            accessory_policy_sets: AtomicUsize::new(0),
            preferences_shown: AtomicUsize::new(0),
            activations: AtomicUsize::new(0),
            browsers: Mutex::new(vec![Browser {
                name: "Safari".to_string(),
                bundle_id: "com.apple.Safari".to_string(),
                path: "/Applications/Safari.app".to_string(),
            }]),
            mouse: Mutex::new(Some(Point::new(500.0, 400.0))),
            screens: Mutex::new(vec![Rect::new(0.0, 0.0, 1440.0, 900.0)]),
        }
    }
}

impl MockPlatform {
    pub fn launches(&self) -> Vec<Launch> {
        self.launches.lock().unwrap().clone()
    }

    pub fn fail_launches(&self) {
        self.fail_launches.store(true, Ordering::SeqCst);
    }

    pub fn status_item_visible(&self) -> Option<bool> {
        *self.status_item_visible.lock().unwrap()
    }

    pub fn accessory_policy_sets(&self) -> usize {
        self.accessory_policy_sets.load(Ordering::SeqCst)
    }

    pub fn preferences_shown(&self) -> usize {
        self.preferences_shown.load(Ordering::SeqCst)
    }

    pub fn activations(&self) -> usize {
        self.activations.load(Ordering::SeqCst)
    }

    pub fn set_browsers(&self, browsers: Vec<Browser>) {
        *self.browsers.lock().unwrap() = browsers;
    }

    pub fn set_mouse(&self, mouse: Option<Point>) {
        *self.mouse.lock().unwrap() = mouse;
    }

    pub fn set_screens(&self, screens: Vec<Rect>) {
        *self.screens.lock().unwrap() = screens;
    }
}

impl Platform for MockPlatform {
    fn id(&self) -> &str {
        "mock"
    }

    fn mouse_location(&self) -> Option<Point> {
        *self.mouse.lock().unwrap()
    }

    fn screens(&self) -> Vec<Rect> {
        self.screens.lock().unwrap().clone()
    }

    fn list_browsers(&self) -> AppResult<Vec<Browser>> {
        Ok(self.browsers.lock().unwrap().clone())
    }

    fn open_in_app(&self, bundle_id: &str, urls: &[Url], args: &[String]) -> AppResult<()> {
        self.launches.lock().unwrap().push(Launch {
            bundle_id: bundle_id.to_string(),
            urls: urls.iter().map(|url| url.as_str().to_string()).collect(),
            args: args.to_vec(),
        });
        if self.fail_launches.load(Ordering::SeqCst) {
            return Err(AppError::Platform("open failed".to_string()));
        }
        Ok(())
    }

    fn set_status_item_visible(&self, visible: bool) -> AppResult<()> {
        *self.status_item_visible.lock().unwrap() = Some(visible);
        Ok(())
    }

    fn set_activation_policy_accessory(&self) {
        self.accessory_policy_sets.fetch_add(1, Ordering::SeqCst);
    }

    fn activate_ignoring_other_apps(&self) {
        self.activations.fetch_add(1, Ordering::SeqCst);
    }

    fn show_preferences(&self) -> AppResult<()> {
        self.preferences_shown.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn selector_window(&self) -> Arc<dyn SelectorWindow> {
        self.window.clone()
    }
}
