use std::sync::Arc;

use url::Url;

use super::Platform;
use crate::error::AppResult;
use crate::platform::types::Point;
use crate::selector::SelectorWindow;

/// Platform adapter for hosts without native window or launch support.
/// URL opens are logged instead of launched; everything else is inert.
#[derive(Debug, Default)]
pub struct PortablePlatform;

impl PortablePlatform {
    pub fn new() -> Self {
        Self
    }
}

/// Selector window that exists only as state; nothing is drawn.
#[derive(Debug, Default)]
struct NullSelectorWindow;

impl SelectorWindow for NullSelectorWindow {
    fn show_at(&self, origin: Point, urls: &[Url]) -> AppResult<()> {
        tracing::debug!(x = origin.x, y = origin.y, count = urls.len(), "selector shown (no-op)");
        Ok(())
    }

    fn clear_and_close(&self) {}

    fn is_key(&self) -> bool {
        false
    }
}

impl Platform for PortablePlatform {
    fn selector_window(&self) -> Arc<dyn SelectorWindow> {
        Arc::new(NullSelectorWindow)
    }
}
