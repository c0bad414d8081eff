//! Lifecycle of the transient selector popup.
//!
//! One native window is created on first use and reused for every
//! presentation. A presentation is not allowed to auto-close immediately:
//! the programmatic activation that opens the popup can race the focus-loss
//! notifications it displaces, so key-loss only closes the popup after a
//! short delay has elapsed. Presenting again rearms the delay; a timer armed
//! by a superseded presentation must never act on the current one.

pub mod geometry;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use url::Url;

use crate::error::AppResult;
use crate::platform::types::{Point, Rect};

/// How long after presentation the popup ignores key-loss.
pub const DEACTIVATE_DELAY: Duration = Duration::from_millis(200);

/// Native window operations the controller needs. The picker content view
/// behind the window is the shell app's concern.
pub trait SelectorWindow: Send + Sync {
    /// Move the reused window to `origin`, bind it to `urls`, bring it to
    /// front and make it key.
    fn show_at(&self, origin: Point, urls: &[Url]) -> AppResult<()>;

    /// Release the content view first, then close the window.
    fn clear_and_close(&self);

    /// Whether the window currently has key status.
    fn is_key(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    /// Shown, deactivation delay still pending; key-loss is ignored.
    Presenting,
    /// Delay elapsed; key-loss closes the popup.
    Interactive,
}

#[derive(Debug)]
struct SelectorState {
    phase: Phase,
    /// Bumped on every presentation so stale delay timers become no-ops.
    generation: u64,
    urls: Vec<Url>,
}

/// Owns the selector window and its state machine:
/// `Closed → Presenting → Interactive → Closed`.
pub struct SelectorController {
    window: Arc<dyn SelectorWindow>,
    state: Arc<Mutex<SelectorState>>,
    delay: Duration,
}

impl SelectorController {
    pub fn new(window: Arc<dyn SelectorWindow>) -> Self {
        Self::with_delay(window, DEACTIVATE_DELAY)
    }

    pub fn with_delay(window: Arc<dyn SelectorWindow>, delay: Duration) -> Self {
        Self {
            window,
            state: Arc::new(Mutex::new(SelectorState {
                phase: Phase::Closed,
                generation: 0,
                urls: Vec::new(),
            })),
            delay,
        }
    }

    /// Present the popup for `urls`, anchored at the mouse position on the
    /// screen containing it. Valid in any phase; a presentation over an open
    /// popup repositions it and rearms the deactivation delay.
    pub async fn present(&self, urls: &[Url], mouse: Point, screens: &[Rect]) -> AppResult<()> {
        let screen = geometry::screen_under_mouse(mouse, screens);
        let origin = geometry::selector_origin(mouse, screen);

        let generation = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.phase = Phase::Presenting;
            state.urls = urls.to_vec();
            state.generation
        };

        self.window.show_at(origin, urls)?;

        let state = Arc::clone(&self.state);
        // Sample the deadline now so the delay is measured from presentation,
        // not from whenever the spawned task is first polled.
        let sleep = tokio::time::sleep(self.delay);
        tokio::spawn(async move {
            sleep.await;
            let mut state = state.lock().await;
            if state.generation == generation && state.phase == Phase::Presenting {
                state.phase = Phase::Interactive;
            }
        });

        Ok(())
    }

    /// The window lost key status. Closes the popup only once the
    /// deactivation delay of the current presentation has elapsed.
    pub async fn handle_resign_key(&self) {
        let mut state = self.state.lock().await;
        if state.phase == Phase::Interactive {
            self.window.clear_and_close();
            state.phase = Phase::Closed;
            state.urls.clear();
        }
    }

    /// Close unconditionally, e.g. after the user picked a browser.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        if state.phase != Phase::Closed {
            self.window.clear_and_close();
            state.phase = Phase::Closed;
            state.urls.clear();
        }
    }

    /// The URL batch bound to the current presentation.
    pub async fn current_urls(&self) -> Vec<Url> {
        self.state.lock().await.urls.clone()
    }

    pub async fn is_open(&self) -> bool {
        self.state.lock().await.phase != Phase::Closed
    }

    /// Whether the native window currently has key status.
    pub fn window_is_key(&self) -> bool {
        self.window.is_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingWindow;

    fn urls() -> Vec<Url> {
        vec![Url::parse("https://example.com/").unwrap()]
    }

    fn screens() -> Vec<Rect> {
        vec![Rect::new(0.0, 0.0, 1440.0, 900.0)]
    }

    async fn settle() {
        // Let the armed delay task observe the advanced clock.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn resign_key_before_delay_is_ignored() {
        let window = Arc::new(RecordingWindow::default());
        let selector = SelectorController::new(window.clone());

        selector
            .present(&urls(), Point::new(100.0, 100.0), &screens())
            .await
            .unwrap();
        selector.handle_resign_key().await;

        assert!(selector.is_open().await);
        assert_eq!(window.close_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn resign_key_after_delay_closes() {
        let window = Arc::new(RecordingWindow::default());
        let selector = SelectorController::new(window.clone());

        selector
            .present(&urls(), Point::new(100.0, 100.0), &screens())
            .await
            .unwrap();
        tokio::time::advance(DEACTIVATE_DELAY + Duration::from_millis(1)).await;
        settle().await;
        selector.handle_resign_key().await;

        assert!(!selector.is_open().await);
        assert_eq!(window.close_count(), 1);
        // Content is released before the window closes.
        assert_eq!(window.ops(), vec!["show", "clear_and_close"]);
    }

    #[tokio::test(start_paused = true)]
    async fn presenting_again_rearms_the_delay() {
        let window = Arc::new(RecordingWindow::default());
        let selector = SelectorController::new(window.clone());

        selector
            .present(&urls(), Point::new(100.0, 100.0), &screens())
            .await
            .unwrap();

        // Second presentation halfway through the first delay.
        tokio::time::advance(DEACTIVATE_DELAY / 2).await;
        settle().await;
        selector
            .present(&urls(), Point::new(200.0, 200.0), &screens())
            .await
            .unwrap();

        // The first presentation's timer fires now; it must not make the
        // second presentation eligible to close.
        tokio::time::advance(DEACTIVATE_DELAY / 2 + Duration::from_millis(1)).await;
        settle().await;
        selector.handle_resign_key().await;

        assert!(selector.is_open().await);
        assert_eq!(window.close_count(), 0);

        // The second presentation's own delay still works.
        tokio::time::advance(DEACTIVATE_DELAY).await;
        settle().await;
        selector.handle_resign_key().await;
        assert!(!selector.is_open().await);
    }

    #[tokio::test(start_paused = true)]
    async fn close_clears_the_batch() {
        let window = Arc::new(RecordingWindow::default());
        let selector = SelectorController::new(window.clone());

        selector
            .present(&urls(), Point::new(100.0, 100.0), &screens())
            .await
            .unwrap();
        assert_eq!(selector.current_urls().await, urls());

        selector.close().await;
        assert!(selector.current_urls().await.is_empty());
        assert!(!selector.is_open().await);
    }

    #[tokio::test(start_paused = true)]
    async fn resign_key_when_closed_is_a_no_op() {
        let window = Arc::new(RecordingWindow::default());
        let selector = SelectorController::new(window.clone());

        selector.handle_resign_key().await;
        assert_eq!(window.close_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn window_is_repositioned_on_each_presentation() {
        let window = Arc::new(RecordingWindow::default());
        let selector = SelectorController::new(window.clone());

        selector
            .present(&urls(), Point::new(500.0, 400.0), &screens())
            .await
            .unwrap();
        selector
            .present(&urls(), Point::new(700.0, 300.0), &screens())
            .await
            .unwrap();

        let origins = window.origins();
        assert_eq!(origins.len(), 2);
        assert_ne!(origins[0], origins[1]);
    }
}
