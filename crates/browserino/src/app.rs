//! Process-wide application controller.
//!
//! Owns the settings store, the launcher, the selector controller and the
//! platform handle, and dispatches every incoming open-URL event. There is
//! exactly one `App` per process, built in `main` and threaded explicitly
//! through the event loop.

use std::sync::Arc;

use url::Url;

use crate::error::AppResult;
use crate::launcher::Launcher;
use crate::platform::types::Point;
use crate::platform::SharedPlatform;
use crate::selector::SelectorController;
use crate::settings::SettingsStore;
use crate::{forward, rules};

/// Interaction events reported by the picker view collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    /// The user picked a browser for the current batch.
    BrowserChosen { bundle_id: String, incognito: bool },
    /// The user dismissed the picker without choosing.
    Dismissed,
}

pub struct App {
    platform: SharedPlatform,
    store: Arc<dyn SettingsStore>,
    launcher: Launcher,
    selector: SelectorController,
}

impl App {
    pub fn new(platform: SharedPlatform, store: Arc<dyn SettingsStore>) -> Self {
        let launcher = Launcher::new(platform.clone());
        let selector = SelectorController::new(platform.selector_window());
        Self {
            platform,
            store,
            launcher,
            selector,
        }
    }

    /// Launch-time setup: status item, browser discovery, first-run prompt.
    pub fn on_launch(&self) -> AppResult<()> {
        self.reconcile_status_item();

        let mut settings = self.store.load()?;
        if settings.browsers.is_none() {
            match self.platform.list_browsers() {
                Ok(found) => {
                    tracing::info!(count = found.len(), "recorded installed browsers");
                    settings.browsers = Some(found);
                    self.store.save(&settings)?;
                }
                Err(error) => {
                    tracing::warn!(%error, "browser discovery failed");
                }
            }
            // No configuration existed yet: open preferences instead of
            // waiting for the user to find the status item.
            self.open_preferences();
        }
        Ok(())
    }

    /// Add or remove the status item to match the stored preference. Called
    /// at launch and by the settings-editing collaborator after every change
    /// to the flag; the app stays an accessory app either way.
    pub fn reconcile_status_item(&self) {
        self.platform.set_activation_policy_accessory();
        let show = self
            .store
            .load()
            .map(|settings| settings.show_in_menu_bar)
            .unwrap_or(true);
        if let Err(error) = self.platform.set_status_item_visible(show) {
            tracing::warn!(%error, "failed to update status item");
        }
    }

    pub fn open_preferences(&self) {
        if let Err(error) = self.platform.show_preferences() {
            tracing::warn!(%error, "failed to open preferences");
        }
    }

    /// Dispatch one open-URL event.
    ///
    /// A single forwarding-scheme URL is decoded first; decoding failure
    /// drops the event silently. A single URL is then routed by the rules;
    /// everything else (no match, or more than one URL) falls through to the
    /// interactive selector.
    pub async fn handle_open_urls(&self, urls: Vec<Url>) {
        if urls.is_empty() {
            return;
        }

        let mut urls = urls;
        if urls.len() == 1 && forward::is_forwarded(&urls[0]) {
            match forward::decode_forwarded(&urls[0]) {
                Some(target) => urls = vec![target],
                None => {
                    tracing::debug!(url = %urls[0], "dropping malformed forwarded url");
                    return;
                }
            }
        }

        if urls.len() == 1 {
            let settings = self.store.load().unwrap_or_default();
            if let Some(app) = rules::match_rules(urls[0].as_str(), &settings.rules) {
                tracing::debug!(%app, url = %urls[0], "rule matched");
                self.launcher.open(&urls, app, false);
                return;
            }
        }

        self.present_selector(&urls).await;
    }

    async fn present_selector(&self, urls: &[Url]) {
        let mouse = self
            .platform
            .mouse_location()
            .unwrap_or_else(|| Point::new(0.0, 0.0));
        let screens = self.platform.screens();
        if let Err(error) = self.selector.present(urls, mouse, &screens).await {
            tracing::warn!(%error, "failed to present selector");
            return;
        }
        self.platform.activate_ignoring_other_apps();
    }

    /// Picker interaction from the content view collaborator.
    pub async fn handle_selector_event(&self, event: SelectorEvent) {
        match event {
            SelectorEvent::BrowserChosen {
                bundle_id,
                incognito,
            } => {
                let urls = self.selector.current_urls().await;
                if !urls.is_empty() {
                    self.launcher.open(&urls, &bundle_id, incognito);
                }
                self.selector.close().await;
            }
            SelectorEvent::Dismissed => self.selector.close().await,
        }
    }

    /// The selector window lost key status.
    pub async fn handle_resign_key(&self) {
        self.selector.handle_resign_key().await;
    }

    pub async fn selector_open(&self) -> bool {
        self.selector.is_open().await
    }

    pub fn selector_is_key(&self) -> bool {
        self.selector.window_is_key()
    }
}
