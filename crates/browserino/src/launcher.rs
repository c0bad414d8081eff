//! Launching a resolved browser with a URL batch.

use url::Url;

use crate::platform::SharedPlatform;

/// Private-mode launch flags by bundle identifier (matched on lowercase).
/// Browsers absent from this table open private requests as normal windows.
const PRIVATE_FLAGS: &[(&str, &str)] = &[
    ("com.google.chrome", "--incognito"),
    ("com.brave.browser", "--incognito"),
    ("com.vivaldi.vivaldi", "--incognito"),
    ("org.mozilla.firefox", "--private-window"),
    ("com.microsoft.edgemac", "--inPrivate"),
    ("com.operasoftware.opera", "--private"),
];

fn private_flag(bundle_id: &str) -> Option<&'static str> {
    let bundle_id = bundle_id.to_lowercase();
    PRIVATE_FLAGS
        .iter()
        .find(|(prefix, _)| bundle_id.starts_with(prefix))
        .map(|(_, flag)| *flag)
}

/// Hands URL batches to the platform launch facility. Launch failures are
/// absorbed here; the app stays usable whatever the target browser does.
pub struct Launcher {
    platform: SharedPlatform,
}

impl Launcher {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }

    pub fn open(&self, urls: &[Url], bundle_id: &str, incognito: bool) {
        let mut args = Vec::new();
        if incognito {
            match private_flag(bundle_id) {
                Some(flag) => args.push(flag.to_string()),
                None => {
                    tracing::debug!(%bundle_id, "no private-mode flag known for browser");
                }
            }
        }
        if let Err(error) = self.platform.open_in_app(bundle_id, urls, &args) {
            tracing::warn!(%bundle_id, %error, "failed to launch browser");
        }
    }
}
