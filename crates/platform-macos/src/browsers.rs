use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InstalledBrowser {
    pub name: String,
    pub bundle_id: String,
    pub path: String,
}

/// Scan the standard application directories for bundles that declare an
/// http/https URL handler in their Info.plist.
pub fn list_browsers() -> Vec<InstalledBrowser> {
    let mut browsers = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for dir in app_directories() {
        if let Ok(entries) = std::fs::read_dir(&dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("app") {
                    continue;
                }
                if let Some(browser) = read_browser_info(&path) {
                    if seen.insert(browser.bundle_id.clone()) {
                        browsers.push(browser);
                    }
                }
            }
        }
    }

    browsers.sort_by(|a, b| a.name.cmp(&b.name));
    browsers
}

fn app_directories() -> Vec<std::path::PathBuf> {
    let mut dirs = vec![
        std::path::PathBuf::from("/Applications"),
        std::path::PathBuf::from("/System/Applications"),
    ];
    if let Ok(home) = std::env::var("HOME") {
        dirs.push(std::path::PathBuf::from(home).join("Applications"));
    }
    dirs
}

fn read_browser_info(app_path: &std::path::Path) -> Option<InstalledBrowser> {
    let plist_path = app_path.join("Contents").join("Info.plist");
    let plist = plist::Value::from_file(&plist_path).ok()?;
    let dict = plist.as_dictionary()?;

    if !handles_web_urls(dict) {
        return None;
    }

    let bundle_id = dict
        .get("CFBundleIdentifier")
        .and_then(|value| value.as_string())
        .map(|value| value.to_string())?;

    let name = dict
        .get("CFBundleDisplayName")
        .and_then(|value| value.as_string())
        .or_else(|| dict.get("CFBundleName").and_then(|value| value.as_string()))
        .map(|value| value.to_string())
        .unwrap_or_else(|| {
            app_path
                .file_stem()
                .and_then(|value| value.to_str())
                .unwrap_or("Unknown")
                .to_string()
        });

    Some(InstalledBrowser {
        name,
        bundle_id,
        path: app_path.to_string_lossy().to_string(),
    })
}

fn handles_web_urls(dict: &plist::Dictionary) -> bool {
    let Some(url_types) = dict.get("CFBundleURLTypes").and_then(|value| value.as_array()) else {
        return false;
    };
    url_types.iter().any(|url_type| {
        url_type
            .as_dictionary()
            .and_then(|entry| entry.get("CFBundleURLSchemes"))
            .and_then(|schemes| schemes.as_array())
            .map(|schemes| {
                schemes.iter().any(|scheme| {
                    matches!(scheme.as_string(), Some("http") | Some("https"))
                })
            })
            .unwrap_or(false)
    })
}
