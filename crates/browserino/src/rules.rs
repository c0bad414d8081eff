//! Routing rules: ordered (pattern, browser) pairs matched against URLs.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// A single routing rule. Earlier rules in the stored sequence take priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Case-insensitive regular expression matched anywhere in the URL string.
    pub pattern: String,
    /// Bundle identifier of the browser that handles matching URLs.
    pub app: String,
}

/// Evaluate `rules` in order against the absolute URL string and return the
/// bundle identifier of the first rule that matches.
///
/// Rules with empty or malformed patterns are skipped; a bad rule never
/// aborts the scan. An empty rule list is simply no match.
pub fn match_rules<'a>(url: &str, rules: &'a [Rule]) -> Option<&'a str> {
    for rule in rules {
        if rule.pattern.is_empty() {
            continue;
        }
        let regex = match RegexBuilder::new(&rule.pattern)
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => regex,
            Err(error) => {
                tracing::warn!(pattern = %rule.pattern, %error, "skipping rule with invalid pattern");
                continue;
            }
        };
        if regex.is_match(url) {
            return Some(&rule.app);
        }
    }
    None
}
