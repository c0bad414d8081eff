//! Decoding of the custom forwarding scheme.
//!
//! External callers hand a known target URL through the open-URL entry point
//! as `browserino://open?url=<base64>`. Any decoding failure drops the whole
//! open-event: no browser is launched and no selector is shown.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::Url;

pub const FORWARD_SCHEME: &str = "browserino";
pub const FORWARD_HOST: &str = "open";

const URL_PARAM: &str = "url";

/// Whether `url` is a forwarding-scheme wrapper.
pub fn is_forwarded(url: &Url) -> bool {
    url.scheme() == FORWARD_SCHEME && url.host_str() == Some(FORWARD_HOST)
}

/// Extract the target URL from a forwarding wrapper.
///
/// Returns `None` if `url` is not a wrapper, or if any decoding step fails
/// (missing parameter, invalid percent escape, invalid base64, invalid UTF-8,
/// unparsable target URL).
pub fn decode_forwarded(url: &Url) -> Option<Url> {
    if !is_forwarded(url) {
        return None;
    }
    // Form-urlencoded parsing would turn '+' into a space and corrupt the
    // base64 payload, so the query is split by hand and percent-decoded only.
    let query = url.query()?;
    let encoded = query.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == URL_PARAM).then_some(value)
    })?;
    let encoded = urlencoding::decode(encoded).ok()?;
    let bytes = STANDARD.decode(encoded.as_bytes()).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    Url::parse(&text).ok()
}

/// Wrap `target` in a forwarding URL. Inverse of [`decode_forwarded`].
pub fn encode_forwarded(target: &Url) -> Url {
    let encoded = STANDARD.encode(target.as_str().as_bytes());
    let wrapper = format!(
        "{FORWARD_SCHEME}://{FORWARD_HOST}?{URL_PARAM}={}",
        urlencoding::encode(&encoded)
    );
    Url::parse(&wrapper).expect("forwarding wrapper is always a valid URL")
}
