//! CSRF token attachment for outgoing requests.
//!
//! The server renders the token and the header name into two `<meta>` tags.
//! They are read from the live document on every request, so a token rotated
//! mid-session is picked up by the next call.

use gloo_net::http::RequestBuilder;
use serde::Deserialize;

/// Request mechanisms that can carry the token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// JSON helper calls (`$.ajax` style)
    Ajax,
    /// Plain fetch requests
    Fetch,
    /// XMLHttpRequest
    Xhr,
}

impl Transport {
    /// Hooks a request sent this way passes through. Ajax helper calls run
    /// over XMLHttpRequest, so both the Ajax and the Xhr hook see them.
    pub fn hooks(self) -> &'static [Transport] {
        match self {
            Transport::Ajax => &[Transport::Ajax, Transport::Xhr],
            Transport::Fetch => &[Transport::Fetch],
            Transport::Xhr => &[Transport::Xhr],
        }
    }
}

/// Which URLs a transport may send the token to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachScope {
    Always,
    /// Relative URLs only
    SameOrigin,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CsrfSettings {
    /// `<meta name=...>` holding the token value
    pub token_meta: String,
    /// `<meta name=...>` holding the header name
    pub header_meta: String,
    pub ajax_scope: AttachScope,
    pub fetch_scope: AttachScope,
    pub xhr_scope: AttachScope,
}

impl Default for CsrfSettings {
    fn default() -> Self {
        Self {
            token_meta: "_csrf".to_string(),
            header_meta: "_csrf_header".to_string(),
            ajax_scope: AttachScope::Always,
            fetch_scope: AttachScope::Always,
            xhr_scope: AttachScope::SameOrigin,
        }
    }
}

impl CsrfSettings {
    pub fn scope_for(&self, transport: Transport) -> AttachScope {
        match transport {
            Transport::Ajax => self.ajax_scope,
            Transport::Fetch => self.fetch_scope,
            Transport::Xhr => self.xhr_scope,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub header: String,
    pub value: String,
}

impl CsrfToken {
    /// Both parts must be present and non-empty
    pub fn new(header: Option<String>, value: Option<String>) -> Option<Self> {
        match (header, value) {
            (Some(header), Some(value)) if !header.is_empty() && !value.is_empty() => {
                Some(Self { header, value })
            }
            _ => None,
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Read the token from the page metadata
pub fn read_token(settings: &CsrfSettings) -> Option<CsrfToken> {
    CsrfToken::new(
        meta_content(&settings.header_meta),
        meta_content(&settings.token_meta),
    )
}

/// True for URLs that stay on the page's origin (no scheme, no authority)
pub fn is_relative(url: &str) -> bool {
    !url.starts_with("http") && !url.starts_with("//")
}

/// Header to attach to a request for `url`, if any
pub fn header_for<'a>(
    token: Option<&'a CsrfToken>,
    scope: AttachScope,
    url: &str,
) -> Option<(&'a str, &'a str)> {
    let token = token?;
    match scope {
        AttachScope::SameOrigin if !is_relative(url) => None,
        _ => Some((token.header.as_str(), token.value.as_str())),
    }
}

/// Header for a request sent through `transport`: attached once when any of
/// its hooks lets the token through to `url`
pub fn request_header<'a>(
    token: Option<&'a CsrfToken>,
    settings: &CsrfSettings,
    transport: Transport,
    url: &str,
) -> Option<(&'a str, &'a str)> {
    transport
        .hooks()
        .iter()
        .find_map(|&hook| header_for(token, settings.scope_for(hook), url))
}

/// Attach the CSRF header to a request builder according to the transport's scopes
pub fn augment(
    builder: RequestBuilder,
    settings: &CsrfSettings,
    transport: Transport,
    url: &str,
) -> RequestBuilder {
    let token = read_token(settings);
    match request_header(token.as_ref(), settings, transport, url) {
        Some((name, value)) => builder.header(name, value),
        None => {
            log::debug!("CSRF header not attached for {}", url);
            builder
        }
    }
}
