//! URL classification: external-origin, whitelist, and category-path checks.
//!
//! These are the pure predicates the interceptors consult. The only fallible
//! step anywhere in classification is URL resolution, and failure is absorbed
//! as "external" so an unverifiable destination can never bypass the policy.

use std::fmt;

use url::Url;

/// Security-boundary origin of a browsing context: scheme + host + port.
///
/// We intentionally normalise down to this triple so that different paths and
/// fragments on the embedding origin compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
}

/// Error deriving an [`Origin`] from a URL.
#[derive(Debug, thiserror::Error)]
pub enum OriginError {
    #[error("not a valid URL: {0}")]
    Parse(#[from] url::ParseError),
    /// Host-less URLs (`data:`, `about:blank`) have an opaque origin that
    /// never equals a page origin.
    #[error("URL has no host: {0}")]
    MissingHost(String),
}

impl Origin {
    /// Origin of an already-parsed URL.
    pub fn of(url: &Url) -> Result<Self, OriginError> {
        let host = match url.host_str() {
            Some(host) => host,
            None => return Err(OriginError::MissingHost(url.to_string())),
        };
        Ok(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port_or_known_default(),
        })
    }

    /// Parse a URL string and take its origin.
    pub fn from_url(url: &str) -> Result<Self, OriginError> {
        Origin::of(&Url::parse(url)?)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}://{}:{}", self.scheme, self.host, port),
            None => write!(f, "{}://{}", self.scheme, self.host),
        }
    }
}

/// True when `url`, resolved against the current page URL, lands on a
/// different origin — or cannot be resolved at all. Unparseable input is
/// treated as external so interception stays the safe default.
pub fn is_external(url: &str, page_url: &str) -> bool {
    let base = match Url::parse(page_url) {
        Ok(base) => base,
        Err(_) => return true,
    };
    let page = match Origin::of(&base) {
        Ok(origin) => origin,
        Err(_) => return true,
    };

    match base.join(url) {
        Ok(resolved) => match Origin::of(&resolved) {
            Ok(dest) => dest != page,
            Err(_) => true,
        },
        Err(_) => true,
    }
}

/// True when `url` contains any whitelist entry as a substring.
///
/// This is deliberately the original wrapper semantic: plain substring
/// containment, not host equality or registrable-domain suffix matching.
/// A `google.com` entry also matches `notgoogle.com.evil.test`. Kept as-is
/// for compatibility with deployed whitelists.
pub fn is_whitelisted(url: &str, whitelist: &[String]) -> bool {
    whitelist.iter().any(|host| url.contains(host.as_str()))
}

/// True when `path` starts with any configured category prefix.
pub fn is_category_path(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}
