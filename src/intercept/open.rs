//! `window.open` interception with an explicitly captured delegate.

use crate::config::NavlockConfig;
use crate::page::PageContext;
use crate::policy::{decide_open, Decision, NavTarget};

/// The original "open a new browsing context" primitive, captured by the
/// host before it installs the wrapper. The interceptor only ever talks to
/// this reference; it never re-reads the (now replaced) global.
pub trait WindowOpener {
    fn open_window(&self, url: &str, target: &str, features: &str);
}

/// Replacement for the global open primitive: same signature and the same
/// delegation contract, except `_blank` opens to non-whitelisted URLs stay
/// in the current view and no new context is created.
pub struct OpenInterceptor {
    config: NavlockConfig,
    delegate: Box<dyn WindowOpener>,
}

impl OpenInterceptor {
    pub fn new(config: NavlockConfig, delegate: Box<dyn WindowOpener>) -> Self {
        Self { config, delegate }
    }

    /// Wrapper body. The host shim passes `target` as "" when the page
    /// omitted the argument; that behaves the same as `_blank`.
    pub fn open(
        &self,
        ctx: &dyn PageContext,
        url: &str,
        target: &str,
        features: &str,
    ) -> Decision {
        if self.config.debug {
            tracing::debug!(url = %url, target = %target, features = %features, "window.open called");
        }

        let decision = decide_open(
            &self.config.external_whitelist,
            url,
            &NavTarget::parse(target),
        );
        match &decision {
            Decision::Allow => {
                if self.config.debug {
                    tracing::debug!(url = %url, "window.open delegated to original primitive");
                }
                self.delegate.open_window(url, target, features);
            }
            Decision::Redirect(dest) => {
                if self.config.debug {
                    tracing::debug!(url = %dest, "window.open intercepted, redirecting in place");
                }
                ctx.replace_location(dest);
            }
        }
        decision
    }
}
