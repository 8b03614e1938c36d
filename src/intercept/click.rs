//! Capture-phase click interception.

use crate::classify;
use crate::config::NavlockConfig;
use crate::page::PageContext;
use crate::policy::{decide_click, Decision, NavTarget, NavigationIntent};

/// Nearest enclosing anchor of a click, as resolved by the host
/// (`event.target.closest('a[href]')`).
#[derive(Debug, Clone)]
pub struct Anchor {
    /// Fully resolved `href`.
    pub href: String,
    /// Raw `target` attribute value, "" when absent.
    pub target: String,
}

/// One click, reduced to what the policy needs. The host must deliver these
/// from a capture-phase listener so page handlers cannot swallow the event
/// first.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub anchor: Option<Anchor>,
    /// A `<base target="_blank">` element exists in the document head.
    pub base_target_blank: bool,
}

/// Applies click policy and performs the in-place redirect.
#[derive(Debug)]
pub struct ClickInterceptor {
    config: NavlockConfig,
}

impl ClickInterceptor {
    pub fn new(config: NavlockConfig) -> Self {
        Self { config }
    }

    /// Handle one click. On `Redirect` the current location has already been
    /// replaced and the host must cancel the event's default action; on
    /// `Allow` native behavior proceeds untouched.
    pub fn handle(&self, ctx: &dyn PageContext, event: &ClickEvent) -> Decision {
        let anchor = match &event.anchor {
            Some(anchor) => anchor,
            None => return Decision::Allow,
        };

        let intent = NavigationIntent {
            url: anchor.href.clone(),
            target: NavTarget::parse(&anchor.target),
            via_base_blank: event.base_target_blank,
        };

        let decision = decide_click(&self.config.external_whitelist, &intent);
        match &decision {
            Decision::Allow => {
                if self.config.debug {
                    tracing::debug!(
                        url = %anchor.href,
                        target = %anchor.target,
                        "click allowed, native behavior proceeds"
                    );
                }
            }
            Decision::Redirect(url) => {
                if self.config.debug {
                    let external = classify::is_external(url, &ctx.current_url());
                    tracing::debug!(url = %url, external, "click intercepted, redirecting in place");
                }
                ctx.replace_location(url);
            }
        }
        decision
    }
}
