//! One-shot URL fragment cleanup for category pages.
//!
//! Category pages tend to resume client-side state from a leftover URL
//! fragment (`#scene3` auto-scrolls or auto-continues a game). Stripping the
//! fragment once, as soon as the DOM is ready, prevents that without
//! triggering a navigation or reload.

use url::Url;

use crate::classify;
use crate::config::NavlockConfig;
use crate::page::{DocumentPhase, PageContext, Visibility};

/// Lifecycle of the one-shot cleanup trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupState {
    /// Waiting for the document to leave `Loading`.
    Pending,
    /// The trigger fired; it never fires again this page load.
    Completed,
}

/// Strips the URL fragment on category pages, exactly once per page load.
#[derive(Debug)]
pub struct HashSanitizer {
    state: CleanupState,
}

impl HashSanitizer {
    pub fn new() -> Self {
        Self {
            state: CleanupState::Pending,
        }
    }

    pub fn state(&self) -> CleanupState {
        self.state
    }

    /// The host forwards the document phase here at install time and again
    /// when its DOM-ready signal fires. The first call past `Loading` runs
    /// the cleanup; every later call is a no-op.
    pub fn observe_ready(
        &mut self,
        config: &NavlockConfig,
        ctx: &dyn PageContext,
        phase: DocumentPhase,
    ) {
        if phase == DocumentPhase::Loading {
            return;
        }
        self.trigger(config, ctx);
    }

    /// Idempotent trigger guarding the Pending -> Completed transition.
    pub fn trigger(&mut self, config: &NavlockConfig, ctx: &dyn PageContext) {
        if self.state == CleanupState::Completed {
            return;
        }
        self.state = CleanupState::Completed;
        cleanup_url_hash(config, ctx);
    }

    /// Hook point for future state-reset logic when a category page becomes
    /// visible again (e.g. purging a "last played" key). Log-only today.
    pub fn observe_visibility(
        &self,
        config: &NavlockConfig,
        ctx: &dyn PageContext,
        visibility: Visibility,
    ) {
        if visibility != Visibility::Visible {
            return;
        }
        let on_category = Url::parse(&ctx.current_url())
            .map(|url| classify::is_category_path(url.path(), &config.category_paths))
            .unwrap_or(false);
        if on_category && config.debug {
            tracing::debug!("category page visible again; auto-continue reset hook (no-op)");
        }
    }
}

impl Default for HashSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the current history URL with its fragment-free form (path + query
/// preserved) when the page is a category page. No-op when the toggle is off,
/// the page is off-category, or no fragment is present.
fn cleanup_url_hash(config: &NavlockConfig, ctx: &dyn PageContext) {
    if !config.clean_hash_on_category {
        return;
    }

    let current = ctx.current_url();
    let url = match Url::parse(&current) {
        Ok(url) => url,
        Err(_) => return,
    };

    if !classify::is_category_path(url.path(), &config.category_paths) {
        return;
    }

    let fragment = match url.fragment() {
        Some(fragment) if !fragment.is_empty() => fragment,
        _ => return,
    };

    let clean = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };

    if config.debug {
        tracing::debug!(fragment, "stripping URL fragment to prevent auto-redirect");
    }
    ctx.replace_history_url(&clean);
}
