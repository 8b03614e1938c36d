//! Host-page capability surface.
//!
//! The wrapper's webview owns the real document; this trait is the narrow
//! slice the policy engine needs from it. Keeping the surface abstract lets
//! every decision path run under tests without a browser.

/// Capabilities the policy engine needs from the hosting page.
///
/// `replace_location` must behave like `window.location.replace`: a same-tab
/// hard navigation that does not push a new history entry. Likewise
/// `replace_history_url` must behave like `history.replaceState` with an
/// unchanged state object: the displayed URL changes and nothing reloads.
pub trait PageContext {
    /// Full URL of the current document, as the webview reports it.
    fn current_url(&self) -> String;
    /// Same-tab navigation to `url` without pushing a history entry.
    fn replace_location(&self, url: &str);
    /// Rewrite the current history entry's URL without navigating.
    fn replace_history_url(&self, url: &str);
}

/// Document readiness, as forwarded by the host (`document.readyState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentPhase {
    Loading,
    Interactive,
    Complete,
}

/// Page visibility, as forwarded by the host (`visibilitychange`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}
