//! Interception decisions shared by the click and open interceptors.
//!
//! Both interceptors reduce their event to a [`NavigationIntent`] and apply
//! the same rule: a `_blank`-style navigation to a non-whitelisted URL is
//! redirected into the current view; everything else keeps native behavior.

use crate::classify;

/// Requested browsing-context target, parsed from the raw attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// No target given (empty or missing attribute).
    Unset,
    /// `_self`
    SelfFrame,
    /// `_parent`
    Parent,
    /// `_top`
    Top,
    /// `_blank`
    Blank,
    /// Any other named target.
    Named(String),
}

impl NavTarget {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => NavTarget::Unset,
            "_self" => NavTarget::SelfFrame,
            "_parent" => NavTarget::Parent,
            "_top" => NavTarget::Top,
            "_blank" => NavTarget::Blank,
            other => NavTarget::Named(other.to_string()),
        }
    }

    /// Targets that keep navigation in the current browsing context. Under a
    /// `<base target="_blank">` anything else inherits new-window behavior.
    fn stays_in_page(&self) -> bool {
        matches!(
            self,
            NavTarget::Unset | NavTarget::SelfFrame | NavTarget::Parent | NavTarget::Top
        )
    }
}

/// One navigation attempt, reduced from a DOM event. Built per event and
/// dropped as soon as the decision is made.
#[derive(Debug, Clone)]
pub struct NavigationIntent {
    /// Fully resolved destination URL.
    pub url: String,
    pub target: NavTarget,
    /// A document-level `<base target="_blank">` is present.
    pub via_base_blank: bool,
}

/// Outcome of a policy check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Keep native behavior (event default action / original open primitive).
    Allow,
    /// Cancel native behavior and replace the current location with the URL.
    Redirect(String),
}

/// Decide an anchor click.
///
/// Interception applies when the anchor targets `_blank`, or when a
/// `<base target="_blank">` is in effect and the anchor's own target is not
/// one of the self-referencing values. Whitelisted URLs keep native behavior
/// so they may still open an OS-level window.
pub fn decide_click(whitelist: &[String], intent: &NavigationIntent) -> Decision {
    let intercepts = intent.target == NavTarget::Blank
        || (intent.via_base_blank && !intent.target.stays_in_page());
    if !intercepts {
        return Decision::Allow;
    }

    if classify::is_whitelisted(&intent.url, whitelist) {
        return Decision::Allow;
    }

    Decision::Redirect(intent.url.clone())
}

/// Decide a `window.open` call. Only `_blank` (or an omitted/empty) target is
/// subject to interception; explicit `_self`, `_parent`, `_top`, and named
/// targets always delegate to the original primitive.
pub fn decide_open(whitelist: &[String], url: &str, target: &NavTarget) -> Decision {
    if !matches!(target, NavTarget::Blank | NavTarget::Unset) {
        return Decision::Allow;
    }

    if classify::is_whitelisted(url, whitelist) {
        return Decision::Allow;
    }

    Decision::Redirect(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitelist() -> Vec<String> {
        vec!["google.com".to_string(), "github.com".to_string()]
    }

    fn intent(url: &str, target: &str, via_base_blank: bool) -> NavigationIntent {
        NavigationIntent {
            url: url.to_string(),
            target: NavTarget::parse(target),
            via_base_blank,
        }
    }

    #[test]
    fn parse_reserved_targets() {
        assert_eq!(NavTarget::parse(""), NavTarget::Unset);
        assert_eq!(NavTarget::parse("_self"), NavTarget::SelfFrame);
        assert_eq!(NavTarget::parse("_parent"), NavTarget::Parent);
        assert_eq!(NavTarget::parse("_top"), NavTarget::Top);
        assert_eq!(NavTarget::parse("_blank"), NavTarget::Blank);
        assert_eq!(
            NavTarget::parse("popup"),
            NavTarget::Named("popup".to_string())
        );
    }

    #[test]
    fn click_without_blank_target_is_allowed() {
        let d = decide_click(&whitelist(), &intent("https://evil.test/y", "", false));
        assert_eq!(d, Decision::Allow);
        let d = decide_click(&whitelist(), &intent("https://evil.test/y", "_self", false));
        assert_eq!(d, Decision::Allow);
    }

    #[test]
    fn click_on_blank_target_is_redirected() {
        let d = decide_click(&whitelist(), &intent("https://evil.test/y", "_blank", false));
        assert_eq!(d, Decision::Redirect("https://evil.test/y".to_string()));
    }

    #[test]
    fn click_on_whitelisted_blank_target_is_allowed() {
        let d = decide_click(&whitelist(), &intent("https://google.com/x", "_blank", false));
        assert_eq!(d, Decision::Allow);
    }

    #[test]
    fn base_blank_extends_interception_to_named_targets() {
        // <base target="_blank"> makes unadorned and named anchors open new
        // windows; both must be intercepted.
        let d = decide_click(&whitelist(), &intent("https://evil.test/y", "popup", true));
        assert_eq!(d, Decision::Redirect("https://evil.test/y".to_string()));

        // The self-referencing values stay in the page regardless.
        for target in ["", "_self", "_parent", "_top"] {
            let d = decide_click(&whitelist(), &intent("https://evil.test/y", target, true));
            assert_eq!(d, Decision::Allow, "target {target:?} should be allowed");
        }
    }

    #[test]
    fn open_with_explicit_target_is_allowed() {
        for target in ["_self", "_parent", "_top", "popup"] {
            let d = decide_open(
                &whitelist(),
                "https://evil.test/z",
                &NavTarget::parse(target),
            );
            assert_eq!(d, Decision::Allow, "target {target:?} should delegate");
        }
    }

    #[test]
    fn open_with_blank_or_default_target_is_redirected() {
        let d = decide_open(&whitelist(), "https://evil.test/z", &NavTarget::Blank);
        assert_eq!(d, Decision::Redirect("https://evil.test/z".to_string()));
        let d = decide_open(&whitelist(), "https://evil.test/z", &NavTarget::Unset);
        assert_eq!(d, Decision::Redirect("https://evil.test/z".to_string()));
    }

    #[test]
    fn open_whitelisted_is_allowed() {
        let d = decide_open(&whitelist(), "https://github.com/a/b", &NavTarget::Blank);
        assert_eq!(d, Decision::Allow);
    }
}
