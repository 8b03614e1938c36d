//! Top-level wiring: one `NavigationGuard` per page load.
//!
//! The host webview constructs the guard with its configuration and the
//! captured open primitive, then forwards DOM signals into it: clicks from a
//! capture-phase listener, `window.open` calls from the installed wrapper,
//! document readiness, and visibility changes. The guard itself never talks
//! to the webview except through the [`PageContext`] handed to each call.

use crate::classify::{Origin, OriginError};
use crate::config::NavlockConfig;
use crate::hash_cleanup::HashSanitizer;
use crate::intercept::{ClickEvent, ClickInterceptor, OpenInterceptor, WindowOpener};
use crate::page::{DocumentPhase, PageContext, Visibility};
use crate::policy::Decision;

pub struct NavigationGuard {
    config: NavlockConfig,
    click: ClickInterceptor,
    open: OpenInterceptor,
    sanitizer: HashSanitizer,
}

impl NavigationGuard {
    /// Build the guard and announce it once. `opener` is the original open
    /// primitive, captured by the host before installing the wrapper.
    pub fn new(config: NavlockConfig, opener: Box<dyn WindowOpener>) -> Self {
        tracing::info!("build from navlock {}", env!("CARGO_PKG_VERSION"));
        if config.debug {
            tracing::debug!(?config, "guard initialized");
        }
        Self {
            click: ClickInterceptor::new(config.clone()),
            open: OpenInterceptor::new(config.clone(), opener),
            sanitizer: HashSanitizer::new(),
            config,
        }
    }

    pub fn config(&self) -> &NavlockConfig {
        &self.config
    }

    /// Origin the guard treats as internal, derived from the host page URL.
    pub fn page_origin(&self, ctx: &dyn PageContext) -> Result<Origin, OriginError> {
        Origin::from_url(&ctx.current_url())
    }

    /// Capture-phase click entry point. Returns the decision so the host can
    /// cancel the event's default action on `Redirect`.
    pub fn handle_click(&self, ctx: &dyn PageContext, event: &ClickEvent) -> Decision {
        self.click.handle(ctx, event)
    }

    /// `window.open` wrapper entry point.
    pub fn handle_open(
        &self,
        ctx: &dyn PageContext,
        url: &str,
        target: &str,
        features: &str,
    ) -> Decision {
        self.open.open(ctx, url, target, features)
    }

    /// Forward document readiness: once at install time with the phase the
    /// document is already in, and again when the DOM-ready signal fires.
    pub fn observe_ready(&mut self, ctx: &dyn PageContext, phase: DocumentPhase) {
        self.sanitizer.observe_ready(&self.config, ctx, phase);
    }

    /// Forward visibility changes (log-only hook on category pages).
    pub fn observe_visibility(&self, ctx: &dyn PageContext, visibility: Visibility) {
        self.sanitizer.observe_visibility(&self.config, ctx, visibility);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intercept::Anchor;
    use crate::page::fake::FakePage;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeOpener {
        calls: RefCell<Vec<String>>,
    }

    impl WindowOpener for Rc<FakeOpener> {
        fn open_window(&self, url: &str, _target: &str, _features: &str) {
            self.calls.borrow_mut().push(url.to_string());
        }
    }

    fn guard(opener: &Rc<FakeOpener>) -> NavigationGuard {
        NavigationGuard::new(
            NavlockConfig {
                debug: false,
                ..NavlockConfig::default()
            },
            Box::new(Rc::clone(opener)),
        )
    }

    #[test]
    fn page_lifecycle_strips_category_fragment_once() {
        let opener = Rc::new(FakeOpener::default());
        let page = FakePage::at("https://app.test/category/42#scene3");
        let mut guard = guard(&opener);

        // Document still loading at install time: nothing happens yet.
        guard.observe_ready(&page, DocumentPhase::Loading);
        assert_eq!(page.displayed_url(), "https://app.test/category/42#scene3");

        // DOM-ready fires; the fragment goes away without a navigation.
        guard.observe_ready(&page, DocumentPhase::Interactive);
        assert_eq!(page.displayed_url(), "https://app.test/category/42");
        assert!(page.location_replacements.borrow().is_empty());

        // A later readiness signal must not re-trigger anything.
        guard.observe_ready(&page, DocumentPhase::Complete);
        assert_eq!(page.history_replacements.borrow().len(), 1);
    }

    #[test]
    fn click_and_open_share_the_whitelist() {
        let opener = Rc::new(FakeOpener::default());
        let page = FakePage::at("https://app.test/home");
        let guard = guard(&opener);

        let event = ClickEvent {
            anchor: Some(Anchor {
                href: "https://google.com/x".to_string(),
                target: "_blank".to_string(),
            }),
            base_target_blank: false,
        };
        assert_eq!(guard.handle_click(&page, &event), Decision::Allow);

        assert_eq!(
            guard.handle_open(&page, "https://google.com/x", "", ""),
            Decision::Allow
        );
        assert_eq!(opener.calls.borrow().len(), 1);

        let decision = guard.handle_open(&page, "https://evil.test/z", "", "");
        assert_eq!(
            decision,
            Decision::Redirect("https://evil.test/z".to_string())
        );
        // Original primitive untouched by the intercepted call.
        assert_eq!(opener.calls.borrow().len(), 1);
        assert_eq!(page.displayed_url(), "https://evil.test/z");
    }

    #[test]
    fn page_origin_reports_the_embedding_origin() {
        let opener = Rc::new(FakeOpener::default());
        let page = FakePage::at("https://app.test:8443/home");
        let guard = guard(&opener);

        let origin = guard.page_origin(&page).unwrap();
        assert_eq!(origin.to_string(), "https://app.test:8443");
    }
}
