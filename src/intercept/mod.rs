//! Event interception: capture-phase click handling and `window.open`
//! wrapping.
//!
//! Both paths reduce the host event to a navigation intent and share the
//! decision rules in [`crate::policy`], so a link click and an open call to
//! the same URL always agree.

mod click;
mod open;

pub use click::{Anchor, ClickEvent, ClickInterceptor};
pub use open::{OpenInterceptor, WindowOpener};
