pub mod classify;
pub mod config;
pub mod guard;
pub mod hash_cleanup;
pub mod intercept;
pub mod logging;
pub mod page;
pub mod policy;
