//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and REST calls and delegates rendering
//! details to `components`. Validation and message mapping live in plain
//! functions next to each page so they are testable without a browser.
//!
//! Pages that write state after an `await` check a mounted flag first; the
//! flag is cleared in `on_cleanup` when the route unmounts.

pub mod create_user;
pub mod dashboard;
pub mod forgot_login;
pub mod home;
pub mod login;
pub mod profile;
pub mod update_user;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

/// Pause between a success banner and the follow-up redirect.
#[cfg(feature = "hydrate")]
pub(crate) const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_secs(5);

/// A flag that stays `true` until the current reactive owner is cleaned up.
#[cfg(feature = "hydrate")]
pub(crate) fn mounted_flag() -> Arc<AtomicBool> {
    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    leptos::prelude::on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));
    alive
}

#[cfg(feature = "hydrate")]
pub(crate) fn is_mounted(alive: &AtomicBool) -> bool {
    alive.load(Ordering::Relaxed)
}
