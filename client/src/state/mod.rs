//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the persisted login record; `auth` is the reactive view of it
//! that components read through context.

pub mod auth;
pub mod session;
