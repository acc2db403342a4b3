//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome, banners, the user table and route guards,
//! reading shared auth state from Leptos context where needed.

pub mod error_message;
pub mod input_field;
pub mod protected_route;
pub mod user_table;
