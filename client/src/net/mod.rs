//! Networking modules for the account backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
