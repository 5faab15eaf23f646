//! Networking modules for the credential service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the records shared with
//! the server and with browser storage.

pub mod api;
pub mod types;
