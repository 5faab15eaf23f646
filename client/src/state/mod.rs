//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `ui`) so individual
//! components can depend on small focused models. `auth` is pure;
//! `auth_controller` and `session` own the storage and network effects.

pub mod auth;
pub mod auth_controller;
pub mod session;
pub mod ui;
