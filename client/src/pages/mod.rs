//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome
//! and the route guard to `components`.

pub mod about;
pub mod contact;
pub mod explore;
pub mod home;
pub mod legal;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod services;
pub mod signup;
