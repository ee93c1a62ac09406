//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the session signal and its context; `session` holds the pure
//! transitions that context applies.

pub mod auth;
pub mod session;
