//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from the `AuthContext` provider and gate or
//! decorate the page subtrees they wrap.

pub mod auth_guard;
pub mod loading;
pub mod premium_gate;
