//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `chat`, `history`) so
//! individual components can depend on small focused models. Each model is a
//! plain struct with pure transitions; components wrap them in signals.

pub mod auth;
pub mod chat;
pub mod history;
pub mod session;
