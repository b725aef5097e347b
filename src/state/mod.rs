//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`) so individual components can
//! depend on small focused models.

pub mod session;
pub mod ui;
