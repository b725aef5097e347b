//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Feature pages are static placeholders; only `login`
//! carries logic.

pub mod attendance;
pub mod dashboard;
pub mod evaluations;
pub mod login;
pub mod payroll;
pub mod schedules;
