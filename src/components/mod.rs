//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and the route guard while reading/writing
//! shared state from Leptos context providers.

pub mod require_session;
pub mod side_nav;
pub mod top_bar;
