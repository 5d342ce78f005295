//! Application state modules provided as Leptos contexts.
//!
//! DESIGN
//! ======
//! One plain struct per screen concern, held in an `RwSignal` by the root
//! component. There is no store layer: every field is view state refreshed
//! from the external services, discarded on navigation or reload.

pub mod auth;
pub mod merchant;
pub mod transactions;
pub mod wallet;
