//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render wallet chrome while reading shared state from Leptos
//! context providers; pages own the fetch orchestration that fills it.

pub mod balance_card;
pub mod status_cards;
pub mod token_list;
pub mod transaction_row;
