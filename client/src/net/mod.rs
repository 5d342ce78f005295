//! Networking modules for the external BlueMint REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` knows where each service lives and how its paths are shaped,
//! `api` performs the actual HTTP calls. Wire DTOs live in the shared `wire`
//! crate so the CLI speaks the exact same schema.

pub mod api;
pub mod endpoints;
