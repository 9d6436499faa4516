//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod bot_verifier;
pub mod content_store;
pub mod form_relay;
