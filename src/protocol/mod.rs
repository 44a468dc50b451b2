//! Wire-level protocol types.
//!
//! `client_events` holds the event envelope and its constructors; `models`
//! holds the configuration blocks events carry.

pub mod client_events;
pub mod models;
