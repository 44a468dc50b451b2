//! Higher-level helpers over the raw event constructors.
//!
//! `EventFactory` fills in configured defaults, `SessionTracker` rejects
//! out-of-order events, and the remaining modules shape tool results, audio
//! chunks and seed history. The raw constructors stay reachable through
//! `crate::protocol` when you need full control.

mod audio;
mod factory;
mod history;
mod session;
mod tools;

pub use audio::{AudioChunker, DEFAULT_CHUNK_BYTES};
pub use factory::EventFactory;
pub use history::history_events;
pub use session::{SessionTracker, Stage};
pub use tools::{ToolRegistry, ToolResult};
