//! Rewindcore Core - Transform rewind framework
//!
//! This crate provides the self-contained history machinery for a
//! rewind/replay mechanic: a fixed-capacity ring of pose keyframes recorded
//! once per simulation tick and consumed newest-first while rewinding.
//! The host engine stays behind small ports, so the core has no engine
//! dependencies and runs in plain unit tests.
//!
//! # Architecture
//!
//! - [`ReplayBuffer`] - Fixed-capacity ring of pose keyframes with record and rewind steps
//! - [`ReplaySession`] - Per-entity tick driver coordinating modes, side effects, and events
//! - [`TransformSource`] / [`ModeController`] - Traits implemented by the host engine
//! - [`ReplayConfig`] - Capacity settings with TOML support

pub mod buffer;
pub mod config;
pub mod events;
pub mod host;
pub mod keyframe;
pub mod session;
#[cfg(test)]
pub mod test_utils;

// Re-export core types
pub use buffer::{Mode, ReplayBuffer};
pub use config::{ConfigError, DEFAULT_CAPACITY, ReplayConfig};
pub use events::{ReplayEvent, SessionStats};
pub use host::{ModeController, TransformSource};
pub use keyframe::Keyframe;
pub use session::ReplaySession;
