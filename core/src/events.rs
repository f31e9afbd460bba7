//! Replay session events and statistics
//!
//! High-level events for the application layer plus running counters for
//! debug display.

use crate::buffer::Mode;

/// High-level session events for the application layer
///
/// Accumulated by the session and drained with
/// [`ReplaySession::take_events`](crate::session::ReplaySession::take_events),
/// so the host can react (UI cues, audio, haptics) without the core calling
/// back into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayEvent {
    /// The session switched between recording and playback
    ModeChanged {
        /// Mode that was just entered
        mode: Mode,
    },
    /// Playback consumed the last resident keyframe
    ///
    /// Emitted once per exhaustion episode; re-armed by the next recorded
    /// or played frame. Further playback ticks leave the transform as-is.
    HistoryExhausted,
}

/// Running counters for a replay session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Total ticks processed
    pub ticks: u64,
    /// Keyframes written while recording
    pub frames_recorded: u64,
    /// Keyframes applied while rewinding
    pub frames_played: u64,
    /// Playback ticks that found no history
    pub underruns: u64,
}
