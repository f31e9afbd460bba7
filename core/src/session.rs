//! Replay session driver
//!
//! Per-entity tick driver tying the ring buffer to the host ports. One
//! [`tick`](ReplaySession::tick) per fixed simulation step: read the mode
//! switch, apply transition side effects, then record the live pose or
//! rewind one keyframe.

use crate::buffer::{Mode, ReplayBuffer};
use crate::config::{ConfigError, ReplayConfig};
use crate::events::{ReplayEvent, SessionStats};
use crate::host::{ModeController, TransformSource};

/// Drives one entity's replay buffer from the host's tick loop
///
/// The session owns the buffer and the transition bookkeeping; the host
/// owns the transform and the mode switch. Entities are independent, so a
/// multi-entity host runs one session per controlled entity.
pub struct ReplaySession {
    buffer: ReplayBuffer,
    /// Mode applied on the previous tick (None before the first tick)
    mode: Option<Mode>,
    /// Whether the current exhaustion episode was already reported
    exhausted: bool,
    events: Vec<ReplayEvent>,
    stats: SessionStats,
}

impl ReplaySession {
    /// Create a session from a validated config
    pub fn new(config: &ReplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buffer: ReplayBuffer::new(config.capacity)?,
            mode: None,
            exhausted: false,
            events: Vec::new(),
            stats: SessionStats::default(),
        })
    }

    /// Create a session with the default capacity
    pub fn with_defaults() -> Self {
        Self {
            buffer: ReplayBuffer::with_defaults(),
            mode: None,
            exhausted: false,
            events: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    /// Advance the session by one simulation tick
    ///
    /// Called exactly once per fixed step. A mode transition (including the
    /// first tick) toggles the transform's kinematic flag before the tick
    /// path runs: kinematic while rewinding, physics-driven while
    /// recording. Switching back to record mid-rewind makes the rewound-to
    /// point the new present; the consumed future is overwritten as
    /// recording moves forward again.
    pub fn tick<T, M>(&mut self, transform: &mut T, controller: &M)
    where
        T: TransformSource + ?Sized,
        M: ModeController + ?Sized,
    {
        let mode = controller.mode();
        if self.mode != Some(mode) {
            transform.set_kinematic(mode == Mode::Playback);
            self.events.push(ReplayEvent::ModeChanged { mode });
            log::debug!("replay mode changed to {:?}", mode);
            self.mode = Some(mode);
        }

        self.stats.ticks += 1;
        match mode {
            Mode::Record => {
                self.buffer.record(transform.sample());
                self.stats.frames_recorded += 1;
                self.exhausted = false;
            }
            Mode::Playback => match self.buffer.rewind() {
                Some(frame) => {
                    transform.apply_pose(frame.position, frame.orientation);
                    self.stats.frames_played += 1;
                    self.exhausted = false;
                }
                None => {
                    // Nothing left to rewind to; the transform keeps its pose.
                    self.stats.underruns += 1;
                    if !self.exhausted {
                        self.events.push(ReplayEvent::HistoryExhausted);
                        log::debug!("replay history exhausted");
                        self.exhausted = true;
                    }
                }
            },
        }
    }

    /// The underlying ring buffer
    pub fn buffer(&self) -> &ReplayBuffer {
        &self.buffer
    }

    /// Mode applied on the most recent tick, if any
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Running session counters
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Drain accumulated events
    pub fn take_events(&mut self) -> Vec<ReplayEvent> {
        std::mem::take(&mut self.events)
    }
}
