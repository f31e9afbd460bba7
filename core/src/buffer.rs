//! Replay ring buffer
//!
//! Fixed-capacity circular history of pose keyframes. Recording slides a
//! window of the most recent samples forward; rewinding consumes the window
//! newest-first. All storage is allocated once at construction, so the
//! per-tick paths never allocate and cost the same regardless of how much
//! history is resident.

use crate::config::{ConfigError, DEFAULT_CAPACITY};
use crate::keyframe::Keyframe;

/// Per-tick operation selector
///
/// Supplied by the caller each tick, typically mapped from a
/// [`ModeController`](crate::host::ModeController); the buffer itself holds
/// no mode state and no notion of "paused".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Append the current live pose to history
    Record,
    /// Pop the most recent unconsumed history entry
    Playback,
}

/// Fixed-capacity ring of pose keyframes
///
/// `head` is the most-recently-written slot and `count` the number of valid,
/// not-yet-consumed keyframes. Writing while full overwrites the oldest
/// sample, so the buffer is a sliding window of the last `capacity` ticks.
/// Rewinding consumes the window from `head` backwards.
#[derive(Debug, Clone)]
pub struct ReplayBuffer {
    /// Slot storage, fixed length, never reallocated
    slots: Vec<Keyframe>,
    /// Index of the most-recently-written slot
    head: usize,
    /// Number of valid, not-yet-consumed keyframes
    count: usize,
}

impl ReplayBuffer {
    /// Create a buffer holding up to `capacity` keyframes
    ///
    /// All slots are pre-filled with zero keyframes up front.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            slots: vec![Keyframe::default(); capacity],
            head: 0,
            count: 0,
        })
    }

    /// Create a buffer with the default capacity
    pub fn with_defaults() -> Self {
        // DEFAULT_CAPACITY is non-zero, so construction cannot fail.
        Self::new(DEFAULT_CAPACITY).expect("default capacity is non-zero")
    }

    /// Maximum number of keyframes the buffer can hold
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of keyframes currently resident
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no history is resident
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the sliding window is at capacity
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Peek at the newest resident keyframe without consuming it
    pub fn latest(&self) -> Option<&Keyframe> {
        (self.count > 0).then(|| &self.slots[self.head])
    }

    /// Drop all history and return to the freshly-constructed state
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }

    /// Store one keyframe, called once per tick while recording
    ///
    /// The very first record of the buffer's life, and the first record
    /// after playback fully drained the buffer, write into the current
    /// `head` slot without advancing; recording resumes in place. Once the
    /// window is full the oldest sample is silently overwritten.
    pub fn record(&mut self, frame: Keyframe) {
        if self.count > 0 {
            self.head = (self.head + 1) % self.slots.len();
        }
        if self.count < self.slots.len() {
            self.count += 1;
        }
        self.slots[self.head] = frame;
    }

    /// Consume the newest resident keyframe, called once per tick while
    /// rewinding
    ///
    /// Successive calls yield keyframes in strict reverse chronological
    /// order, each exactly once, and `None` once the buffer is exhausted.
    /// An empty buffer is left untouched, so the caller's transform keeps
    /// its last pose. After a full drain `head` stays put and the next
    /// [`record`](Self::record) resumes at that same slot, which discards
    /// any already-consumed future for good (no redo after rewinding).
    pub fn rewind(&mut self) -> Option<Keyframe> {
        if self.count == 0 {
            return None;
        }
        let frame = self.slots[self.head];
        self.count -= 1;
        if self.head > 0 {
            self.head -= 1;
        } else if self.count > 0 {
            self.head = self.slots.len() - 1;
        }
        Some(frame)
    }

    /// Advance the buffer by one simulation tick
    ///
    /// Single entry point dispatching on the caller-supplied mode:
    /// [`Mode::Record`] stores `live` and returns `None`;
    /// [`Mode::Playback`] ignores `live` and returns the next keyframe of
    /// history, newest first.
    pub fn step(&mut self, mode: Mode, live: Keyframe) -> Option<Keyframe> {
        match mode {
            Mode::Record => {
                self.record(live);
                None
            }
            Mode::Playback => self.rewind(),
        }
    }
}
