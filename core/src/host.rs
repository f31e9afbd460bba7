//! Host engine ports
//!
//! The replay core never talks to an engine directly. Each host implements
//! these traits to expose the controlled entity's transform and the
//! record/playback switch, keeping the core engine-independent and
//! testable in isolation.

use glam::{Quat, Vec3};

use crate::buffer::Mode;
use crate::keyframe::Keyframe;

/// Access to the live transform of a controlled entity
///
/// Pose reads happen while recording; [`apply_pose`](Self::apply_pose) and
/// [`set_kinematic`](Self::set_kinematic) are driven by playback and by
/// mode transitions.
pub trait TransformSource {
    /// Current simulation time in seconds
    fn current_time(&self) -> f32;

    /// Current world-space position
    fn current_position(&self) -> Vec3;

    /// Current world-space orientation
    fn current_orientation(&self) -> Quat;

    /// Write a rewound pose back to the transform
    fn apply_pose(&mut self, position: Vec3, orientation: Quat);

    /// Switch the physics body in or out of kinematic mode
    ///
    /// `true` entering playback (poses are written directly, physics must
    /// not fight them), `false` entering record (physics drives the
    /// entity again).
    fn set_kinematic(&mut self, kinematic: bool);

    /// Bundle the current pose into a keyframe
    fn sample(&self) -> Keyframe {
        Keyframe::new(
            self.current_time(),
            self.current_position(),
            self.current_orientation(),
        )
    }
}

/// Source of the record/playback switch
///
/// A typical control scheme maps a held rewind button to playback and
/// everything else to recording; any boolean signal works.
pub trait ModeController {
    /// Whether the session should record this tick
    fn is_recording(&self) -> bool;

    /// Map the flag to the tick mode
    fn mode(&self) -> Mode {
        if self.is_recording() {
            Mode::Record
        } else {
            Mode::Playback
        }
    }
}

// Fixed-mode controller, for tools and tests
impl ModeController for Mode {
    fn is_recording(&self) -> bool {
        matches!(self, Mode::Record)
    }
}
