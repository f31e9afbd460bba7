//! Pose keyframe
//!
//! The value record stored in the replay buffer: a timestamped transform
//! sample. Plain `Copy` data; buffer slots are overwritten in place while
//! recording, never boxed or shared.

use glam::{Quat, Vec3};

/// A timestamped pose sample
///
/// `Default` is the zero keyframe (time zero, origin, identity
/// orientation), which is what freshly allocated buffer slots hold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keyframe {
    /// Simulation time the sample was taken at, in seconds
    pub time: f32,
    /// World-space position
    pub position: Vec3,
    /// World-space orientation
    pub orientation: Quat,
}

impl Keyframe {
    /// Create a keyframe from a sampled pose
    pub fn new(time: f32, position: Vec3, orientation: Quat) -> Self {
        Self {
            time,
            position,
            orientation,
        }
    }
}
