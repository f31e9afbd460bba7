//! Shared test utilities for integration and unit tests

use glam::{Quat, Vec3};

use crate::host::{ModeController, TransformSource};
use crate::keyframe::Keyframe;

/// Test transform that records every interaction the session makes
#[derive(Debug, Default)]
pub struct TestTransform {
    pub time: f32,
    pub position: Vec3,
    pub orientation: Quat,
    /// Kinematic flag values in the order they were set
    pub kinematic_log: Vec<bool>,
    /// Poses applied during playback, in order
    pub applied: Vec<(Vec3, Quat)>,
}

impl TestTransform {
    /// Move the mock entity to a distinct pose for tick `i`
    pub fn advance(&mut self, i: u32) {
        self.time = i as f32 / 60.0;
        self.position = Vec3::new(i as f32, i as f32 * 0.5, -(i as f32));
        self.orientation = Quat::from_rotation_y(i as f32 * 0.05);
    }

    /// Most recent kinematic flag value, if any was set
    pub fn kinematic(&self) -> Option<bool> {
        self.kinematic_log.last().copied()
    }
}

impl TransformSource for TestTransform {
    fn current_time(&self) -> f32 {
        self.time
    }

    fn current_position(&self) -> Vec3 {
        self.position
    }

    fn current_orientation(&self) -> Quat {
        self.orientation
    }

    fn apply_pose(&mut self, position: Vec3, orientation: Quat) {
        self.position = position;
        self.orientation = orientation;
        self.applied.push((position, orientation));
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic_log.push(kinematic);
    }
}

/// Mode switch flipped by the test, like the host's fire button
#[derive(Debug, Clone, Default)]
pub struct TestSwitch {
    pub recording: bool,
}

impl ModeController for TestSwitch {
    fn is_recording(&self) -> bool {
        self.recording
    }
}

/// Distinct keyframe for index `i`
pub fn frame(i: u32) -> Keyframe {
    Keyframe::new(
        i as f32 * 0.016,
        Vec3::new(i as f32, 0.0, -(i as f32)),
        Quat::from_rotation_y(i as f32 * 0.1),
    )
}
