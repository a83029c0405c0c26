use glam::{Mat4, Vec3};

use crate::config::MotionConfig;

/// Where the airship is and which way its nose points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec3,
    /// Heading about the up axis, in degrees. Not wrapped.
    pub heading: f32,
}

impl Pose {
    /// Direction the airship travels for a forward command at the current heading.
    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        Vec3::new(cos, 0.0, -sin)
    }

    /// Places the whole model in the world.
    ///
    /// The heading rotation is sandwiched between two half-body-length
    /// offsets, so the airship turns about the middle of its body rather
    /// than about the nose at the local origin.
    pub fn root_transform(&self, body_length: f32) -> Mat4 {
        let half_length = Vec3::new(-0.5 * body_length, 0.0, 0.0);

        Mat4::from_translation(self.position)
            * Mat4::from_translation(half_length)
            * Mat4::from_rotation_y(self.heading.to_radians())
            * Mat4::from_translation(half_length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    spin_degrees: f32,
}

impl AnimationState {
    /// Propeller spin angle in `[0, 360)`.
    pub fn spin_degrees(&self) -> f32 {
        self.spin_degrees
    }

    pub fn advance_spin(&mut self, degrees: f32) {
        self.spin_degrees = (self.spin_degrees + degrees).rem_euclid(360.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward,
    TurnLeft,
    TurnRight,
    Ascend,
    Descend,
}

/// Everything input handlers mutate and the frame reads.
#[derive(Debug, Clone)]
pub struct WorldState {
    pub pose: Pose,
    pub animation: AnimationState,
    motion: MotionConfig,
}

impl WorldState {
    pub fn new(motion: MotionConfig) -> Self {
        Self {
            pose: Pose::default(),
            animation: AnimationState::default(),
            motion,
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Forward => {
                let forward = self.pose.forward();
                self.pose.position -= self.motion.forward_step * forward;
                self.animation.advance_spin(self.motion.spin_step);
            }
            Command::TurnLeft => self.pose.heading += self.motion.turn_step,
            Command::TurnRight => self.pose.heading -= self.motion.turn_step,
            Command::Ascend => self.pose.position.y += self.motion.climb_step,
            Command::Descend => self.pose.position.y -= self.motion.climb_step,
        }

        log::debug!(
            "{:?}: position {:?}, heading {}, spin {}",
            command,
            self.pose.position,
            self.pose.heading,
            self.animation.spin_degrees()
        );
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
