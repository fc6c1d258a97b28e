//! Kinematic bodies: a rectangle with velocity and contact flags
//!
//! Units are pixels and frames. `velocity.x` carries only the horizontal
//! direction (-1, 0 or 1); its magnitude lives in `speed`, which the camera
//! zeroes while it scrolls the world instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Horizontal intent for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heading {
    Left,
    #[default]
    Idle,
    Right,
}

impl Heading {
    pub fn as_f32(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Idle => 0.0,
            Heading::Right => 1.0,
        }
    }
}

/// A body moved by gravity, input and tile collisions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub rect: Rect,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub on_ceiling: bool,
    pub on_left: bool,
    pub on_right: bool,
    /// Horizontal speed applied to `velocity.x`
    pub speed: f32,
}

impl KinematicBody {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self {
            rect,
            velocity: Vec2::ZERO,
            on_ground: false,
            on_ceiling: false,
            on_left: false,
            on_right: false,
            speed,
        }
    }

    /// Integrate one frame of gravity. Fall speed is not capped.
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity.y += gravity;
        self.rect.y += self.velocity.y;
    }

    /// Overwrite vertical velocity with `jump_speed`.
    ///
    /// Callers must check `on_ground` first; see [`Self::try_jump`].
    pub fn jump(&mut self, jump_speed: f32) {
        self.velocity.y = jump_speed;
        self.on_ground = false;
    }

    /// Jump only when standing on something. Returns whether it jumped.
    pub fn try_jump(&mut self, jump_speed: f32) -> bool {
        if !self.on_ground {
            return false;
        }
        self.jump(jump_speed);
        true
    }

    pub fn set_horizontal_direction(&mut self, heading: Heading) {
        self.velocity.x = heading.as_f32();
    }

    pub fn is_falling(&self) -> bool {
        self.velocity.y > 0.0
    }
}
