//! Overworld pieces that sit around the terminal: the player controller and
//! the dungeon entrance prompt. Collision is not modelled here; callers pass
//! in whatever walkability test their map provides.

pub mod entrance;
pub mod player;

pub use entrance::{DungeonEntrance, EntranceSignal};
pub use player::{Facing, MotionState, PlayerController, PlayerFrame};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance(self, other: Vec2) -> f32 {
        Vec2::new(self.x - other.x, self.y - other.y)
            .length_squared()
            .sqrt()
    }

    /// Unit vector in the same direction, or zero for a zero input.
    pub fn normalized(self) -> Vec2 {
        let len = self.length_squared().sqrt();
        if len <= f32::EPSILON {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / len, self.y / len)
    }

    pub fn scaled(self, factor: f32) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    pub fn offset(self, by: Vec2) -> Vec2 {
        Vec2::new(self.x + by.x, self.y + by.y)
    }
}
