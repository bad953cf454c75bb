use util::{Rect, Vector2};

/// Anything that moves through a room and should not pass through its terrain.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Actor {
    /// Top-left corner.
    pub position: Vector2,
    pub size: Vector2,
    pub velocity: Vector2,
    /// Set when the last step clamped the actor against a surface.
    pub grounded: bool,
}

impl Actor {
    pub fn new(position: Vector2, size: Vector2) -> Self {
        Self {
            position,
            size,
            velocity: Vector2::zeros(),
            grounded: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_position_size(self.position, self.size)
    }
}
