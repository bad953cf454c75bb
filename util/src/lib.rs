pub use nalgebra::Vector2 as Vector;

pub type Number = f32;

/// World-space vector. `x` grows to the right and `y` grows downwards.
pub type Vector2 = Vector<Number>;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect {
    pub fn new(x: Number, y: Number, width: Number, height: Number) -> Self {
        Self {
            position: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    pub fn from_position_size(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    pub fn left(&self) -> Number {
        self.position.x
    }

    pub fn right(&self) -> Number {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> Number {
        self.position.y
    }

    pub fn bottom(&self) -> Number {
        self.position.y + self.size.y
    }

    pub fn width(&self) -> Number {
        self.size.x
    }

    pub fn height(&self) -> Number {
        self.size.y
    }

    /// Horizontal midpoint, the probe column used for surface lookups.
    pub fn center_x(&self) -> Number {
        self.position.x + self.size.x / 2.
    }
}
