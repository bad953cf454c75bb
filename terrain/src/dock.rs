use util::{Number, Rect, Vector2};

/// The edges of a containing room that a terrain docks against.
pub trait RoomBounds {
    fn position(&self) -> Vector2;

    fn left(&self) -> Number {
        self.position().x
    }

    fn top(&self) -> Number {
        self.position().y
    }

    fn bottom(&self) -> Number;
}

impl RoomBounds for Rect {
    fn position(&self) -> Vector2 {
        self.position
    }

    fn left(&self) -> Number {
        Rect::left(self)
    }

    fn top(&self) -> Number {
        Rect::top(self)
    }

    fn bottom(&self) -> Number {
        Rect::bottom(self)
    }
}
