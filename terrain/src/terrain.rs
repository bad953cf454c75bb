use std::rc::Rc;

use tracing::debug;
use util::{Number, Rect, Vector2};

use crate::{RoomBounds, TerrainError, TerrainPosition, TerrainSegment, TerrainTemplate};

/// A placed ground or ceiling surface.
///
/// The profile is a run of [`TerrainSegment`]s laid left to right from
/// `left()`, each exactly one template segment length wide. Only the world
/// position changes after construction.
#[derive(Clone, Debug)]
pub struct Terrain {
    template: Rc<TerrainTemplate>,
    segments: Box<[TerrainSegment]>,
    position: Vector2,
}

impl Terrain {
    pub fn new<S>(
        template: Rc<TerrainTemplate>,
        segments: impl IntoIterator<Item = S>,
    ) -> Result<Self, TerrainError>
    where
        S: Into<TerrainSegment>,
    {
        let segments: Box<[TerrainSegment]> = segments.into_iter().map(Into::into).collect();

        if segments.is_empty() && template.terrain_position().is_active() {
            return Err(TerrainError::NoSegments);
        }

        Ok(Self {
            template,
            segments,
            position: Vector2::zeros(),
        })
    }

    pub fn template(&self) -> &Rc<TerrainTemplate> {
        &self.template
    }

    pub fn object_type_path(&self) -> &str {
        self.template.object_type_path()
    }

    pub fn terrain_position(&self) -> TerrainPosition {
        self.template.terrain_position()
    }

    pub fn segment_length(&self) -> i32 {
        self.template.segment_length()
    }

    pub fn friction(&self) -> Number {
        self.template.friction()
    }

    pub fn segments(&self) -> &[TerrainSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn left(&self) -> Number {
        self.position.x
    }

    pub fn top(&self) -> Number {
        self.position.y
    }

    pub fn right(&self) -> Number {
        self.left() + self.width()
    }

    pub fn bottom(&self) -> Number {
        self.top() + self.height()
    }

    pub fn width(&self) -> Number {
        (self.segment_length() as Number) * (self.segments.len() as Number)
    }

    /// Tallest point of the profile, never negative.
    pub fn height(&self) -> Number {
        self.segments
            .iter()
            .map(TerrainSegment::peak_height)
            .max()
            .unwrap_or(0)
            .max(0) as Number
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.width(), self.height())
    }

    /// Anchors the terrain against the matching edge of its room.
    pub fn dock(&mut self, room: &impl RoomBounds) {
        let position = match self.terrain_position() {
            TerrainPosition::None => return,
            TerrainPosition::Top => Vector2::new(room.left(), room.top()),
            TerrainPosition::Bottom => Vector2::new(room.left(), room.bottom() - self.height()),
        };

        debug!(
            path = self.object_type_path(),
            terrain_position = %self.terrain_position(),
            x = position.x,
            y = position.y,
            "docked terrain"
        );

        self.position = position;
    }

    /// Truncates toward zero and does not clamp, so the result may be out of range.
    pub fn segment_index(&self, x: Number) -> i32 {
        if !self.terrain_position().is_active() {
            return 0;
        }

        ((x - self.left()) / self.segment_length() as Number) as i32
    }

    pub fn segment(&self, index: i32) -> Option<&TerrainSegment> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.segments.get(index))
    }

    /// Surface height at `x`, measured from the terrain's reference edge.
    /// Each segment ramps on its own, neighbours are not blended.
    pub(crate) fn terrain_height(&self, x: Number) -> Result<Number, TerrainError> {
        let out_of_bounds = || TerrainError::OutOfBounds {
            x,
            left: self.left(),
            right: self.right(),
        };

        if !(self.left()..self.right()).contains(&x) {
            return Err(out_of_bounds());
        }

        let segment_index = self.segment_index(x);
        let segment = self.segment(segment_index).ok_or_else(out_of_bounds)?;

        let segment_length = self.segment_length() as Number;
        let partial_length = (x - self.left()) - segment_index as Number * segment_length;
        let partial_percent = partial_length / segment_length;

        Ok(segment.start_height() as Number + partial_percent * segment.increment_size() as Number)
    }

    /// Clamps an actor's top-left `position` so a box of `size` stays on the open
    /// side of the surface, probing at the box's horizontal midpoint.
    ///
    /// Returns whether a clamp happened. A probe outside the terrain's span is
    /// an [`TerrainError::OutOfBounds`] error rather than "not constrained".
    pub fn constrain(&self, size: Vector2, position: &mut Vector2) -> Result<bool, TerrainError> {
        let mid_x = Rect::from_position_size(*position, size).center_x();

        match self.terrain_position() {
            TerrainPosition::None => Ok(false),
            TerrainPosition::Top => {
                let constraint = self.terrain_height(mid_x)?;
                if position.y < constraint {
                    position.y = constraint;
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            TerrainPosition::Bottom => {
                let constraint = self.bottom() - self.terrain_height(mid_x)?;
                if position.y + size.y > constraint {
                    position.y = constraint - size.y;
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
        }
    }
}
