use terrain::{RoomBounds, Terrain, TerrainPosition};
use tracing::{trace, warn};
use util::{Number, Rect, Vector2};

use crate::{Actor, LevelError};

/// A rectangular area of a level with at most one floor-like and one
/// ceiling-like terrain.
#[derive(Debug)]
pub struct Room {
    name: String,
    bounds: Rect,
    top: Option<Terrain>,
    bottom: Option<Terrain>,
}

impl Room {
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
            top: None,
            bottom: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn terrain(&self, position: TerrainPosition) -> Option<&Terrain> {
        match position {
            TerrainPosition::None => None,
            TerrainPosition::Top => self.top.as_ref(),
            TerrainPosition::Bottom => self.bottom.as_ref(),
        }
    }

    pub fn terrains(&self) -> impl Iterator<Item = &Terrain> {
        self.bottom.iter().chain(self.top.iter())
    }

    /// Takes ownership of `terrain` and docks it against this room.
    pub fn set_terrain(&mut self, mut terrain: Terrain) -> Result<(), LevelError> {
        let position = terrain.terrain_position();
        let slot = match position {
            TerrainPosition::None => {
                warn!(
                    room = %self.name,
                    path = terrain.object_type_path(),
                    "rejected terrain without a surface"
                );
                return Err(LevelError::InactiveTerrain);
            }
            TerrainPosition::Top => &mut self.top,
            TerrainPosition::Bottom => &mut self.bottom,
        };

        if slot.is_some() {
            return Err(LevelError::SlotOccupied {
                room: self.name.clone(),
                position,
            });
        }

        terrain.dock(&self.bounds);
        *slot = Some(terrain);
        Ok(())
    }

    /// Keeps a box of `size` at `position` on the open side of every terrain in
    /// the room. Probes past a terrain's edge count as unconstrained.
    pub fn constrain_actor(&self, size: Vector2, position: &mut Vector2) -> bool {
        let landed = self.settle(self.bottom.as_ref(), size, position);
        let bumped = self.settle(self.top.as_ref(), size, position);

        landed || bumped
    }

    /// One movement tick: integrate velocity, then settle against terrain.
    /// Only the floor grounds an actor, the ceiling just stops it rising.
    pub fn step(&self, actors: &mut [Actor], dt: Number) {
        for actor in actors {
            actor.position += actor.velocity * dt;

            actor.grounded = self.settle(self.bottom.as_ref(), actor.size, &mut actor.position);
            let bumped = self.settle(self.top.as_ref(), actor.size, &mut actor.position);

            if actor.grounded || bumped {
                actor.velocity.y = 0.;
            }
        }
    }

    fn settle(&self, terrain: Option<&Terrain>, size: Vector2, position: &mut Vector2) -> bool {
        let Some(terrain) = terrain else {
            return false;
        };

        match terrain.constrain(size, position) {
            Ok(clamped) => clamped,
            Err(err) => {
                trace!(room = %self.name, %err, "terrain probe skipped");
                false
            }
        }
    }
}

impl RoomBounds for Room {
    fn position(&self) -> Vector2 {
        self.bounds.position
    }

    fn bottom(&self) -> Number {
        self.bounds.bottom()
    }
}
