use terrain::{TerrainError, TerrainPosition};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("terrain error: {0}")]
    Terrain(#[from] TerrainError),

    #[error("no terrain template named {0:?}")]
    UnknownTemplate(String),

    #[error("terrain template {0:?} is already registered")]
    DuplicateTemplate(String),

    #[error("room {room:?} already has a {position} terrain")]
    SlotOccupied {
        room: String,
        position: TerrainPosition,
    },

    #[error("terrain without an active surface cannot be placed in a room")]
    InactiveTerrain,
}
