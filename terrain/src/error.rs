use thiserror::Error;
use util::Number;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("segment length must be positive, got {0}")]
    InvalidSegmentLength(i32),

    #[error("terrain with an active surface needs at least one segment")]
    NoSegments,

    /// Recoverable: movement code regularly probes just past a terrain edge.
    #[error("position {x} out of terrain bounds [{left}, {right})")]
    OutOfBounds {
        x: Number,
        left: Number,
        right: Number,
    },

    #[error("segment {index} uses increment {increment}, which is not in the allowed set")]
    DisallowedIncrement { index: usize, increment: i32 },
}
