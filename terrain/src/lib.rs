//! Terrain height-fields for side-scrolling rooms.
//!
//! A [`Terrain`] is a strip of linear [`TerrainSegment`]s sharing one
//! [`TerrainTemplate`]. It answers where its surface is at a given `x` and
//! clamps actors so they stay on the open side of it.

mod dock;
mod error;
mod position;
mod segment;
mod template;
mod terrain;

pub use dock::RoomBounds;
pub use error::TerrainError;
pub use position::TerrainPosition;
pub use segment::TerrainSegment;
pub use template::{TerrainTemplate, TerrainTemplateDescriptor};
pub use terrain::Terrain;
