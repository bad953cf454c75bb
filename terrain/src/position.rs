use std::{convert::Infallible, fmt, str::FromStr};

use serde::Deserialize;

/// Which edge of the terrain its height profile is measured from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Deserialize)]
#[serde(from = "String")]
pub enum TerrainPosition {
    /// No active surface. Segment lookups are degenerate and nothing is constrained.
    #[default]
    None,
    Top,
    Bottom,
}

impl TerrainPosition {
    /// Content files name the position by string. Unknown names map to `None`.
    pub fn from_content_str(name: &str) -> Self {
        match name {
            "Top" => TerrainPosition::Top,
            "Bottom" => TerrainPosition::Bottom,
            _ => TerrainPosition::None,
        }
    }

    pub fn is_active(self) -> bool {
        self != TerrainPosition::None
    }
}

impl From<&str> for TerrainPosition {
    fn from(name: &str) -> Self {
        Self::from_content_str(name)
    }
}

impl From<String> for TerrainPosition {
    fn from(name: String) -> Self {
        Self::from_content_str(&name)
    }
}

impl FromStr for TerrainPosition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_content_str(s))
    }
}

impl fmt::Display for TerrainPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerrainPosition::None => "None",
            TerrainPosition::Top => "Top",
            TerrainPosition::Bottom => "Bottom",
        };
        f.write_str(name)
    }
}
