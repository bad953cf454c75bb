use std::collections::BTreeSet;

use serde::Deserialize;
use util::Number;

use crate::{TerrainError, TerrainPosition, TerrainSegment};

/// Shared configuration for one kind of terrain. Every placed [`crate::Terrain`]
/// of that kind holds the same template.
#[derive(Clone, PartialEq, Debug)]
pub struct TerrainTemplate {
    object_type_path: String,
    terrain_position: TerrainPosition,
    segment_length: i32,
    friction: Number,
    allowed_increments: BTreeSet<u32>,
}

impl TerrainTemplate {
    pub fn new(
        object_type_path: impl Into<String>,
        terrain_position: TerrainPosition,
        segment_length: i32,
        friction: Number,
        allowed_increments: impl IntoIterator<Item = i32>,
    ) -> Result<Self, TerrainError> {
        if segment_length <= 0 {
            return Err(TerrainError::InvalidSegmentLength(segment_length));
        }

        Ok(Self {
            object_type_path: object_type_path.into(),
            terrain_position,
            segment_length,
            friction,
            allowed_increments: allowed_increments.into_iter().map(i32::unsigned_abs).collect(),
        })
    }

    /// Opaque to terrain logic, used by whatever draws this kind.
    pub fn object_type_path(&self) -> &str {
        &self.object_type_path
    }

    pub fn terrain_position(&self) -> TerrainPosition {
        self.terrain_position
    }

    /// Always positive.
    pub fn segment_length(&self) -> i32 {
        self.segment_length
    }

    pub fn friction(&self) -> Number {
        self.friction
    }

    pub fn allowed_increments(&self) -> &BTreeSet<u32> {
        &self.allowed_increments
    }

    /// Flat segments are always allowed, otherwise the magnitude must be listed.
    pub fn is_increment_allowed(&self, increment: i32) -> bool {
        increment == 0 || self.allowed_increments.contains(&increment.unsigned_abs())
    }

    /// Level tooling check. Height lookups never consult the allowed set.
    pub fn validate_segments(&self, segments: &[TerrainSegment]) -> Result<(), TerrainError> {
        match segments
            .iter()
            .enumerate()
            .find(|(_, segment)| !self.is_increment_allowed(segment.increment_size()))
        {
            Some((index, segment)) => Err(TerrainError::DisallowedIncrement {
                index,
                increment: segment.increment_size(),
            }),
            None => Ok(()),
        }
    }
}

/// Construction input for a [`TerrainTemplate`] as it appears in level content.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct TerrainTemplateDescriptor {
    pub object_type_path: String,
    #[serde(default)]
    pub terrain_position: TerrainPosition,
    pub segment_length: i32,
    #[serde(default)]
    pub friction: Number,
    #[serde(default)]
    pub allowed_increments: Vec<i32>,
}

impl TryFrom<TerrainTemplateDescriptor> for TerrainTemplate {
    type Error = TerrainError;

    fn try_from(descriptor: TerrainTemplateDescriptor) -> Result<Self, Self::Error> {
        TerrainTemplate::new(
            descriptor.object_type_path,
            descriptor.terrain_position,
            descriptor.segment_length,
            descriptor.friction,
            descriptor.allowed_increments,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grass() -> TerrainTemplate {
        TerrainTemplate::new("Terrain/Grass", TerrainPosition::Top, 50, 0.8, [4, -8, 16]).unwrap()
    }

    #[test]
    fn rejects_non_positive_segment_length() {
        assert_eq!(
            TerrainTemplate::new("Terrain/Stub", TerrainPosition::Top, 0, 1., []),
            Err(TerrainError::InvalidSegmentLength(0))
        );
        assert_eq!(
            TerrainTemplate::new("Terrain/Stub", TerrainPosition::Bottom, -32, 1., []),
            Err(TerrainError::InvalidSegmentLength(-32))
        );
    }

    #[test]
    fn accessors_pass_construction_values_through() {
        let template = grass();

        assert_eq!(template.object_type_path(), "Terrain/Grass");
        assert_eq!(template.terrain_position(), TerrainPosition::Top);
        assert_eq!(template.segment_length(), 50);
        assert_eq!(template.friction(), 0.8);
        assert_eq!(
            template.allowed_increments().iter().copied().collect::<Vec<_>>(),
            [4, 8, 16]
        );
    }

    #[test]
    fn increments_are_checked_by_magnitude() {
        let template = grass();

        assert!(template.is_increment_allowed(0));
        assert!(template.is_increment_allowed(-4));
        assert!(template.is_increment_allowed(8));
        assert!(!template.is_increment_allowed(5));
    }

    #[test]
    fn most_negative_increment_is_handled_by_magnitude() {
        let template =
            TerrainTemplate::new("Terrain/Cliff", TerrainPosition::Top, 16, 1., [i32::MIN]).unwrap();

        assert!(template.allowed_increments().contains(&2_147_483_648));
        assert!(template.is_increment_allowed(i32::MIN));
        assert_eq!(
            template.validate_segments(&[TerrainSegment::new(0, i32::MIN)]),
            Ok(())
        );
        assert_eq!(
            grass().validate_segments(&[TerrainSegment::new(0, i32::MIN)]),
            Err(TerrainError::DisallowedIncrement {
                index: 0,
                increment: i32::MIN
            })
        );
    }

    #[test]
    fn validation_reports_first_bad_segment() {
        let template = grass();
        let segments = [
            TerrainSegment::new(100, 4),
            TerrainSegment::new(104, 0),
            TerrainSegment::new(104, -3),
            TerrainSegment::new(101, 7),
        ];

        assert_eq!(template.validate_segments(&segments[..2]), Ok(()));
        assert_eq!(
            template.validate_segments(&segments),
            Err(TerrainError::DisallowedIncrement {
                index: 2,
                increment: -3
            })
        );
    }

    #[test]
    fn descriptor_builds_template() {
        let descriptor: TerrainTemplateDescriptor = serde_json::from_str(
            r#"{
                "object_type_path": "Terrain/CaveRoof",
                "terrain_position": "Bottom",
                "segment_length": 32,
                "friction": 0.5,
                "allowed_increments": [2, 4]
            }"#,
        )
        .unwrap();

        let template = TerrainTemplate::try_from(descriptor).unwrap();

        assert_eq!(template.terrain_position(), TerrainPosition::Bottom);
        assert_eq!(template.segment_length(), 32);
        assert!(template.is_increment_allowed(-2));
    }

    #[test]
    fn descriptor_validation_runs_on_conversion() {
        let descriptor: TerrainTemplateDescriptor =
            serde_json::from_str(r#"{ "object_type_path": "Terrain/Stub", "segment_length": 0 }"#)
                .unwrap();

        assert_eq!(descriptor.terrain_position, TerrainPosition::None);
        assert_eq!(
            TerrainTemplate::try_from(descriptor),
            Err(TerrainError::InvalidSegmentLength(0))
        );
    }
}
