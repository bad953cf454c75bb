use serde::Deserialize;

/// One linear piece of a height profile, ramping from `start_height` by
/// `increment_size` across a single segment length.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize)]
pub struct TerrainSegment {
    start_height: i32,
    increment_size: i32,
}

impl TerrainSegment {
    pub const fn new(start_height: i32, increment_size: i32) -> Self {
        Self {
            start_height,
            increment_size,
        }
    }

    pub const fn start_height(&self) -> i32 {
        self.start_height
    }

    pub const fn increment_size(&self) -> i32 {
        self.increment_size
    }

    /// Widened so that any pair of content values sums without overflow.
    pub const fn end_height(&self) -> i64 {
        self.start_height as i64 + self.increment_size as i64
    }

    /// Highest point reached anywhere across the segment.
    pub fn peak_height(&self) -> i64 {
        i64::from(self.start_height).max(self.end_height())
    }
}

impl From<(i32, i32)> for TerrainSegment {
    fn from((start_height, increment_size): (i32, i32)) -> Self {
        Self::new(start_height, increment_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_and_peak_heights() {
        let rising = TerrainSegment::new(10, 5);
        let falling = TerrainSegment::from((10, -5));

        assert_eq!(rising.end_height(), 15);
        assert_eq!(rising.peak_height(), 15);
        assert_eq!(falling.end_height(), 5);
        assert_eq!(falling.peak_height(), 10);
    }

    #[test]
    fn extreme_heights_do_not_overflow() {
        let over = TerrainSegment::new(i32::MAX, 1);
        let under = TerrainSegment::new(i32::MIN, -1);

        assert_eq!(over.end_height(), i64::from(i32::MAX) + 1);
        assert_eq!(over.peak_height(), i64::from(i32::MAX) + 1);
        assert_eq!(under.end_height(), i64::from(i32::MIN) - 1);
        assert_eq!(under.peak_height(), i64::from(i32::MIN));
    }

    #[test]
    fn segment_lists_deserialize_from_content() {
        let segments: Vec<TerrainSegment> = serde_json::from_str(
            r#"[
                { "start_height": 100, "increment_size": 8 },
                { "start_height": 108, "increment_size": -8 }
            ]"#,
        )
        .unwrap();

        assert_eq!(segments, [TerrainSegment::new(100, 8), TerrainSegment::new(108, -8)]);
    }
}
