//! Zoom Range Value Object
//!
//! Inclusive range of XYZ zoom levels handed to the tile cutter.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{TilerError, TilerResult};

/// Default `--zoom` value
pub const DEFAULT_ZOOM_RANGE: &str = "0-8";

/// Deepest zoom level gdal2tiles can cut
pub const MAX_ZOOM_LEVEL: u32 = 32;

/// Inclusive zoom level range with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoomRange {
    min: u32,
    max: u32,
}

impl ZoomRange {
    pub fn new(min: u32, max: u32) -> TilerResult<Self> {
        if max > MAX_ZOOM_LEVEL {
            return Err(TilerError::InvalidZoomRange {
                input: format!("{}-{}", min, max),
                reason: too_deep(max),
            });
        }
        if min > max {
            return Err(TilerError::InvalidZoomRange {
                input: format!("{}-{}", min, max),
                reason: format!("minimum zoom {} is greater than maximum zoom {}", min, max),
            });
        }
        Ok(Self { min, max })
    }

    /// A range covering exactly one zoom level
    #[cfg(test)]
    pub(crate) fn single(level: u32) -> Self {
        Self {
            min: level,
            max: level,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, level: u32) -> bool {
        self.levels().contains(&level)
    }

    pub fn levels(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self { min: 0, max: 8 }
    }
}

impl fmt::Display for ZoomRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for ZoomRange {
    type Err = TilerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TilerError::InvalidZoomRange {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("zoom range is empty"));
        }
        if trimmed.starts_with('-') {
            return Err(invalid("zoom levels cannot be negative"));
        }

        let (min, max) = match trimmed.split_once('-') {
            Some((min, max)) => (min.trim(), max.trim()),
            None => (trimmed, trimmed),
        };

        if max.starts_with('-') {
            return Err(invalid("zoom levels cannot be negative"));
        }

        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| invalid(&format!("'{}' is not a zoom level", part)))
        };
        let min = parse(min)?;
        let max = parse(max)?;

        if let Some(level) = [min, max].into_iter().find(|l| *l > MAX_ZOOM_LEVEL) {
            return Err(invalid(&too_deep(level)));
        }

        if min > max {
            return Err(invalid(&format!(
                "minimum zoom {} is greater than maximum zoom {}",
                min, max
            )));
        }

        Ok(Self { min, max })
    }
}

fn too_deep(level: u32) -> String {
    format!(
        "zoom level {} is above the maximum of {}",
        level, MAX_ZOOM_LEVEL
    )
}

impl Serialize for ZoomRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
