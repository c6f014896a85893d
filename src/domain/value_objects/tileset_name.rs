//! Tileset Name Value Object
//!
//! The name doubles as a directory segment under both the working root and
//! the published tiles root, so it is restricted to a portable character set.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{TilerError, TilerResult};

const MAX_LEN: usize = 128;

/// Validated tileset identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TilesetName(String);

impl TilesetName {
    pub fn parse(raw: &str) -> TilerResult<Self> {
        let invalid = |reason: &str| TilerError::InvalidTilesetName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("name is empty"));
        }
        if raw.len() > MAX_LEN {
            return Err(invalid(&format!("name is longer than {} characters", MAX_LEN)));
        }
        if raw.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(invalid(&format!("character '{}' is not allowed", bad)));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TilesetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TilesetName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
