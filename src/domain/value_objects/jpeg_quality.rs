//! JPEG quality setting (1..=100)

use std::fmt;

use serde::Serialize;

use crate::error::{TilerError, TilerResult};

/// Default `--jpeg-quality`
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JpegQuality(u8);

impl JpegQuality {
    pub fn new(value: i64) -> TilerResult<Self> {
        match u8::try_from(value) {
            Ok(q @ 1..=100) => Ok(Self(q)),
            _ => Err(TilerError::InvalidJpegQuality { value }),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for JpegQuality {
    fn default() -> Self {
        Self(DEFAULT_JPEG_QUALITY)
    }
}

impl fmt::Display for JpegQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
