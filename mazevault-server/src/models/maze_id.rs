//! Composite maze identifier: `height:width:seed`
//!
//! The id is derived from the generation inputs, so a valid id always
//! carries valid dimensions and seed. Both directions are supported:
//! building an id from parsed components and parsing an id string from a
//! path parameter.

use std::fmt;

use mazevault_gen::{MAX_DIM, MIN_DIM};
use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// `height:width:seed`, base-10, no signs or padding
static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}):(\d{1,3}):(\d{1,19})$").expect("invalid id regex"));

/// Validated composite maze identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MazeId {
    height: u32,
    width: u32,
    seed: i64,
    repr: String,
}

impl MazeId {
    /// Build an id from already-numeric components.
    ///
    /// Dimensions must lie in the generator's accepted range, the seed must
    /// be non-negative.
    pub fn new(height: u32, width: u32, seed: i64) -> Result<Self, ValidationError> {
        for (field, value) in [("height", height), ("width", width)] {
            if !(MIN_DIM..=MAX_DIM).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field,
                    min: MIN_DIM as i64,
                    max: MAX_DIM as i64,
                });
            }
        }
        if seed < 0 {
            return Err(ValidationError::OutOfRange {
                field: "seed",
                min: 0,
                max: i64::MAX,
            });
        }

        Ok(Self {
            height,
            width,
            seed,
            repr: format!("{height}:{width}:{seed}"),
        })
    }

    /// Parse an id string from a path parameter.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "maze id" });
        }

        let caps = ID_RE.captures(s).ok_or(ValidationError::InvalidFormat {
            field: "maze id",
            reason: "expected height:width:seed with base-10 integers",
        })?;

        let height = parse_dim("height", &caps[1])?;
        let width = parse_dim("width", &caps[2])?;
        let seed = parse_seed(&caps[3])?;

        Self::new(height, width, seed)
    }

    /// Build an id from raw string components, as received in path params.
    pub fn from_parts(height: &str, width: &str, seed: &str) -> Result<Self, ValidationError> {
        Self::parse(&format!("{height}:{width}:{seed}"))
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// The canonical `height:width:seed` string.
    pub fn as_str(&self) -> &str {
        &self.repr
    }
}

impl fmt::Display for MazeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

fn parse_dim(field: &'static str, s: &str) -> Result<u32, ValidationError> {
    s.parse().map_err(|_| ValidationError::OutOfRange {
        field,
        min: MIN_DIM as i64,
        max: MAX_DIM as i64,
    })
}

fn parse_seed(s: &str) -> Result<i64, ValidationError> {
    // Digits only per the regex; overflow past i64::MAX is the only failure.
    s.parse().map_err(|_| ValidationError::OutOfRange {
        field: "seed",
        min: 0,
        max: i64::MAX,
    })
}
