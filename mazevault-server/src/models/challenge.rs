//! Challenge level: a small difficulty tag stored with a maze record.
//!
//! The store does not interpret it; it is validated on the way in and
//! returned verbatim.

use super::ValidationError;

/// Largest accepted challenge level.
pub const MAX_CHALLENGE_LEVEL: u8 = 10;

/// Validated challenge level (0..=10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChallengeLevel(u8);

impl ChallengeLevel {
    pub fn new(level: u8) -> Result<Self, ValidationError> {
        if level > MAX_CHALLENGE_LEVEL {
            return Err(ValidationError::OutOfRange {
                field: "challenge level",
                min: 0,
                max: MAX_CHALLENGE_LEVEL as i64,
            });
        }
        Ok(Self(level))
    }

    /// Parse from a raw path parameter.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let level: u8 = s.parse().map_err(|_| ValidationError::OutOfRange {
            field: "challenge level",
            min: 0,
            max: MAX_CHALLENGE_LEVEL as i64,
        })?;
        Self::new(level)
    }

    pub fn as_i64(self) -> i64 {
        self.0 as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range() {
        assert!(ChallengeLevel::new(0).is_ok());
        assert!(ChallengeLevel::new(10).is_ok());
        assert!(ChallengeLevel::new(11).is_err());
    }

    #[test]
    fn parses_path_param() {
        assert_eq!(ChallengeLevel::parse("3").unwrap().as_i64(), 3);
        assert!(ChallengeLevel::parse("-1").is_err());
        assert!(ChallengeLevel::parse("abc").is_err());
        assert!(ChallengeLevel::parse("999").is_err());
    }
}
