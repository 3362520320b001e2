//! Wall-clock times
//!
//! Times in a schedule are plain HH:MM values without a date or
//! timezone, matching what a time input field produces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A 24h wall-clock time (HH:MM)
///
/// Serialized as the string it was entered as, e.g. `"07:35"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallTime {
    hour: u8,
    minute: u8,
}

impl WallTime {
    /// Create a time, validating the ranges
    pub fn new(hour: u8, minute: u8) -> Result<Self, ModelError> {
        if hour > 23 || minute > 59 {
            return Err(ModelError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for WallTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for WallTime {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<WallTime> for String {
    fn from(t: WallTime) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t: WallTime = "07:35".parse().unwrap();
        assert_eq!(t.hour(), 7);
        assert_eq!(t.minute(), 35);
        assert_eq!(t.to_string(), "07:35");
    }

    #[test]
    fn test_display_pads_zeroes() {
        let t = WallTime::new(8, 5).unwrap();
        assert_eq!(t.to_string(), "08:05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<WallTime>().is_err());
        assert!("0735".parse::<WallTime>().is_err());
        assert!("7:x5".parse::<WallTime>().is_err());
        assert!("24:00".parse::<WallTime>().is_err());
        assert!("12:60".parse::<WallTime>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let t: WallTime = serde_json::from_str("\"13:05\"").unwrap();
        assert_eq!(t, WallTime::new(13, 5).unwrap());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"13:05\"");
    }
}
