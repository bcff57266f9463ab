use crate::clock::TimeOfDay;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Interval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    // half-open overlap test. touching endpoints do not count, so back-to-back
    // intervals never intercept
    pub fn intercepts(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl FromStr for Interval {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [start, end]: [&str; 2] = s
            .split('-')
            .map(|p| p.trim())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|e: Vec<_>| {
                format!("Expected 2 times separated by '-', got {}: {:?}", e.len(), e)
            })?;

        let start = start.parse::<TimeOfDay>()?;
        let end = end.parse::<TimeOfDay>()?;
        if start >= end {
            return Err(format!("Empty or inverted interval: {} - {}", start, end).into());
        }

        Ok(Self { start, end })
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
