use jiff::civil::Time;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

pub const MINUTES_PER_DAY: i32 = 24 * 60;

// wall-clock time with minute granularity, stored as minutes from midnight.
// all comparisons and arithmetic happen on the integer offset, "HH:MM" strings
// only exist at the parsing and display boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(i32);

impl TimeOfDay {
    pub fn from_minutes(minutes: i32) -> Option<Self> {
        (0..MINUTES_PER_DAY).contains(&minutes).then_some(Self(minutes))
    }

    pub fn minutes(self) -> i32 {
        self.0
    }

    // minute arithmetic only. a slot is not allowed to roll over past midnight,
    // so anything beyond 23:59 is None, however large the added duration
    pub fn checked_add(self, minutes: i32) -> Option<Self> {
        self.0.checked_add(minutes).and_then(Self::from_minutes)
    }
}

impl From<Time> for TimeOfDay {
    fn from(time: Time) -> Self {
        Self(i32::from(time.hour()) * 60 + i32::from(time.minute()))
    }
}

impl FromStr for TimeOfDay {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = s.trim().parse::<Time>()?;
        if time.second() != 0 || time.subsec_nanosecond() != 0 {
            return Err(format!("Expected minute granularity, got: {}", s).into());
        }
        Ok(time.into())
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let time = "08:05".parse::<TimeOfDay>().unwrap();
        assert_eq!(time.minutes(), 8 * 60 + 5);
        assert_eq!("23:59".parse::<TimeOfDay>().unwrap().minutes(), 1439);
        assert_eq!(" 12:00 ".parse::<TimeOfDay>().unwrap().minutes(), 720);

        assert!("".parse::<TimeOfDay>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("8am".parse::<TimeOfDay>().is_err());
        assert!("08:00:30".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!("09:05".parse::<TimeOfDay>().unwrap().to_string(), "09:05");
        assert_eq!(TimeOfDay::from_minutes(0).unwrap().to_string(), "00:00");
    }

    #[test]
    fn test_checked_add() {
        let time = "23:45".parse::<TimeOfDay>().unwrap();
        assert_eq!(time.checked_add(14).unwrap().to_string(), "23:59");
        assert_eq!(time.checked_add(15), None);
        assert_eq!(time.checked_add(30), None);
        assert_eq!(time.checked_add(i32::MAX), None);
    }
}
