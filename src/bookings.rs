use crate::interval::Interval;
use derive_more::Into;
use std::{error::Error, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl FromStr for BookingStatus {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s).into()),
        }
    }
}

// an already committed appointment on the same resource and day. read-only
// input to the engine, only non-cancelled bookings count against new slots
#[derive(Clone, Debug, PartialEq)]
pub struct Booking {
    pub interval: Interval,
    pub status: BookingStatus,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}

impl TryFrom<String> for Booking {
    type Error = Box<dyn Error>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut parts: Vec<_> = value.split('/').map(|p| p.trim()).collect();

        let status = if parts.len() == 2 {
            parts.pop().unwrap().parse()?
        } else {
            BookingStatus::Confirmed
        };

        let [interval]: [&str; 1] = parts.try_into().map_err(|e: Vec<_>| {
            format!("Expected 'start - end [/ status]', got: {:?}", e)
        })?;

        Ok(Booking {
            interval: interval.parse()?,
            status,
        })
    }
}

#[derive(Debug, Into)]
pub struct Bookings(Vec<Booking>);

impl TryFrom<Vec<String>> for Bookings {
    type Error = Box<dyn Error>;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        let mut bookings = Vec::new();
        for line in value {
            bookings.push(line.try_into()?);
        }

        Ok(Bookings(bookings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let booking = Booking::try_from("10:00 - 10:30 / cancelled".to_string()).unwrap();
        assert_eq!(booking.interval.to_string(), "10:00 - 10:30");
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert!(!booking.is_active());

        // status defaults to confirmed
        let booking = Booking::try_from("09:00 - 09:45".to_string()).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(booking.is_active());

        assert!(Booking::try_from("10:00 - 10:30 / held".to_string()).is_err());
        assert!(Booking::try_from("10:30 - 10:00".to_string()).is_err());
        assert!(Booking::try_from("10:00 / 10:30 / confirmed".to_string()).is_err());
    }

    #[test]
    fn test_parse_list() {
        let bookings: Vec<Booking> = Bookings::try_from(vec![
            "09:00 - 09:30".to_string(),
            "11:00 - 12:00 / pending".to_string(),
        ])
        .unwrap()
        .into();
        assert_eq!(bookings.len(), 2);

        assert!(Bookings::try_from(vec!["nonsense".to_string()]).is_err());
    }
}
