use crate::{
    bookings::Booking,
    clock::TimeOfDay,
    hours::OperatingHours,
    interval::Interval,
};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    // bookable, carries the normalized end time
    Available(TimeOfDay),
    Unavailable(Rejection),
    // start input is blank, so there is nothing to decide yet
    AwaitingInput,
}

// why a slot was turned down. rejections are data, never errors: the worst
// case is that the caller shows the reason and asks for another time
#[derive(Clone, Debug, PartialEq)]
pub enum Rejection {
    InvalidInput(String),
    BeforeOpening,
    AfterClosing,
    OverlapsBreak,
    ConflictsWithBooking(Booking),
}

// decides whether a slot of `duration_minutes` starting at `start` is bookable
// against the day's open hours, break window and existing bookings. pure and
// deterministic: no state, no I/O, safe to re-run on every input change.
// missing `hours` fall back to the default window so a verdict can be offered
// before resource-specific hours are known.
pub fn evaluate(
    start: &str,
    duration_minutes: i32,
    hours: Option<&OperatingHours>,
    bookings: &[Booking],
) -> Verdict {
    if start.trim().is_empty() {
        return Verdict::AwaitingInput;
    }

    let start = match start.parse::<TimeOfDay>() {
        Ok(start) => start,
        Err(e) => return Verdict::Unavailable(Rejection::InvalidInput(e.to_string())),
    };

    if duration_minutes <= 0 {
        return Verdict::Unavailable(Rejection::InvalidInput(format!(
            "Duration must be a positive number of minutes, got {}",
            duration_minutes
        )));
    }

    let default_hours;
    let hours = match hours {
        Some(hours) => hours,
        None => {
            default_hours = OperatingHours::default();
            &default_hours
        }
    };

    // a slot may not cross midnight, whatever the closing time says
    let Some(end) = start.checked_add(duration_minutes) else {
        return Verdict::Unavailable(Rejection::AfterClosing);
    };

    // boundaries are inclusive: starting at opening or ending at closing is fine
    if start < hours.opens {
        return Verdict::Unavailable(Rejection::BeforeOpening);
    }
    if end > hours.closes {
        return Verdict::Unavailable(Rejection::AfterClosing);
    }

    let slot = Interval::new(start, end);

    if let Some(break_window) = &hours.break_window {
        if slot.intercepts(break_window) {
            return Verdict::Unavailable(Rejection::OverlapsBreak);
        }
    }

    let mut active: Vec<&Booking> = bookings.iter().filter(|b| b.is_active()).collect();
    active.sort_by_key(|booking| booking.interval.start);

    if let Some(conflict) = active.iter().find(|b| slot.intercepts(&b.interval)) {
        return Verdict::Unavailable(Rejection::ConflictsWithBooking((*conflict).clone()));
    }

    Verdict::Available(end)
}

// candidate start times to offer as quick picks, ascending: the opening time
// first, then the end of every non-cancelled booking that still leaves room
// before closing. these are hints only. they are not checked against the break
// window or against other bookings, so the caller must still run `evaluate` on
// a pick before committing it
pub fn suggest(
    hours: &OperatingHours,
    bookings: &[Booking],
    duration_minutes: i32,
) -> impl Iterator<Item = TimeOfDay> {
    let opens = hours.opens;
    let closes = hours.closes;

    let mut ends: Vec<TimeOfDay> = bookings
        .iter()
        .filter(|booking| booking.is_active())
        .map(|booking| booking.interval.end)
        .collect();
    ends.sort();
    ends.dedup();

    std::iter::once(opens)
        .chain(ends.into_iter().filter(move |&end| end > opens))
        .filter(move |start| {
            start
                .checked_add(duration_minutes)
                .is_some_and(|end| end <= closes)
        })
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Verdict::Available(end) => write!(f, "available until {}", end),
            Verdict::Unavailable(rejection) => write!(f, "not available ({})", rejection),
            Verdict::AwaitingInput => write!(f, "awaiting input"),
        }
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Rejection::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            Rejection::BeforeOpening => write!(f, "before opening"),
            Rejection::AfterClosing => write!(f, "after closing"),
            Rejection::OverlapsBreak => write!(f, "overlaps break"),
            Rejection::ConflictsWithBooking(booking) => {
                write!(f, "conflicts with existing booking {}", booking.interval)
            }
        }
    }
}
