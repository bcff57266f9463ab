use crate::{clock::TimeOfDay, interval::Interval};
use jiff::civil::{time, Time};
use serde::Deserialize;
use std::error::Error;

#[derive(Deserialize)]
pub struct HoursConfig {
    opens: Time,
    closes: Time,
    #[serde(rename = "break", default)]
    break_window: Option<String>,
}

// one resource's availability window for one calendar day. the break window,
// when present, lies strictly inside the open hours
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "HoursConfig")]
pub struct OperatingHours {
    pub opens: TimeOfDay,
    pub closes: TimeOfDay,
    pub break_window: Option<Interval>,
}

impl TryFrom<HoursConfig> for OperatingHours {
    type Error = Box<dyn Error>;

    fn try_from(value: HoursConfig) -> Result<Self, Self::Error> {
        // break windows parse through TimeOfDay, which already refuses seconds
        for time in [value.opens, value.closes] {
            if time.second() != 0 || time.subsec_nanosecond() != 0 {
                return Err(format!("Expected minute granularity, got: {}", time).into());
            }
        }

        let opens = TimeOfDay::from(value.opens);
        let closes = TimeOfDay::from(value.closes);
        if opens >= closes {
            return Err(format!("Must open before closing: {} - {}", opens, closes).into());
        }

        let break_window = value
            .break_window
            .map(|s| s.parse::<Interval>())
            .transpose()?;
        if let Some(break_window) = &break_window {
            if break_window.start <= opens || break_window.end >= closes {
                return Err(format!(
                    "Break {} must fall strictly inside open hours {} - {}",
                    break_window, opens, closes
                )
                .into());
            }
        }

        Ok(Self {
            opens,
            closes,
            break_window,
        })
    }
}

// fallback window used until resource-specific hours are known
impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            opens: time(8, 0, 0, 0).into(),
            closes: time(18, 0, 0, 0).into(),
            break_window: None,
        }
    }
}
