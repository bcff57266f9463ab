use crate::{
    bookings::{Booking, Bookings},
    engine::{self, Verdict},
    hours::OperatingHours,
};
use derive_more::{Deref, DerefMut};
use indexmap::IndexMap;
use serde::Deserialize;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Deserialize)]
pub struct DayConfig {
    resources: IndexMap<String, ResourceConfig>,
}

#[derive(Deserialize)]
struct ResourceConfig {
    hours: Option<OperatingHours>,
    #[serde(default)]
    bookings: Vec<String>,
    #[serde(default)]
    queries: Vec<String>,
}

// one day's availability questions, grouped per resource in day-file order.
// the engine itself is resource-agnostic, each resource is evaluated on its
// own hours and bookings
#[derive(Deref, DerefMut, Deserialize)]
#[serde(try_from = "DayConfig")]
pub struct Day {
    #[deref]
    #[deref_mut]
    inner: IndexMap<String, Resource>,
}

pub struct Resource {
    pub hours: Option<OperatingHours>,
    pub bookings: Vec<Booking>,
    pub queries: Vec<Query>,
}

// a candidate slot as typed by the user: raw start text plus a duration. the
// start stays a string so the engine can report "awaiting input" for blank
// text and a parse rejection for garbage
pub struct Query {
    pub start: String,
    pub duration_minutes: i32,
}

impl TryFrom<String> for Query {
    type Error = Box<dyn Error>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let [start, duration]: [&str; 2] = value
            .split('/')
            .map(|p| p.trim())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|e: Vec<_>| {
                format!("Expected 'start / duration', got {}: {:?}", e.len(), e)
            })?;

        Ok(Query {
            start: start.to_string(),
            duration_minutes: duration.parse()?,
        })
    }
}

impl TryFrom<DayConfig> for Day {
    type Error = Box<dyn Error>;

    fn try_from(value: DayConfig) -> Result<Self, Self::Error> {
        let mut inner = IndexMap::new();
        for (name, config) in value.resources {
            let mut queries = Vec::new();
            for query in config.queries {
                queries.push(query.try_into()?);
            }

            inner.insert(
                name,
                Resource {
                    hours: config.hours,
                    bookings: Bookings::try_from(config.bookings)?.into(),
                    queries,
                },
            );
        }

        Ok(Self { inner })
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (name, resource) in self.iter() {
            writeln!(f, "{}:", name)?;

            for query in &resource.queries {
                let verdict = engine::evaluate(
                    &query.start,
                    query.duration_minutes,
                    resource.hours.as_ref(),
                    &resource.bookings,
                );
                writeln!(
                    f,
                    "    {} / {}m: {}",
                    query.start, query.duration_minutes, verdict
                )?;

                if let Verdict::Unavailable(_) = verdict {
                    let hours = resource.hours.clone().unwrap_or_default();
                    let suggestions: Vec<_> =
                        engine::suggest(&hours, &resource.bookings, query.duration_minutes)
                            .map(|start| start.to_string())
                            .collect();
                    writeln!(f, "        try: {}", suggestions.join(", "))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_YAML: &str = "
resources:
  Reception:
    hours:
      opens: \"08:00\"
      closes: \"18:00\"
      break: \"13:00 - 14:00\"
    bookings:
      - \"09:00 - 09:30\"
      - \"11:00 - 12:00 / cancelled\"
    queries:
      - \"09:15 / 30\"
      - \"11:30 / 30\"
  Chair 2:
    queries:
      - \"07:30 / 45\"
";

    #[test]
    fn test_day_from_yaml() {
        let day = serde_yaml::from_str::<Day>(DAY_YAML).unwrap();

        assert_eq!(day.len(), 2);
        let reception = day.get("Reception").unwrap();
        assert_eq!(reception.bookings.len(), 2);
        assert_eq!(reception.queries.len(), 2);
        assert!(day.get("Chair 2").unwrap().hours.is_none());
    }

    #[test]
    fn test_report() {
        let day = serde_yaml::from_str::<Day>(DAY_YAML).unwrap();

        assert_eq!(
            day.to_string(),
            "\
Reception:
    09:15 / 30m: not available (conflicts with existing booking 09:00 - 09:30)
        try: 08:00, 09:30
    11:30 / 30m: available until 12:00
Chair 2:
    07:30 / 45m: not available (before opening)
        try: 08:00
"
        );
    }

    #[test]
    fn test_bad_queries_are_rejected() {
        assert!(serde_yaml::from_str::<Day>(
            "{ resources: { A: { queries: [\"10:00\"] } } }"
        )
        .is_err());
        assert!(serde_yaml::from_str::<Day>(
            "{ resources: { A: { queries: [\"10:00 / soon\"] } } }"
        )
        .is_err());
    }
}
