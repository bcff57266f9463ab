mod bookings;
mod clock;
mod day;
mod engine;
mod hours;
mod interval;

use crate::day::Day;
use std::{error::Error, fs};

const DAY_FILE: &str = "data/day.yaml";

fn run() -> Result<(), Box<dyn Error>> {
    let day = serde_yaml::from_str::<Day>(&fs::read_to_string(DAY_FILE)?)?;

    print!("{}", day);

    Ok(())
}

fn main() {
    run().expect("Failed to evaluate availability");
}
