use bon::Builder;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::quantity::energy::KilowattHours;

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct PlantId(pub u32);

/// Physical facility whose daily energy consumption is tracked.
#[derive(Clone, Debug, Builder, Deserialize)]
pub struct Plant {
    pub id: PlantId,

    #[builder(into)]
    pub name: String,

    /// Chronological readings.
    #[serde(default)]
    #[builder(default)]
    pub readings: Vec<Reading>,
}

impl Plant {
    /// Readings taken in the specified month of any year.
    pub fn readings_in(&self, month: u32) -> impl Iterator<Item = &Reading> {
        self.readings.iter().filter(move |reading| reading.date.month() == month)
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Reading {
    pub date: NaiveDate,

    #[serde(rename = "kwh")]
    pub energy: KilowattHours,
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn reading(year: i32, month: u32, day: u32, energy: f64) -> Reading {
        Reading {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            energy: KilowattHours(energy),
        }
    }

    /// Plant with consecutive daily readings starting on the 1st of the month.
    pub fn plant(id: u32, name: &str, month: u32, daily: &[f64]) -> Plant {
        Plant::builder()
            .id(PlantId(id))
            .name(name)
            .readings(
                (1..)
                    .zip(daily)
                    .map(|(day, energy)| reading(2024, month, day, *energy))
                    .collect(),
            )
            .build()
    }
}
