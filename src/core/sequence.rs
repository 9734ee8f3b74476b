use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    core::Error,
    plant::{Plant, PlantId},
    quantity::energy::KilowattHours,
};

/// The cheapest plant assignment: one plant ID per day, starting on day 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptimalSequence {
    pub plant_ids: Vec<PlantId>,
    pub cost: KilowattHours,
}

impl OptimalSequence {
    /// Resolve the plant IDs into named, day-labelled visits.
    pub fn describe<'a>(&self, plants: &'a [Plant]) -> Result<Vec<Visit<'a>>, Error> {
        let names: HashMap<PlantId, &str> =
            plants.iter().map(|plant| (plant.id, plant.name.as_str())).collect();
        self.plant_ids
            .iter()
            .zip(1..)
            .map(|(plant_id, day)| {
                names
                    .get(plant_id)
                    .copied()
                    .map(|plant_name| Visit { day, plant_id: *plant_id, plant_name })
                    .ok_or(Error::UnknownPlant(*plant_id))
            })
            .try_collect()
    }
}

/// Single day of the sequence.
#[derive(Copy, Clone, Debug, derive_more::Display)]
#[display("Day {day}: {plant_name}")]
pub struct Visit<'a> {
    /// Day of the month, starting from 1.
    pub day: usize,

    pub plant_id: PlantId,
    pub plant_name: &'a str,
}
