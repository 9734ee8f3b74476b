use chrono::Datelike;

use crate::{
    plant::{Plant, PlantId},
    quantity::energy::KilowattHours,
};

/// Number of days in the planning horizon, starting on the 1st of the month.
pub const HORIZON_DAYS: usize = 7;

pub type DailyConsumption = [KilowattHours; HORIZON_DAYS];

/// Per-plant consumption for the first [`HORIZON_DAYS`] days of a month.
///
/// Rows keep the plant collection order, which is also the enumeration order
/// of the search and thus decides between equal-cost sequences.
#[derive(Clone, Debug, Default)]
pub struct WeeklyConsumptionTable(Vec<(PlantId, DailyConsumption)>);

impl WeeklyConsumptionTable {
    /// Build the table for the month (1–12) of any year.
    ///
    /// A day without readings costs nothing. If a plant has several readings on
    /// the same day, the last one wins.
    pub fn build(plants: &[Plant], month: u32) -> Self {
        Self(
            plants
                .iter()
                .map(|plant| {
                    let mut daily = [KilowattHours::ZERO; HORIZON_DAYS];
                    for reading in plant.readings_in(month) {
                        let day_index = reading.date.day0() as usize;
                        if let Some(energy) = daily.get_mut(day_index) {
                            *energy = reading.energy;
                        }
                    }
                    (plant.id, daily)
                })
                .collect(),
        )
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(PlantId, DailyConsumption)> {
        self.0.iter()
    }

    pub fn get(&self, plant_id: PlantId) -> Option<&DailyConsumption> {
        self.0.iter().find(|(id, _)| *id == plant_id).map(|(_, daily)| daily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::fixtures::{plant, reading};

    #[test]
    fn test_one_row_per_plant() {
        let plants = [
            plant(1, "A", 5, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
            plant(2, "B", 5, &[]),
            plant(3, "C", 6, &[1.0; 7]),
        ];
        let table = WeeklyConsumptionTable::build(&plants, 5);
        assert_eq!(table.len(), 3);
        for (_, daily) in table.iter() {
            assert_eq!(daily.len(), HORIZON_DAYS);
            assert!(daily.iter().all(|energy| *energy >= KilowattHours::ZERO));
        }
        assert_eq!(table.get(PlantId(1)).unwrap()[6], KilowattHours(7.0));
        assert_eq!(table.get(PlantId(2)).unwrap(), &[KilowattHours::ZERO; HORIZON_DAYS]);
        assert_eq!(table.get(PlantId(3)).unwrap(), &[KilowattHours::ZERO; HORIZON_DAYS]);
    }

    #[test]
    fn test_keeps_plant_order() {
        let plants = [plant(3, "C", 1, &[]), plant(1, "A", 1, &[]), plant(2, "B", 1, &[])];
        let table = WeeklyConsumptionTable::build(&plants, 1);
        let ids: Vec<_> = table.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, [PlantId(3), PlantId(1), PlantId(2)]);
    }

    #[test]
    fn test_missing_days_default_to_zero() {
        let mut plant = plant(1, "A", 2, &[]);
        plant.readings = vec![reading(2024, 2, 3, 4.0), reading(2024, 2, 7, 2.0)];
        let table = WeeklyConsumptionTable::build(&[plant], 2);
        let daily = table.get(PlantId(1)).unwrap();
        assert_eq!(
            daily.map(|energy| energy.0),
            [0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 2.0],
        );
    }

    #[test]
    fn test_last_reading_on_the_same_day_wins() {
        let mut plant = plant(1, "A", 2, &[]);
        plant.readings = vec![reading(2023, 2, 1, 4.0), reading(2024, 2, 1, 9.0)];
        let table = WeeklyConsumptionTable::build(&[plant], 2);
        assert_eq!(table.get(PlantId(1)).unwrap()[0], KilowattHours(9.0));
    }

    #[test]
    fn test_ignores_other_months() {
        let mut plant = plant(1, "A", 2, &[]);
        plant.readings = vec![reading(2024, 1, 1, 4.0), reading(2024, 3, 2, 9.0)];
        let table = WeeklyConsumptionTable::build(&[plant], 2);
        assert_eq!(table.get(PlantId(1)).unwrap(), &[KilowattHours::ZERO; HORIZON_DAYS]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(WeeklyConsumptionTable::build(&[], 1).is_empty());
    }
}
