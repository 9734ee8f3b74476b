use crate::{plant::Plant, quantity::energy::KilowattHours};

/// Average daily consumption of a plant in a month.
#[derive(Copy, Clone, Debug)]
pub struct MonthlyAverage<'a> {
    pub plant_name: &'a str,

    /// Number of readings the average is taken over.
    pub n_readings: usize,

    /// Zero when there are no readings.
    pub energy: KilowattHours,
}

/// Average the readings of every plant over the month (1–12) of any year.
pub fn average_daily_consumption(plants: &[Plant], month: u32) -> Vec<MonthlyAverage<'_>> {
    plants
        .iter()
        .map(|plant| {
            let (n_readings, total) = plant
                .readings_in(month)
                .fold((0_usize, KilowattHours::ZERO), |(n, total), reading| {
                    (n + 1, total + reading.energy)
                });
            #[expect(clippy::cast_precision_loss)]
            let energy =
                if n_readings == 0 { KilowattHours::ZERO } else { total / n_readings as f64 };
            MonthlyAverage { plant_name: &plant.name, n_readings, energy }
        })
        .collect()
}
