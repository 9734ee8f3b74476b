use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{MonthlyAverage, SWITCH_PENALTY, Visit, WeeklyConsumptionTable},
    quantity::energy::KilowattHours,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_averages_table(averages: &[MonthlyAverage]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Plant", "Readings", "Average"]);
    for average in averages {
        table.add_row(vec![
            Cell::new(average.plant_name),
            Cell::new(average.n_readings)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(average.energy.round_to_watt_hours())
                .set_alignment(CellAlignment::Right)
                .fg(if average.n_readings == 0 { Color::DarkGrey } else { Color::Reset }),
        ]);
    }
    table
}

/// Day-by-day breakdown of the sequence cost.
pub fn build_sequence_table(visits: &[Visit], weekly_table: &WeeklyConsumptionTable) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Day", "Plant", "Consumption", "Switch"]);
    let mut last_plant_id = None;
    for visit in visits {
        let consumption = weekly_table
            .get(visit.plant_id)
            .map_or(KilowattHours::ZERO, |daily| daily[visit.day - 1]);
        let is_switch = last_plant_id.is_some_and(|plant_id| plant_id != visit.plant_id);
        last_plant_id = Some(visit.plant_id);
        table.add_row(vec![
            Cell::new(visit.day).add_attribute(Attribute::Dim),
            Cell::new(visit.plant_name),
            Cell::new(consumption.round_to_watt_hours()).set_alignment(CellAlignment::Right),
            if is_switch {
                Cell::new(SWITCH_PENALTY).set_alignment(CellAlignment::Right).fg(Color::Red)
            } else {
                Cell::new("").set_alignment(CellAlignment::Right)
            },
        ]);
    }
    table
}
