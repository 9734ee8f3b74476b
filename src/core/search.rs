use std::time::Instant;

use crate::{
    core::{Error, HORIZON_DAYS, OptimalSequence, WeeklyConsumptionTable},
    plant::PlantId,
    prelude::*,
    quantity::energy::KilowattHours,
};

/// Cost of moving the intervention team to another plant between consecutive days.
pub const SWITCH_PENALTY: KilowattHours = KilowattHours(5.0);

/// Find the cheapest sequence of plant visits, one plant per day.
///
/// The cost of a sequence is the sum of the visited plants' consumption on each day
/// plus [`SWITCH_PENALTY`] for every change of plant between adjacent days.
///
/// This is an exhaustive search over all `P^7` sequences. Among equal-cost sequences,
/// the one found first in the table order wins.
#[instrument(skip_all, fields(n_plants = table.len()))]
pub fn find_optimal_sequence(table: &WeeklyConsumptionTable) -> Result<OptimalSequence, Error> {
    if table.is_empty() {
        return Err(Error::EmptyInput);
    }
    let start_instant = Instant::now();

    let mut search = Search { table, path: Vec::with_capacity(HORIZON_DAYS), n_explored: 0 };
    let mut best = None;
    search.explore(0, None, KilowattHours::ZERO, &mut best);

    let best = best.ok_or(Error::EmptyInput)?;
    info!(
        n_explored = search.n_explored,
        cost = ?best.cost,
        elapsed = ?start_instant.elapsed(),
        "optimized",
    );
    Ok(best)
}

struct Search<'a> {
    table: &'a WeeklyConsumptionTable,

    /// Plants chosen for the days explored so far.
    path: Vec<PlantId>,

    /// Number of complete sequences evaluated.
    n_explored: u64,
}

impl Search<'_> {
    fn explore(
        &mut self,
        day_index: usize,
        last_plant_id: Option<PlantId>,
        cost: KilowattHours,
        best: &mut Option<OptimalSequence>,
    ) {
        if day_index == HORIZON_DAYS {
            self.n_explored += 1;
            // Strictly lower only, the first found wins on ties:
            if best.as_ref().is_none_or(|best| cost < best.cost) {
                trace!(?cost, path = ?self.path, "improved");
                *best = Some(OptimalSequence { plant_ids: self.path.clone(), cost });
            }
            return;
        }

        let table = self.table;
        for (plant_id, daily) in table.iter() {
            let mut next_cost = cost + daily[day_index];
            if last_plant_id.is_some_and(|last_plant_id| last_plant_id != *plant_id) {
                next_cost += SWITCH_PENALTY;
            }
            self.path.push(*plant_id);
            self.explore(day_index + 1, Some(*plant_id), next_cost, best);
            self.path.pop();
        }
    }
}
