use clap::Parser;

use crate::{
    cli::{catalog::CatalogArgs, month::MonthArgs},
    core::{WeeklyConsumptionTable, find_optimal_sequence},
    prelude::*,
    tables::build_sequence_table,
};

#[derive(Parser)]
pub struct SequenceArgs {
    #[clap(flatten)]
    catalog: CatalogArgs,

    #[clap(flatten)]
    month: MonthArgs,

    /// Print plain `Day <n>: <plant>` lines instead of the table.
    #[clap(long)]
    plain: bool,
}

impl SequenceArgs {
    #[instrument(skip_all, fields(month = self.month.month))]
    pub fn run(self) -> Result {
        let catalog = self.catalog.read()?;
        let weekly_table = WeeklyConsumptionTable::build(&catalog.plants, self.month.month);
        let sequence =
            find_optimal_sequence(&weekly_table).context("failed to plan the interventions")?;
        let visits = sequence.describe(&catalog.plants)?;
        if self.plain {
            for visit in &visits {
                println!("{visit}");
            }
        } else {
            println!("{}", build_sequence_table(&visits, &weekly_table));
        }
        println!("Total cost: {}", sequence.cost);
        Ok(())
    }
}
