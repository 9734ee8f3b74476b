use clap::Parser;

use crate::{
    cli::{catalog::CatalogArgs, month::MonthArgs},
    core::average_daily_consumption,
    prelude::*,
    tables::build_averages_table,
};

#[derive(Parser)]
pub struct AverageArgs {
    #[clap(flatten)]
    catalog: CatalogArgs,

    #[clap(flatten)]
    month: MonthArgs,
}

impl AverageArgs {
    #[instrument(skip_all, fields(month = self.month.month))]
    pub fn run(self) -> Result {
        let catalog = self.catalog.read()?;
        let averages = average_daily_consumption(&catalog.plants, self.month.month);
        println!("{}", build_averages_table(&averages));
        Ok(())
    }
}
