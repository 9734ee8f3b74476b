mod average;
mod catalog;
mod month;
mod sequence;

use clap::{Parser, Subcommand};

use crate::{
    cli::{average::AverageArgs, sequence::SequenceArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Average(args) => args.run(),
            Command::Sequence(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Average daily consumption of every plant in the month.
    #[clap(name = "average")]
    Average(AverageArgs),

    /// Cheapest sequence of interventions over the first week of the month.
    #[clap(name = "sequence")]
    Sequence(SequenceArgs),
}
