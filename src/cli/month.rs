use clap::Parser;

#[derive(Copy, Clone, Parser)]
pub struct MonthArgs {
    /// Month number, from 1 to 12.
    #[clap(long, env = "MONTH", value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,
}
