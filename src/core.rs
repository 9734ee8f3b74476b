pub mod average;
pub mod error;
pub mod search;
pub mod sequence;
pub mod weekly;

pub use self::{
    average::{MonthlyAverage, average_daily_consumption},
    error::Error,
    search::{SWITCH_PENALTY, find_optimal_sequence},
    sequence::{OptimalSequence, Visit},
    weekly::{HORIZON_DAYS, WeeklyConsumptionTable},
};
