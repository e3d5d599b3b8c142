pub(crate) mod color;
pub(crate) mod daily;
pub(crate) mod ledger;
pub(crate) mod types;

pub(crate) use color::{Color, ColorSource, RandomColors};
pub(crate) use daily::{DailyRun, RunOutcome};
pub(crate) use ledger::Ledger;
pub(crate) use types::ColorRecord;
