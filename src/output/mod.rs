mod format;
mod json;
mod table;

pub(crate) use json::{output_outcome_json, output_records_json};
pub(crate) use table::{LedgerTableOptions, print_ledger_table};
