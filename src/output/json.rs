use serde_json::{Value, json};

use crate::cli::SortOrder;
use crate::consts::DATE_FORMAT;
use crate::core::{ColorRecord, RunOutcome};
use crate::error::AppError;
use crate::output::table::sort_records;

fn record_json(record: &ColorRecord) -> Value {
    json!({
        "date": record.date_key(),
        "hex": record.hex(),
        "rgb": record.color.rgb(),
        "caption": record.caption,
        "image": record.image_path,
    })
}

pub(crate) fn output_records_json(
    records: &[ColorRecord],
    order: SortOrder,
) -> Result<String, AppError> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted, order);
    let values: Vec<Value> = sorted.iter().map(record_json).collect();
    Ok(serde_json::to_string_pretty(&values)?)
}

pub(crate) fn output_outcome_json(outcome: &RunOutcome, site_rebuilt: bool) -> Result<String, AppError> {
    let value = match outcome {
        RunOutcome::Skipped { date } => json!({
            "status": "skipped",
            "date": date.format(DATE_FORMAT).to_string(),
            "site_rebuilt": site_rebuilt,
        }),
        RunOutcome::Generated(record) => {
            let mut value = record_json(record);
            value["status"] = json!("generated");
            value["site_rebuilt"] = json!(site_rebuilt);
            value
        }
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
