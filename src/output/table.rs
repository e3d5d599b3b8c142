use comfy_table::Cell;

use crate::cli::SortOrder;
use crate::core::ColorRecord;
use crate::output::format::{create_styled_table, format_rgb, header_cell, swatch_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct LedgerTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
}

pub(crate) fn sort_records(records: &mut [ColorRecord], order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => records.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

pub(crate) fn render_ledger_table(records: &[ColorRecord], opts: LedgerTableOptions) -> String {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", c),
        header_cell("", c),
        header_cell("Hex", c),
        header_cell("RGB", c),
        header_cell("Caption", c),
        header_cell("Image", c),
    ]);

    let mut sorted = records.to_vec();
    sort_records(&mut sorted, opts.order);
    for record in &sorted {
        table.add_row(vec![
            Cell::new(record.date_key()),
            swatch_cell(record.color, c),
            Cell::new(record.hex()),
            Cell::new(format_rgb(record.color)),
            Cell::new(&record.caption),
            Cell::new(&record.image_path),
        ]);
    }
    table.to_string()
}

pub(crate) fn print_ledger_table(records: &[ColorRecord], opts: LedgerTableOptions) {
    println!("{}", render_ledger_table(records, opts));
    let noun = if records.len() == 1 { "color" } else { "colors" };
    println!("\n  {} {noun} recorded\n", records.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use chrono::NaiveDate;

    fn record(d: u32, hex: &str) -> ColorRecord {
        ColorRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            Color::from_hex(hex).unwrap(),
            "Auto generated color",
        )
    }

    #[test]
    fn sort_records_by_date() {
        let mut records = vec![record(16, "#000000"), record(14, "#111111"), record(15, "#222222")];
        sort_records(&mut records, SortOrder::Asc);
        let days: Vec<_> = records.iter().map(ColorRecord::date_key).collect();
        assert_eq!(days, ["2024-03-14", "2024-03-15", "2024-03-16"]);

        sort_records(&mut records, SortOrder::Desc);
        assert_eq!(records[0].date_key(), "2024-03-16");
    }

    #[test]
    fn table_lists_every_record() {
        let records = vec![record(15, "#1A2B3C"), record(14, "#FFFFFF")];
        let out = render_ledger_table(
            &records,
            LedgerTableOptions {
                order: SortOrder::Asc,
                use_color: false,
            },
        );
        assert!(out.contains("#1A2B3C"));
        assert!(out.contains("26, 43, 60"));
        assert!(out.contains("images/2024-03-14.png"));
        assert!(out.find("2024-03-14").unwrap() < out.find("2024-03-15").unwrap());
    }
}
