use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::Color as Rgb;

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Solid block painted in the record's own color
pub(super) fn swatch_cell(color: Rgb, use_color: bool) -> Cell {
    if use_color {
        Cell::new("████").fg(Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        })
    } else {
        Cell::new("")
    }
}

/// "26, 43, 60"
pub(super) fn format_rgb(color: Rgb) -> String {
    let [r, g, b] = color.rgb();
    format!("{r}, {g}, {b}")
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rgb_separates_channels() {
        assert_eq!(format_rgb(Rgb::new(26, 43, 60)), "26, 43, 60");
        assert_eq!(format_rgb(Rgb::BLACK), "0, 0, 0");
    }

    #[test]
    fn swatch_cell_is_blank_without_color() {
        assert_eq!(swatch_cell(Rgb::WHITE, false).content(), "");
        assert_eq!(swatch_cell(Rgb::WHITE, true).content(), "████");
    }
}
