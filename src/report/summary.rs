//! Summary cards for a file selection.

use crate::report::style::{human_bytes, Palette};
use crate::summary::{FileCategory, FileStats};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, CellAlignment, Table};

/// Title shown above the summary.
pub fn summary_title(is_directory: bool) -> &'static str {
    if is_directory {
        "Directory Contents"
    } else {
        "Upload Summary"
    }
}

/// Format the per-category tally as a one-row table.
pub fn format_file_summary(stats: &FileStats, is_directory: bool, palette: &Palette) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", palette.heading(summary_title(is_directory))));

    let mut header = vec![Cell::new("Total Files")];
    let mut counts = vec![Cell::new(stats.total)];
    for category in FileCategory::ALL {
        header.push(palette.category_cell(category.label(), category));
        counts.push(Cell::new(stats.count(category)));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(header);
    table.add_row(counts);
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Center);
    }

    out.push_str(&format!("{}\n", table));
    out.push_str(&format!(
        "{}\n",
        palette.muted(&format!("Total size: {}", human_bytes(stats.total_bytes)))
    ));
    out
}
