use prettytable::{format, Cell, Row as TableRow, Table};

use super::TableView;

/// Terminal table of the snapshot. Action controls have no terminal
/// counterpart; the CLI subcommands stand in for them.
pub fn table(view: &TableView) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(TableRow::new(
        view.header().iter().map(|title| Cell::new(title)).collect(),
    ));
    for row in &view.rows {
        table.add_row(TableRow::new(
            row.cells.iter().map(|cell| Cell::new(cell)).collect(),
        ));
    }
    table
}
