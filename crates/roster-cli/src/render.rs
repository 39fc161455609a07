//! Terminal rendering of roster pages and store events.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use roster_core::{IgnoreReason, PageView, RosterEvent, RowView};
use roster_model::RecordId;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Print one page as a table, or as pretty JSON when `json` is set.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_page(view: &PageView, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", page_json(view)?);
    } else {
        println!("{}", header_line(view));
        println!("{}", page_table(view));
        println!("{}", page_bar(view));
    }
    Ok(())
}

pub fn page_json(view: &PageView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

/// Build the page table. Rows in edit mode show their draft values.
pub fn page_table(view: &PageView) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(checkbox(view.select_all)),
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Role"),
        header_cell("Mode"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Right);
    if view.rows.is_empty() {
        table.add_row(vec![
            dim_cell(""),
            dim_cell("-"),
            dim_cell("no records"),
            dim_cell(""),
            dim_cell(""),
            dim_cell(""),
        ]);
    }
    for row in &view.rows {
        table.add_row(row_cells(row));
    }
    table
}

fn row_cells(row: &RowView) -> Vec<Cell> {
    let shown = row.draft.as_ref().unwrap_or(&row.record);
    let mut cells = vec![
        Cell::new(checkbox(row.selected)),
        Cell::new(row.record.id.as_str()),
        Cell::new(&shown.name),
        Cell::new(&shown.email),
        Cell::new(&shown.role),
    ];
    if row.draft.is_some() {
        cells.push(
            Cell::new("editing")
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
        );
    } else {
        cells.push(dim_cell("-"));
    }
    if row.selected {
        cells = cells.into_iter().map(|cell| cell.fg(Color::Cyan)).collect();
    }
    cells
}

/// One-line summary above the table.
pub fn header_line(view: &PageView) -> String {
    let mut line = if view.query.is_empty() {
        format!("{} records", view.total_records)
    } else {
        format!(
            "{} of {} records match {:?}",
            view.matches, view.total_records, view.query
        )
    };
    if view.selected > 0 {
        let _ = write!(line, ", {} selected", view.selected);
    }
    line
}

/// Page bar with the current page in brackets, e.g. `Page 2 of 3: 1 [2] 3`.
pub fn page_bar(view: &PageView) -> String {
    let numbers: Vec<String> = view
        .page_numbers
        .iter()
        .map(|&number| {
            if number == view.page {
                format!("[{number}]")
            } else {
                number.to_string()
            }
        })
        .collect();
    format!(
        "Page {} of {}: {}",
        view.page,
        view.total_pages,
        numbers.join(" ")
    )
}

/// Human-readable message for an event, or `None` for events not worth printing.
pub fn describe_event(event: &RosterEvent) -> Option<String> {
    let message = match event {
        RosterEvent::Loaded { count } => format!("loaded {count} records"),
        RosterEvent::QueryChanged { matches } => format!("{matches} records match"),
        RosterEvent::FilterCleared => "search cleared by edit".to_string(),
        RosterEvent::PageChanged { page, total_pages } => format!("page {page} of {total_pages}"),
        RosterEvent::PageRejected {
            requested,
            total_pages,
        } => format!("page {requested} is out of range (1-{total_pages})"),
        RosterEvent::SelectionChanged { selected } => format!("{selected} selected"),
        RosterEvent::SelectionCleared => "selection cleared".to_string(),
        RosterEvent::DraftOpened(_) | RosterEvent::DraftUpdated { .. } => return None,
        RosterEvent::DraftClosed(id) => format!("record {id} left edit mode"),
        RosterEvent::RecordUpdated(id) => format!("record {id} updated"),
        RosterEvent::RecordsDeleted(ids) => {
            let ids: Vec<&str> = ids.iter().map(RecordId::as_str).collect();
            format!("deleted {}: {}", ids.len(), ids.join(", "))
        }
        RosterEvent::Ignored(IgnoreReason::UnknownRecord(id)) => {
            format!("ignored: no record with id {id}")
        }
        RosterEvent::Ignored(IgnoreReason::NoDraft(id)) => {
            format!("ignored: record {id} is not in edit mode")
        }
    };
    Some(message)
}

fn checkbox(checked: bool) -> &'static str {
    if checked { CHECKED } else { UNCHECKED }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Fixed(10)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ColumnConstraint::UpperBoundary(Width::Fixed(12)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
