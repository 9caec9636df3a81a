use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use evreg_export::{CellValue, ExportReport};
use evreg_model::{EventTeamPolicy, RegistrationStats};
use evreg_rules::{EventForm, FieldKind, SubmissionOutcome};

/// Registrations listed before the export preview is cut off.
const PREVIEW_ROWS: usize = 5;

const PREVIEW_COLUMNS: [&str; 4] = ["Full Name", "Email ID", "College/University", "Team Name"];

pub fn print_policy(event_title: &str, policy: &EventTeamPolicy, form: Option<&EventForm>) {
    println!("Event: {event_title}");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Value")]);
    apply_table_style(&mut table);
    let sizes = policy
        .selectable_sizes()
        .map(|size| size.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec![Cell::new("Team required"), flag_cell(policy.require_team)]);
    table.add_row(vec![Cell::new("Participation toggle"), flag_cell(policy.allow_toggle)]);
    table.add_row(vec![Cell::new("Minimum size"), bound_cell(policy.min_size)]);
    table.add_row(vec![Cell::new("Maximum size"), bound_cell(policy.max_size)]);
    table.add_row(vec![Cell::new("Selectable sizes"), Cell::new(sizes)]);
    table.add_row(vec![Cell::new("Size locked"), flag_cell(policy.size_locked())]);
    println!("{table}");

    let Some(form) = form else {
        println!("No event-specific fields.");
        return;
    };
    println!();
    println!("{}", form.heading);
    if let Some(note) = form.note {
        println!("{note}");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Input"),
        header_cell("Required"),
        header_cell("Max length"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for field in form.fields {
        table.add_row(vec![
            Cell::new(field.key),
            Cell::new(field.label),
            Cell::new(kind_label(field.kind)),
            flag_cell(field.required),
            field.max_len.map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
}

pub fn print_submission(outcome: &SubmissionOutcome) {
    println!(
        "Registration submitted: {}",
        outcome.receipt.registration_id
    );
    let record = &outcome.record;
    let team = match &record.team_name {
        Some(name) => format!("{name} ({} members)", record.team_size),
        None => "Individual".to_string(),
    };
    println!("Team: {team}");
    println!("{}", outcome.payment.message());
}

pub fn print_export(report: &ExportReport) {
    println!("Exported: {}", report.path.display());
    println!(
        "Registrations: {}  Columns: {}  Format: {}",
        report.row_count, report.column_count, report.format
    );

    let headers = report.table.headers();
    let positions: Vec<Option<usize>> = PREVIEW_COLUMNS
        .iter()
        .map(|label| headers.iter().position(|header| header == label))
        .collect();
    let mut preview = Table::new();
    preview.set_header(vec![
        header_cell("Name"),
        header_cell("Email"),
        header_cell("College"),
        header_cell("Team"),
    ]);
    apply_table_style(&mut preview);
    for cells in report.table.rows().iter().take(PREVIEW_ROWS) {
        preview.add_row(
            positions
                .iter()
                .map(|position| {
                    position
                        .and_then(|index| cells.get(index))
                        .and_then(Option::as_ref)
                        .map_or_else(|| dim_cell("-"), |value| Cell::new(value.to_string()))
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{preview}");
    if report.row_count > PREVIEW_ROWS {
        println!(
            "+ {} more registrations (included in export)",
            report.row_count - PREVIEW_ROWS
        );
    }

    println!();
    println!("Summary:");
    let mut summary = Table::new();
    summary.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut summary);
    align_column(&mut summary, 1, CellAlignment::Right);
    for entry in report.summary.sheet_rows() {
        match entry {
            Some((metric, CellValue::Text(text))) if text.is_empty() => {
                summary.add_row(vec![
                    Cell::new(metric).add_attribute(Attribute::Bold),
                    Cell::new(""),
                ]);
            }
            Some((metric, value)) => {
                summary.add_row(vec![Cell::new(metric), Cell::new(value.to_string())]);
            }
            None => {}
        }
    }
    println!("{summary}");
}

pub fn print_stats(event_id: &str, stats: &RegistrationStats) {
    println!("Event: {event_id}");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total registrations"), Cell::new(stats.total_count)]);
    table.add_row(vec![Cell::new("Recent registrations"), Cell::new(stats.recent_count)]);
    table.add_row(vec![Cell::new("Team registrations"), Cell::new(stats.team_count)]);
    table.add_row(vec![
        Cell::new("Individual registrations"),
        Cell::new(stats.individual_count),
    ]);
    println!("{table}");

    if stats.top_institutions.is_empty() {
        return;
    }
    println!();
    println!("Top institutions:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Institution"), header_cell("Registrations")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for institution in &stats.top_institutions {
        table.add_row(vec![
            Cell::new(&institution.name),
            Cell::new(institution.count),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_label(kind: FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::LongText => "long text".to_string(),
        FieldKind::Choice(options) => format!("one of: {}", options.join(", ")),
        FieldKind::Checkbox => "checkbox".to_string(),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("no")
    }
}

fn bound_cell(bound: Option<u32>) -> Cell {
    bound.map_or_else(|| dim_cell("-"), Cell::new)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
