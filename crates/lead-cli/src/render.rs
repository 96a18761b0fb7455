//! Terminal tables and machine-readable output for classified leads.

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use lead_import::{BulkImportReport, ImportSummary};
use lead_model::{CanonicalField, ValidatedLead, ValidationStatus};
use lead_standards::Country;
use serde::Serialize;

/// Separator between multiple errors or warnings in a single cell.
pub const MESSAGE_SEPARATOR: &str = "; ";

/// JSON document written by `check --format json`.
#[derive(Debug, Serialize)]
pub struct LeadReport<'a> {
    pub summary: ImportSummary,
    pub leads: &'a [ValidatedLead],
}

/// One table row per lead, in file order.
pub fn lead_table(leads: &[ValidatedLead]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Country"),
        header_cell("Status"),
        header_cell("Messages"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    for lead in leads {
        table.add_row(vec![
            Cell::new(lead.row_index()),
            text_cell(&lead.lead.display_name()),
            text_cell(&lead.lead.email),
            optional_cell(lead.lead.country_code.as_deref()),
            status_cell(lead.status()),
            messages_cell(lead),
        ]);
    }
    table
}

/// Status counts with a total row.
pub fn summary_table(summary: &ImportSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Leads")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        status_cell(ValidationStatus::Valid),
        count_cell(summary.valid, Color::Green),
    ]);
    table.add_row(vec![
        status_cell(ValidationStatus::Warning),
        count_cell(summary.warning, Color::Yellow),
    ]);
    table.add_row(vec![
        status_cell(ValidationStatus::Invalid),
        count_cell(summary.invalid, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn country_table(countries: &[&Country]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Alpha-2"),
        header_cell("Alpha-3"),
        header_cell("Numeric"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);

    for country in countries {
        table.add_row(vec![
            Cell::new(&country.alpha2)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&country.alpha3),
            dim_cell(&country.numeric),
            Cell::new(&country.name),
        ]);
    }
    table
}

/// Counts from a bulk import followed by any per-lead failures.
pub fn import_report_table(report: &BulkImportReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Leads")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Imported"),
        count_cell(report.imported_count, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates skipped"),
        count_cell(report.duplicates_skipped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Incomplete"),
        count_cell(report.invalid_leads, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Failed"),
        count_cell(report.errors.len(), Color::Red),
    ]);

    for failure in &report.errors {
        let name = format!(
            "{} {}",
            failure.lead.first_name.as_deref().unwrap_or_default(),
            failure.lead.last_name.as_deref().unwrap_or_default()
        );
        table.add_row(vec![
            Cell::new(format!("  -> {}", name.trim())).fg(Color::DarkGrey),
            Cell::new(&failure.error).fg(Color::Red),
        ]);
    }
    table
}

/// Summary plus leads as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn leads_to_json(leads: &[ValidatedLead]) -> Result<String> {
    let report = LeadReport {
        summary: ImportSummary::from_leads(leads),
        leads,
    };
    serde_json::to_string_pretty(&report).context("serialize leads to JSON")
}

/// Leads as CSV with camelCase headers.
///
/// Absent optional fields are written as empty cells; errors and warnings
/// are joined with [`MESSAGE_SEPARATOR`].
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn leads_to_csv(leads: &[ValidatedLead]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = vec!["rowIndex"];
    header.extend(CanonicalField::ALL.iter().map(|field| field.header_name()));
    header.extend(["validationStatus", "errors", "warnings"]);
    writer.write_record(&header).context("write CSV header")?;

    for lead in leads {
        let row_index = lead.row_index().to_string();
        let mut record: Vec<&str> = vec![row_index.as_str()];
        record.extend(
            CanonicalField::ALL
                .iter()
                .map(|field| lead.lead.value(*field).unwrap_or_default()),
        );
        let errors = lead.errors().join(MESSAGE_SEPARATOR);
        let warnings = lead.warnings().join(MESSAGE_SEPARATOR);
        record.extend([lead.status().as_str(), errors.as_str(), warnings.as_str()]);
        writer
            .write_record(&record)
            .with_context(|| format!("write CSV row for line {}", lead.row_index()))?;
    }

    let bytes = writer.into_inner().context("flush CSV output")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 6 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: ValidationStatus) -> Cell {
    match status {
        ValidationStatus::Valid => Cell::new(status.label()).fg(Color::Green),
        ValidationStatus::Warning => Cell::new(status.label()).fg(Color::Yellow),
        ValidationStatus::Invalid => Cell::new(status.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn messages_cell(lead: &ValidatedLead) -> Cell {
    if lead.errors().is_empty() && lead.warnings().is_empty() {
        return dim_cell("-");
    }
    let lines: Vec<String> = lead
        .errors()
        .iter()
        .map(|error| format!("error: {error}"))
        .chain(
            lead.warnings()
                .iter()
                .map(|warning| format!("warning: {warning}")),
        )
        .collect();
    let color = if lead.errors().is_empty() {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(lines.join("\n")).fg(color)
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    text_cell(value.unwrap_or_default())
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
