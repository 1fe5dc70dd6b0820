//! Timesheet export.
//!
//! Renders a [`MonthTable`] to a file. Excel output has a timesheet sheet
//! (one row per day, hours split across the export columns, week numbers
//! merged over their days, totals underneath) and a details sheet with one
//! row per shift. CSV carries the same timesheet as plain rows, JSON the same
//! data as a structured document.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftbook::libs::export::{ExportFormat, Exporter};
//! use shiftbook::libs::month::MonthDocument;
//! use shiftbook::libs::projection::MonthTable;
//!
//! let doc = MonthDocument::new(2025, 1);
//! let table = MonthTable::project(&doc, &["Ann".to_string(), "Bob".to_string()]);
//! let exporter = Exporter::new(ExportFormat::Excel, None, 2025, 1);
//! exporter.export(&table, "Timesheet")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::formatter::format_decimal;
use super::month::{date_key, month_key};
use super::projection::{DayRow, MonthTable};
use anyhow::Result;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Timesheet";

const TIMESHEET_SHEET: &str = "Timesheet";
const DETAILS_SHEET: &str = "Details";
const HOURS_FORMAT: &str = "0.00";

/// Output format of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    /// `.xlsx` workbook with a timesheet and a details sheet.
    #[default]
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportMonth {
    pub title: String,
    pub month: String,
    pub columns: Vec<String>,
    pub days: Vec<ExportDay>,
    pub column_hours: Vec<f64>,
    pub column_counts: Vec<usize>,
    pub total_hours: f64,
    pub shifts: Vec<ExportShift>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDay {
    pub date: String,
    pub week: u32,
    pub weekday: String,
    pub hours: Vec<f64>,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportShift {
    pub date: String,
    pub start: String,
    pub end: String,
    pub break_minutes: u32,
    pub hours: f64,
    #[serde(rename = "type")]
    pub shift_type: String,
    pub note: String,
    pub column: String,
}

impl ExportMonth {
    pub fn from_table(table: &MonthTable, title: &str) -> Self {
        Self {
            title: title.to_string(),
            month: month_key(table.year, table.month),
            columns: table.columns.clone(),
            days: table
                .rows
                .iter()
                .map(|row| ExportDay {
                    date: date_key(row.date),
                    week: row.week,
                    weekday: row.weekday.clone(),
                    hours: row.hours.clone(),
                    notes: row.notes.clone(),
                })
                .collect(),
            column_hours: table.column_hours.clone(),
            column_counts: table.column_counts.clone(),
            total_hours: table.total_hours,
            shifts: table
                .detail_rows()
                .iter()
                .map(|detail| ExportShift {
                    date: date_key(detail.date),
                    start: detail.start.clone(),
                    end: detail.end.clone(),
                    break_minutes: detail.break_minutes,
                    hours: detail.hours,
                    shift_type: detail.shift_type.clone(),
                    note: detail.note.clone(),
                    column: detail.column.clone(),
                })
                .collect(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Exporter writing to `output_path`, or to `shiftbook_YYYY-MM.<ext>` in
    /// the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, year: i32, month: u32) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_file_name(format, year, month)));
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the table and returns the path of the created file.
    pub fn export(&self, table: &MonthTable, title: &str) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.export_csv(table)?,
            ExportFormat::Json => self.export_json(table, title)?,
            ExportFormat::Excel => self.export_excel(table, title)?,
        }
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, table: &MonthTable) -> Result<()> {
        let width = table.columns.len() + 4;
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(header_labels(table))?;
        for row in &table.rows {
            let mut record = vec![row.week.to_string(), row.day().to_string(), row.weekday.clone()];
            record.extend(row.hours.iter().map(|h| format_decimal(*h)));
            record.push(row.notes.clone());
            wtr.write_record(&record)?;
        }

        let mut totals = vec!["Total hours".to_string(), String::new(), String::new()];
        totals.extend(table.column_hours.iter().map(|h| format_decimal(*h)));
        totals.push(String::new());
        wtr.write_record(&totals)?;

        let mut counts = vec!["Shifts".to_string(), String::new(), String::new()];
        counts.extend(table.column_counts.iter().map(|c| c.to_string()));
        counts.push(String::new());
        wtr.write_record(&counts)?;

        let mut grand_total = vec![String::new(); width];
        grand_total[0] = "Grand total".to_string();
        grand_total[3] = format_decimal(table.total_hours);
        wtr.write_record(&grand_total)?;

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, table: &MonthTable, title: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&ExportMonth::from_table(table, title))?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, table: &MonthTable, title: &str) -> Result<()> {
        let mut workbook = Workbook::new();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(TIMESHEET_SHEET)?;
        write_timesheet(worksheet, table, title)?;

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(DETAILS_SHEET)?;
        write_details(worksheet, table)?;

        workbook.save(&self.output_path)?;
        Ok(())
    }
}

pub fn default_file_name(format: ExportFormat, year: i32, month: u32) -> String {
    format!("shiftbook_{}.{}", month_key(year, month), format.extension())
}

fn header_labels(table: &MonthTable) -> Vec<String> {
    let mut labels = vec!["Week".to_string(), "Day".to_string(), "Weekday".to_string()];
    labels.extend(table.columns.iter().cloned());
    labels.push("Notes".to_string());
    labels
}

fn write_timesheet(worksheet: &mut Worksheet, table: &MonthTable, title: &str) -> Result<()> {
    let title_format = Format::new().set_bold().set_font_size(14.0);
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::Gray)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let week_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let cell_format = Format::new().set_border(FormatBorder::Thin);
    let hours_format = Format::new().set_border(FormatBorder::Thin).set_num_format(HOURS_FORMAT);
    let total_label_format = Format::new().set_bold().set_border(FormatBorder::Medium);
    let total_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Medium)
        .set_num_format(HOURS_FORMAT);

    let first_hours_col: u16 = 3;
    let notes_col = first_hours_col + table.columns.len() as u16;

    worksheet.write_string_with_format(0, 0, format!("{} - {}", title, month_key(table.year, table.month)), &title_format)?;

    for (col, label) in header_labels(table).iter().enumerate() {
        worksheet.write_string_with_format(2, col as u16, label, &header_format)?;
    }

    let first_row: u32 = 3;
    for (index, row) in table.rows.iter().enumerate() {
        let excel_row = first_row + index as u32;
        write_day_row(worksheet, excel_row, row, first_hours_col, &cell_format, &hours_format)?;
        worksheet.write_string_with_format(excel_row, notes_col, &row.notes, &cell_format)?;
    }

    for week in table.weeks() {
        let start = first_row + *week.start() as u32;
        let end = first_row + *week.end() as u32;
        let label = table.rows[*week.start()].week.to_string();
        if start == end {
            worksheet.write_string_with_format(start, 0, &label, &week_format)?;
        } else {
            worksheet.merge_range(start, 0, end, 0, &label, &week_format)?;
        }
    }

    let totals_row = first_row + table.rows.len() as u32;
    worksheet.write_string_with_format(totals_row, 0, "Total hours", &total_label_format)?;
    worksheet.write_string_with_format(totals_row + 1, 0, "Shifts", &total_label_format)?;
    worksheet.write_string_with_format(totals_row + 2, 0, "Grand total", &total_label_format)?;
    for (offset, (hours, count)) in table.column_hours.iter().zip(&table.column_counts).enumerate() {
        let col = first_hours_col + offset as u16;
        worksheet.write_number_with_format(totals_row, col, *hours, &total_format)?;
        worksheet.write_number_with_format(totals_row + 1, col, *count as f64, &total_label_format)?;
    }
    worksheet.write_number_with_format(totals_row + 2, first_hours_col, table.total_hours, &total_format)?;

    worksheet.autofit();
    Ok(())
}

fn write_day_row(
    worksheet: &mut Worksheet,
    excel_row: u32,
    row: &DayRow,
    first_hours_col: u16,
    cell_format: &Format,
    hours_format: &Format,
) -> Result<()> {
    worksheet.write_number_with_format(excel_row, 1, row.day() as f64, cell_format)?;
    worksheet.write_string_with_format(excel_row, 2, &row.weekday, cell_format)?;
    for (offset, hours) in row.hours.iter().enumerate() {
        let col = first_hours_col + offset as u16;
        if *hours > 0.0 {
            worksheet.write_number_with_format(excel_row, col, *hours, hours_format)?;
        } else {
            worksheet.write_blank(excel_row, col, hours_format)?;
        }
    }
    Ok(())
}

fn write_details(worksheet: &mut Worksheet, table: &MonthTable) -> Result<()> {
    let header_format = Format::new().set_bold().set_background_color(Color::Gray);
    let hours_format = Format::new().set_num_format(HOURS_FORMAT);

    let headers = ["Date", "Start", "End", "Break (min)", "Hours", "Type", "Column", "Note"];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, detail) in table.detail_rows().iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string(row, 0, date_key(detail.date))?;
        worksheet.write_string(row, 1, &detail.start)?;
        worksheet.write_string(row, 2, &detail.end)?;
        worksheet.write_number(row, 3, detail.break_minutes as f64)?;
        worksheet.write_number_with_format(row, 4, detail.hours, &hours_format)?;
        worksheet.write_string(row, 5, &detail.shift_type)?;
        worksheet.write_string(row, 6, &detail.column)?;
        worksheet.write_string(row, 7, &detail.note)?;
    }

    worksheet.autofit();
    Ok(())
}
