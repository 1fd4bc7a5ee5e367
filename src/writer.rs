//! Workbook rendering. Layout mirrors the published lists: a merged title
//! band, a spacer row, a styled header row, then one bordered row per
//! record with the header and title frozen above an autofilter.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use tracing::info;

use crate::error::Result;
use crate::layout::LayoutTemplate;
use crate::record::StudentRecord;

const HEADER_ROW: u32 = 2;
const FIRST_DATA_ROW: u32 = 3;

const TITLE_FILL: u32 = 0x20_38_64;
const HEADER_FILL: u32 = 0x36_60_92;

const TITLE_ROW_HEIGHT: u32 = 30;
const HEADER_ROW_HEIGHT: u32 = 25;
const DATA_ROW_HEIGHT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Workbook saved with this many data rows.
    Written(usize),
    /// Empty roster; no file was produced.
    NoData,
}

/// Render the roster into a styled workbook at `path`. An empty record
/// list writes nothing at all rather than an empty shell.
pub fn save_roster(
    path: impl AsRef<Path>,
    records: &[StudentRecord],
    template: &LayoutTemplate,
) -> Result<WriteOutcome> {
    if records.is_empty() {
        return Ok(WriteOutcome::NoData);
    }
    let mut workbook = build_workbook(records, template)?;
    workbook.save(path.as_ref())?;
    info!(records = records.len(), path = %path.as_ref().display(), "workbook saved");
    Ok(WriteOutcome::Written(records.len()))
}

/// Construction is separate from saving so tests can render to a buffer.
fn build_workbook(records: &[StudentRecord], template: &LayoutTemplate) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(template.sheet_name)?;

    let title_format = Format::new()
        .set_font_name("Calibri")
        .set_font_size(14)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(TITLE_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    let header_format = Format::new()
        .set_font_name("Calibri")
        .set_font_size(11)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::Black);

    let data_format = Format::new()
        .set_font_name("Calibri")
        .set_font_size(10)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::Black);

    let last_col = (template.column_labels.len() - 1) as u16;

    worksheet.merge_range(0, 0, 0, last_col, template.title, &title_format)?;
    worksheet.set_row_height(0, TITLE_ROW_HEIGHT)?;

    for (col, width) in template.column_widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (col, label) in template.column_labels.iter().enumerate() {
        worksheet.write_string_with_format(HEADER_ROW, col as u16, *label, &header_format)?;
    }
    worksheet.set_row_height(HEADER_ROW, HEADER_ROW_HEIGHT)?;

    for (i, record) in records.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;
        worksheet.set_row_height(row, DATA_ROW_HEIGHT)?;
        let cells = [
            record.sequence_no.as_str(),
            record.student_no.as_str(),
            record.surname.as_str(),
            record.other_names.as_str(),
            record.first_name.as_str(),
            record.id_or_passport.as_str(),
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *value, &data_format)?;
        }
    }

    // Title, spacer and header stay pinned; the filter spans header + data.
    worksheet.set_freeze_panes(FIRST_DATA_ROW, 0)?;
    worksheet.autofilter(HEADER_ROW, 0, HEADER_ROW + records.len() as u32, last_col)?;

    Ok(workbook)
}
