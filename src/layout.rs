/// Everything that is specific to one institution's list format: the marker
/// strings that identify non-data lines in the PDF and the shape of the
/// workbook that gets written. Pointing the pipeline at a differently
/// formatted list means swapping this template, not the parsing code.
#[derive(Debug, Clone, Copy)]
pub struct LayoutTemplate {
    /// A column-header line contains every one of these.
    pub header_markers: [&'static str; 3],
    /// A banner or title line contains any one of these.
    pub banner_markers: &'static [&'static str],
    /// Status lines dropped on exact match after lowercasing.
    pub status_tokens: &'static [&'static str],
    /// Parser re-check for header fragments that survived extraction.
    pub residual_markers: &'static [&'static str],
    /// Upper bound for the bare-page-number filter.
    pub max_page_number: u32,
    pub sheet_name: &'static str,
    pub title: &'static str,
    pub column_labels: [&'static str; 6],
    pub column_widths: [f64; 6],
}

pub const DEFAULT_TEMPLATE: LayoutTemplate = LayoutTemplate {
    header_markers: ["NO.", "STUDENT", "SURNAME"],
    banner_markers: &["THE UNIVERSITY", "BACHELOR", "GENDER"],
    status_tokens: &["regular", "male", "female"],
    residual_markers: &[
        "NO.",
        "STUDENT",
        "GENDER",
        "THE UNIVERSITY",
        "BACHELOR",
        "REGULAR",
        "MALE",
        "FEMALE",
    ],
    max_page_number: 50,
    sheet_name: "Student List",
    title: "STUDENT ENROLLMENT LIST",
    column_labels: [
        "NO.",
        "STUDENT NO.",
        "SURNAME",
        "OTHER NAMES",
        "FIRST NAME",
        "NRC/PASSPORT",
    ],
    column_widths: [8.0, 14.0, 16.0, 20.0, 14.0, 18.0],
};
