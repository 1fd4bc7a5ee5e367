use thiserror::Error;

/// Failures at the two external surfaces: the source PDF and the output
/// workbook. Everything between them (filtering, parsing, searching) is
/// infallible and reports through counts instead.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to load PDF: {0}")]
    PdfLoad(#[from] lopdf::Error),

    #[error("failed to build or save workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, RosterError>;
