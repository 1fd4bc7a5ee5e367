//! PDF text extraction and first-stage line filtering.

use std::path::Path;

use lopdf::Document;
use tracing::{info, warn};

use crate::error::Result;
use crate::layout::LayoutTemplate;

/// Surviving candidate lines plus page accounting for the run summary.
#[derive(Debug)]
pub struct ExtractedLines {
    pub lines: Vec<String>,
    pub pages_scanned: usize,
    pub pages_unreadable: usize,
}

/// Load the enrollment PDF and pull out candidate data lines.
pub fn read_lines(path: impl AsRef<Path>, template: &LayoutTemplate) -> Result<ExtractedLines> {
    let doc = Document::load(path.as_ref())?;
    Ok(lines_from_document(&doc, template))
}

/// Walk every page after the first. Page 1 is the cover and never holds
/// data; a page whose text cannot be decoded contributes nothing and the
/// run keeps going.
pub fn lines_from_document(doc: &Document, template: &LayoutTemplate) -> ExtractedLines {
    let mut lines = Vec::new();
    let mut pages_scanned = 0usize;
    let mut pages_unreadable = 0usize;

    for (&page_no, _) in doc.get_pages().iter().skip(1) {
        pages_scanned += 1;
        match doc.extract_text(&[page_no]) {
            Ok(text) => lines.extend(filter_page_lines(&text, template)),
            Err(err) => {
                warn!(page_no, error = %err, "page text extraction failed, skipping page");
                pages_unreadable += 1;
            }
        }
    }

    info!(pages_scanned, lines = lines.len(), "extraction complete");
    ExtractedLines {
        lines,
        pages_scanned,
        pages_unreadable,
    }
}

/// Keep only lines that could be data rows: drop blanks, the column header,
/// institutional banners, bare page numbers and status markers.
pub fn filter_page_lines(text: &str, template: &LayoutTemplate) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_skippable(line, template))
        .map(str::to_string)
        .collect()
}

fn is_skippable(line: &str, template: &LayoutTemplate) -> bool {
    if template.header_markers.iter().all(|m| line.contains(m)) {
        return true;
    }
    if template.banner_markers.iter().any(|m| line.contains(m)) {
        return true;
    }
    if is_page_number(line, template.max_page_number) {
        return true;
    }
    let lower = line.to_lowercase();
    template.status_tokens.iter().any(|t| *t == lower)
}

/// A bare page number is all digits and small. Digit runs too long for a
/// u32 are fused student numbers, not page numbers.
fn is_page_number(line: &str, max: u32) -> bool {
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(line.parse::<u32>(), Ok(n) if (1..=max).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DEFAULT_TEMPLATE;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    #[test]
    fn filter_drops_banner_header_status_and_blank_lines() {
        let text = "THE UNIVERSITY OF LUSAKA\nBACHELOR OF ARTS WITH EDUCATION\nNO.  STUDENT NO.  SURNAME  OTHER NAMES\n\n1 2016000001 BANDA GRACE\nRegular\nFEMALE\n3\n";
        assert_eq!(
            filter_page_lines(text, &DEFAULT_TEMPLATE),
            ["1 2016000001 BANDA GRACE"]
        );
    }

    #[test]
    fn filter_trims_and_splits_crlf() {
        let text = "  1 2016000001 BANDA GRACE \r\n2 2016000002 PHIRI JAMES\r\n";
        assert_eq!(
            filter_page_lines(text, &DEFAULT_TEMPLATE),
            ["1 2016000001 BANDA GRACE", "2 2016000002 PHIRI JAMES"]
        );
    }

    #[test]
    fn page_number_filter_is_bounded() {
        assert!(filter_page_lines("7\n", &DEFAULT_TEMPLATE).is_empty());
        assert!(filter_page_lines("07\n", &DEFAULT_TEMPLATE).is_empty());
        assert_eq!(filter_page_lines("0\n", &DEFAULT_TEMPLATE), ["0"]);
        assert_eq!(filter_page_lines("51\n", &DEFAULT_TEMPLATE), ["51"]);
        // Too long for a u32, so it is data, not a page number.
        assert_eq!(
            filter_page_lines("322016138632\n", &DEFAULT_TEMPLATE),
            ["322016138632"]
        );
    }

    #[test]
    fn status_match_is_exact_after_lowercasing() {
        assert!(filter_page_lines("Regular\n", &DEFAULT_TEMPLATE).is_empty());
        assert!(filter_page_lines("MALE\n", &DEFAULT_TEMPLATE).is_empty());
        // Equality, not substring: a longer line survives this filter.
        assert_eq!(
            filter_page_lines("REGULAR STUDENT\n", &DEFAULT_TEMPLATE),
            ["REGULAR STUDENT"]
        );
    }

    fn make_doc(pages: &[&[&str]]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for lines in pages {
            let mut operations = Vec::new();
            for (i, line) in lines.iter().enumerate() {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("Tf", vec!["F1".into(), 11.into()]));
                operations.push(Operation::new(
                    "Td",
                    vec![50.into(), (760 - 14 * i as i64).into()],
                ));
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
                operations.push(Operation::new("ET", vec![]));
            }
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn extract_roundtrip(pages: &[&[&str]]) -> ExtractedLines {
        let mut doc = make_doc(pages);
        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        let loaded = Document::load_mem(&buf).unwrap();
        lines_from_document(&loaded, &DEFAULT_TEMPLATE)
    }

    #[test]
    fn cover_page_is_skipped_and_noise_filtered() {
        let pages: &[&[&str]] = &[
            &["THE UNIVERSITY OF LUSAKA", "9 2016999999 COVER ROW"],
            &[
                "THE UNIVERSITY OF LUSAKA",
                "BACHELOR OF ARTS WITH EDUCATION",
                "NO.  STUDENT NO.  SURNAME  OTHER NAMES",
                "1 2016000001 BANDA GRACE",
                "322016138632 MWANZA JOHN BANDA",
                "Regular",
                "2",
            ],
        ];
        let extracted = extract_roundtrip(pages);
        assert_eq!(
            extracted.lines,
            ["1 2016000001 BANDA GRACE", "322016138632 MWANZA JOHN BANDA"]
        );
        assert_eq!(extracted.pages_scanned, 1);
        assert_eq!(extracted.pages_unreadable, 0);
    }

    #[test]
    fn single_page_document_yields_nothing() {
        let extracted = extract_roundtrip(&[&["1 2016000001 BANDA GRACE"]]);
        assert!(extracted.lines.is_empty());
        assert_eq!(extracted.pages_scanned, 0);
    }
}
