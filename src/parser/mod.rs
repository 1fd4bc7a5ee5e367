//! Line-to-record parsing. Input lines have already been through the page
//! filter; this module turns each survivor into a [`StudentRecord`] or a
//! [`DropReason`], and tallies the drops for the run summary.

pub mod fields;

use serde::Serialize;
use tracing::debug;

use crate::layout::LayoutTemplate;
use crate::record::StudentRecord;

/// Why a line was rejected. Drops are a normal outcome of parsing noisy
/// extracted text, not errors; they surface in aggregate only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Header fragment that slipped past the page filter.
    ResidualHeader,
    /// Fewer than two whitespace-split tokens.
    TooFewTokens,
    /// Long digit lead token with no ten-digit suffix at prefix 1..=3.
    NoSplitFound,
    /// Short numeric lead but the second token is not a student number.
    StudentNoMismatch,
    /// First token is not numeric at all.
    NonNumericLead,
    /// Numbers parsed but no token was left for the surname.
    MissingSurname,
    /// Assembled record failed the mandatory-field check.
    MissingField,
}

/// Aggregate drop counts for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DropTally {
    pub residual_header: usize,
    pub too_few_tokens: usize,
    pub no_split_found: usize,
    pub student_no_mismatch: usize,
    pub non_numeric_lead: usize,
    pub missing_surname: usize,
    pub missing_field: usize,
}

impl DropTally {
    pub fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::ResidualHeader => self.residual_header += 1,
            DropReason::TooFewTokens => self.too_few_tokens += 1,
            DropReason::NoSplitFound => self.no_split_found += 1,
            DropReason::StudentNoMismatch => self.student_no_mismatch += 1,
            DropReason::NonNumericLead => self.non_numeric_lead += 1,
            DropReason::MissingSurname => self.missing_surname += 1,
            DropReason::MissingField => self.missing_field += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.residual_header
            + self.too_few_tokens
            + self.no_split_found
            + self.student_no_mismatch
            + self.non_numeric_lead
            + self.missing_surname
            + self.missing_field
    }

    /// (label, count) pairs for the reasons that actually fired.
    pub fn breakdown(&self) -> Vec<(&'static str, usize)> {
        [
            ("residual header", self.residual_header),
            ("too few tokens", self.too_few_tokens),
            ("no split position", self.no_split_found),
            ("student number mismatch", self.student_no_mismatch),
            ("non-numeric lead token", self.non_numeric_lead),
            ("missing surname", self.missing_surname),
            ("missing mandatory field", self.missing_field),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect()
    }
}

#[derive(Debug)]
pub struct ParseOutcome {
    pub records: Vec<StudentRecord>,
    pub drops: DropTally,
}

/// Parse a batch of candidate lines in document order.
pub fn parse_lines(lines: &[String], template: &LayoutTemplate) -> ParseOutcome {
    let mut records = Vec::new();
    let mut drops = DropTally::default();
    for line in lines {
        match parse_line(line, template) {
            Ok(record) => records.push(record),
            Err(reason) => {
                debug!(line = %line, reason = ?reason, "line dropped");
                drops.record(reason);
            }
        }
    }
    ParseOutcome { records, drops }
}

/// Parse one candidate line into a record.
///
/// Token layout is `<seq> <student_no> <surname> [names...] [id]`, except
/// that the first two numbers sometimes arrive fused into a single token.
/// The rightmost NRC/passport-shaped token is the id; tokens between the
/// surname and the id are names, tokens after the id are discarded.
pub fn parse_line(line: &str, template: &LayoutTemplate) -> Result<StudentRecord, DropReason> {
    let line = line.trim();

    // Header fragments can survive the page filter when extraction glues
    // them onto other text. A marker word plus a digit-free lead token is
    // a header; a data row always leads with a digit.
    if template.residual_markers.iter().any(|m| line.contains(m)) {
        let lead = line.split_whitespace().next().unwrap_or("");
        if !fields::has_digit(lead) {
            return Err(DropReason::ResidualHeader);
        }
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(DropReason::TooFewTokens);
    }

    let first = tokens[0];
    let (sequence_no, student_no, rest) = if fields::is_digits(first) && first.len() >= 10 {
        match fields::split_combined(first) {
            Some((seq, stud)) => (seq, stud, &tokens[1..]),
            None => return Err(DropReason::NoSplitFound),
        }
    } else if fields::is_digits(first) {
        if fields::is_student_no(tokens[1]) {
            (first.to_string(), tokens[1].to_string(), &tokens[2..])
        } else {
            return Err(DropReason::StudentNoMismatch);
        }
    } else {
        return Err(DropReason::NonNumericLead);
    };

    let Some((surname, rest)) = rest.split_first() else {
        return Err(DropReason::MissingSurname);
    };

    let (name_tokens, id_or_passport) =
        match rest.iter().rposition(|t| fields::is_id_or_passport(t)) {
            Some(i) => (&rest[..i], rest[i].to_string()),
            None => (rest, String::new()),
        };

    let first_name = name_tokens.first().map(|t| t.to_string()).unwrap_or_default();
    let other_names = name_tokens.get(1..).unwrap_or(&[]).join(" ");

    let record = StudentRecord {
        sequence_no,
        student_no,
        surname: surname.to_string(),
        other_names,
        first_name,
        id_or_passport,
    };
    if !record.is_valid() {
        return Err(DropReason::MissingField);
    }
    Ok(record)
}
