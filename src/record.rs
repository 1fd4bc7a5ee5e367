use serde::Serialize;

/// One enrollment row, in output column order. `other_names` and
/// `id_or_passport` are empty when the line did not carry them; the first
/// three fields are guaranteed non-empty for every record the parser keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub sequence_no: String,
    pub student_no: String,
    pub surname: String,
    pub other_names: String,
    pub first_name: String,
    pub id_or_passport: String,
}

impl StudentRecord {
    /// Sequence number, student number and surname are mandatory.
    pub fn is_valid(&self) -> bool {
        !self.sequence_no.is_empty() && !self.student_no.is_empty() && !self.surname.is_empty()
    }
}
