use serde::{Deserialize, Serialize};

/// One concept row read from the fixed data range of a catalogue sheet.
/// The OID is kept unresolved here; resolution against the code-system
/// lookup happens when the FSH document is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRow {
    pub oid: String,
    pub code: String,
    pub description: String,
}

/// Everything extracted from one qualifying catalogue sheet, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSetSheet {
    /// Worksheet name; also the stem of the output file.
    pub sheet_name: String,
    /// Name read from the fixed name cell, trimmed. Falls back to
    /// [`crate::sheet::UNKNOWN_VALUE_SET`] when the cell is blank.
    pub value_set_name: String,
    pub concepts: Vec<ConceptRow>,
}

impl ValueSetSheet {
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }
}
