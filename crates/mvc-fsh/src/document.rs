//! FSH value-set document assembly and rendering.

use mvc_model::sheet::UNKNOWN_CODE_SYSTEM;
use mvc_model::{AnomalyLog, MvcMetadata, ValueSetMeta, ValueSetSheet, normalize_quotes};

/// Identifier system emitted for every value set.
pub const IDENTIFIER_SYSTEM: &str = "urn:ietf:rfc:3986";

/// Prefix of the urn identifier derived from the value-set name.
pub const IDENTIFIER_PREFIX: &str = "urn:uuid:";

/// Marker line between the description and the identifier block. Downstream
/// publication tooling consumes this exact line; field order and spacing in
/// the rendered document are load-bearing.
pub const EXPERIMENTAL_MARKER: &str = "Description: \"* ^experimental = false\"";

/// One concept with its OID already resolved to a code-system URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub code_system_url: String,
    pub code: String,
    pub description: String,
}

/// A value set ready to render: sheet content joined with its publication
/// metadata, every OID resolved or substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSetDocument {
    pub name: String,
    pub title: String,
    pub description: String,
    pub concepts: Vec<Concept>,
}

impl ValueSetDocument {
    /// Joins a sheet with its metadata entry. Each concept OID is resolved
    /// through the code-system lookup; misses substitute
    /// [`UNKNOWN_CODE_SYSTEM`] and are recorded in `anomalies`.
    pub fn assemble(
        sheet: &ValueSetSheet,
        meta: &ValueSetMeta,
        metadata: &MvcMetadata,
        anomalies: &mut AnomalyLog,
    ) -> Self {
        let concepts = sheet
            .concepts
            .iter()
            .map(|row| {
                let code_system_url = match metadata.code_system_url(&row.oid) {
                    Some(url) => url.to_string(),
                    None => {
                        anomalies.record_unknown_oid(&row.oid);
                        UNKNOWN_CODE_SYSTEM.to_string()
                    }
                };
                Concept {
                    code_system_url,
                    code: row.code.clone(),
                    description: row.description.clone(),
                }
            })
            .collect();

        Self {
            name: sheet.value_set_name.clone(),
            title: meta.title.clone(),
            description: meta.description.clone(),
            concepts,
        }
    }

    /// Renders the document. Concept descriptions get double quotes rewritten
    /// to single quotes; the title and description are emitted as stored
    /// (the loader already normalized the description).
    pub fn render(&self) -> String {
        let mut doc = format!(
            "ValueSet: {name}\nId: {name}\nTitle: \"{title}\"\nDescription: \"{description}\"\n\n{EXPERIMENTAL_MARKER}\n",
            name = self.name,
            title = self.title,
            description = self.description,
        );
        doc.push_str(&format!("* ^identifier.system = \"{IDENTIFIER_SYSTEM}\"\n"));
        doc.push_str(&format!(
            "* ^identifier.value = \"{IDENTIFIER_PREFIX}{}\"\n",
            self.name
        ));
        doc.push('\n');
        for concept in &self.concepts {
            doc.push_str(&format!(
                "* {}#{} \"{}\"\n",
                concept.code_system_url,
                concept.code,
                normalize_quotes(&concept.description)
            ));
        }
        doc
    }
}
