pub mod anomaly;
pub mod catalogue;
pub mod metadata;
pub mod sheet;
pub mod text;

pub use anomaly::AnomalyLog;
pub use catalogue::{ConceptRow, ValueSetSheet};
pub use metadata::{MvcMetadata, ValueSetMeta};
pub use text::normalize_quotes;
