#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("workbook {path} contains no worksheets")]
    EmptyWorkbook { path: PathBuf },

    #[error("failed to read sheet {sheet} in {path}: {source}")]
    Sheet {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("metadata table {path} is missing required column {column}")]
    MissingColumn { path: PathBuf, column: String },
}

impl IngestError {
    pub(crate) fn workbook(path: impl Into<PathBuf>, source: calamine::XlsxError) -> Self {
        Self::Workbook {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn sheet(
        path: impl Into<PathBuf>,
        sheet: impl Into<String>,
        source: calamine::XlsxError,
    ) -> Self {
        Self::Sheet {
            path: path.into(),
            sheet: sheet.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
