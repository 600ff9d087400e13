use std::path::PathBuf;
use thiserror::Error;

/// Failure sites of a split run. Every variant is fatal: the run stops at the
/// first error and already-written output files are left in place.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("failed to open workbook {path:?}")]
    OpenWorkbook {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },

    #[error("sheet '{name}' disappeared from the source workbook")]
    SheetVanished { name: String },

    #[error("new workbook is missing its default sheet")]
    MissingDefaultSheet,

    #[error("failed to create output directory {path:?}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save sheet '{sheet}' to {path:?}")]
    SaveSheet {
        sheet: String,
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },
}
