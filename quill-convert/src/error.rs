use thiserror::Error;

/// Errors from a document backend while building or saving output.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("document I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A style config snapshot that failed schema validation on import.
///
/// Import parses the whole document before applying anything, so this
/// error guarantees the manager was left untouched.
#[derive(Debug, Error)]
#[error("style config import failed: {0}")]
pub struct ConfigImportError(#[from] serde_json::Error);

/// Errors surfaced by the conversion entry points.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input text was empty.
    #[error("input text is empty")]
    MissingInput,

    /// The custom style overrides were not valid override JSON.
    #[error("invalid custom styles JSON: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// A full style config snapshot failed to import.
    #[error(transparent)]
    ConfigImport(#[from] ConfigImportError),

    /// The document backend failed while building or saving.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Filesystem failure around the conversion itself.
    #[error("conversion I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
