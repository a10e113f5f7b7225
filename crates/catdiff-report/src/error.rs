/// Errors that can occur while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
