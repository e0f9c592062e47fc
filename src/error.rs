//! Error types.

/// The ways a path computation can fail.
///
/// All of these are recoverable; the caller may simply skip whatever
/// it was going to draw with the result.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// A direction was requested between two identical points.
    #[error("cannot derive a direction between coincident points")]
    CoincidentPoints,
    /// A line was requested through two identical points.
    #[error("line is degenerate: both defining points coincide")]
    DegenerateLine,
    /// The heading rays are parallel or anti-parallel.
    #[error("headings are parallel; the rays have no unique intersection")]
    NoUniqueIntersection,
    /// A configuration value was rejected.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    /// A configuration or scene document could not be parsed.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PathError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
