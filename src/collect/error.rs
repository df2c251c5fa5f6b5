use thiserror::Error;

/// Failures of the collector itself.
///
/// Data conditions (missing names, empty groups, unparsable integers) are
/// never errors; they map to defined values instead.
#[derive(Debug, Error)]
pub enum CollectError {
    /// `nameStripRegex` is not a valid regular expression
    #[error("invalid name strip pattern '{pattern}': {source}")]
    InvalidStripPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
