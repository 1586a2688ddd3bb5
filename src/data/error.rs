use thiserror::Error;

/// The remote dataset could not be fetched or did not parse as the
/// expected passenger table.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read response from {url}: {source}")]
    Read {
        url: String,
        source: std::io::Error,
    },
    #[error("response from {url} exceeded {limit} bytes")]
    TooLarge { url: String, limit: usize },
    #[error("CSV missing required column '{0}'")]
    MissingColumn(String),
    #[error("malformed CSV: {0}")]
    Parse(#[from] csv::Error),
}

/// A filter value outside the domain observed in the loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSpecification {
    #[error("passenger class {0} does not occur in the dataset")]
    UnknownClass(u8),
    #[error("gender '{0}' does not occur in the dataset")]
    UnknownGender(String),
}
