use std::path::PathBuf;
use thiserror::Error;

/// Failures a single analysis request can end in.
///
/// Every variant is terminal for the request: the pipeline short-circuits at
/// the failing stage and the shell reports one message. Nothing here is fatal
/// to the process itself.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("timed out fetching {url} after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("failed to fetch {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("no readable text content at {url}")]
    EmptyContent { url: String },

    #[error("no words reached the minimum frequency of {min_frequency}")]
    NoFrequencyData { min_frequency: u32 },

    #[error("failed to write report {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
