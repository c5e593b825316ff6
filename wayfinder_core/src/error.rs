use thiserror::Error;

/// Expected failure modes of a routing request. None of these indicate a
/// corrupt graph; they are surfaced to the caller as result variants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("One of the cities was not found: {0}")]
    CityNotFound(String),

    #[error("No connection found between {start} and {end}")]
    NoPathFound { start: String, end: String },

    #[error("Route calculation was cancelled")]
    Cancelled,
}
