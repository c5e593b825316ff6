use thiserror::Error;

use crate::cancel::CancelToken;
use crate::graph::Graph;
use crate::weighting::Weighting;

use super::path::Path;

#[derive(Debug, Clone, Default)]
pub struct ShortestPathOptions {
    pub cancellation: Option<CancelToken>,
}

/// Search outcomes that are not paths. `NoPath` is the regular result for a
/// disconnected node pair, not a fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no path between the requested nodes")]
    NoPath,

    #[error("the search was cancelled")]
    Cancelled,
}

pub trait ShortestPathAlgorithm {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        start: usize,
        end: usize,
        options: Option<ShortestPathOptions>,
    ) -> Result<Path, SearchError>;
}
