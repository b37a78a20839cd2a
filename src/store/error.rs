use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Category of asynchronous store action; each has its own in-flight flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// `fetch_products`
    Fetch,
    /// `add_product`
    Create,
    /// `update_product`
    Update,
    /// `delete_product`
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// Failure reported by a [`super::ProductSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// Backend could not be reached or timed out.
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    /// Dataset file could not be read.
    #[error("failed to read dataset {}: {source}", path.display())]
    Dataset {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Dataset contents were not valid product JSON.
    #[error("failed to decode dataset: {0}")]
    Decode(#[from] serde_json::Error),
    /// Backend refused the change.
    #[error("rejected by data source: {0}")]
    Rejected(String),
}

/// Failure of a store action.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An action of the same category is still running.
    #[error("a {0} is already in progress")]
    Busy(Action),
    /// The largest id in the catalog leaves no room for a new one.
    #[error("no product id left after {0}")]
    IdsExhausted(crate::state::ProductId),
    /// The data source failed; the catalog was left unchanged.
    #[error(transparent)]
    Source(#[from] SourceError),
}
