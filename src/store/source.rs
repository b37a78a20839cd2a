//! Data source seam behind the catalog store.
//!
//! The store never talks to a backend directly; it calls a [`ProductSource`].
//! [`StaticSource`] stands in for a real service: it serves a JSON dataset and
//! sleeps for a configurable latency on every call. Mutations are acknowledged
//! but never written back.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::SourceError;
use crate::state::{Product, ProductDraft, ProductId};

/// Dataset shipped with the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/products.json");

/// Capability set the store needs from a backend.
///
/// Every call may suspend and may fail; the store keeps its own copy of the
/// records and only commits once a call succeeds.
pub trait ProductSource: Send + Sync + 'static {
    /// Return the full product list.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>, SourceError>> + Send;

    /// Accept a new product; returns the draft as stored (the store assigns the id).
    fn create(
        &self,
        draft: ProductDraft,
    ) -> impl Future<Output = Result<ProductDraft, SourceError>> + Send;

    /// Accept a replacement record; returns it as stored.
    fn update(&self, product: Product)
    -> impl Future<Output = Result<Product, SourceError>> + Send;

    /// Accept removal of a record.
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<(), SourceError>> + Send;
}

/// Artificial round-trip delays applied by [`StaticSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency {
    /// Delay before `fetch` resolves.
    pub fetch: Duration,
    /// Delay before `create`/`update`/`delete` resolve.
    pub mutation: Duration,
}

impl Latency {
    /// No delay at all; used by tests and `--no-latency`.
    pub const NONE: Self = Self {
        fetch: Duration::ZERO,
        mutation: Duration::ZERO,
    };
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(800),
            mutation: Duration::from_millis(1000),
        }
    }
}

/// Where a [`StaticSource`] reads its records from.
#[derive(Clone, Debug)]
enum Dataset {
    Inline(Vec<Product>),
    File(PathBuf),
}

/// Simulated backend serving a fixed dataset.
#[derive(Clone, Debug)]
pub struct StaticSource {
    dataset: Dataset,
    latency: Latency,
}

impl StaticSource {
    /// What: Serve an in-memory list of products.
    ///
    /// Inputs:
    /// - `products`: Records returned by every `fetch`
    /// - `latency`: Simulated delays
    #[must_use]
    pub const fn new(products: Vec<Product>, latency: Latency) -> Self {
        Self {
            dataset: Dataset::Inline(products),
            latency,
        }
    }

    /// What: Serve the dataset bundled into the binary.
    ///
    /// Output:
    /// - `Err(SourceError::Decode)` only if the bundled JSON is malformed.
    pub fn bundled(latency: Latency) -> Result<Self, SourceError> {
        let products = decode_dataset(BUNDLED_DATASET)?;
        Ok(Self::new(products, latency))
    }

    /// What: Serve a JSON dataset file, re-read on every fetch.
    ///
    /// Inputs:
    /// - `path`: JSON array of products
    /// - `latency`: Simulated delays
    ///
    /// Details:
    /// - The file is not touched until the first fetch, so a bad path surfaces as a fetch error.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>, latency: Latency) -> Self {
        Self {
            dataset: Dataset::File(path.as_ref().to_path_buf()),
            latency,
        }
    }

    /// Configured delays.
    #[must_use]
    pub const fn latency(&self) -> Latency {
        self.latency
    }

    fn load(&self) -> Result<Vec<Product>, SourceError> {
        match &self.dataset {
            Dataset::Inline(items) => Ok(items.clone()),
            Dataset::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| SourceError::Dataset {
                    path: path.clone(),
                    source: e,
                })?;
                decode_dataset(&text)
            }
        }
    }
}

/// Parse a JSON array of products.
///
/// # Errors
/// - `SourceError::Decode` when the text is not a product array.
pub fn decode_dataset(text: &str) -> Result<Vec<Product>, SourceError> {
    Ok(serde_json::from_str::<Vec<Product>>(text)?)
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl ProductSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        simulate(self.latency.fetch).await;
        let items = self.load()?;
        tracing::debug!(count = items.len(), "static source served dataset");
        Ok(items)
    }

    async fn create(&self, draft: ProductDraft) -> Result<ProductDraft, SourceError> {
        simulate(self.latency.mutation).await;
        Ok(draft)
    }

    async fn update(&self, product: Product) -> Result<Product, SourceError> {
        simulate(self.latency.mutation).await;
        Ok(product)
    }

    async fn delete(&self, _id: ProductId) -> Result<(), SourceError> {
        simulate(self.latency.mutation).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Bundled dataset decodes and has unique ids
    fn source_bundled_dataset_is_valid() {
        let src = StaticSource::bundled(Latency::NONE).expect("bundled dataset decodes");
        let items = src.load().expect("inline load");
        assert!(items.len() >= 12);
        let mut ids: Vec<u64> = items.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[tokio::test]
    /// What: Missing dataset file surfaces as a fetch error, not a panic
    ///
    /// - Input: Path that does not exist
    /// - Output: `SourceError::Dataset` carrying the path
    async fn source_missing_file_errors_on_fetch() {
        let src = StaticSource::from_path("/definitely/not/here.json", Latency::NONE);
        match src.fetch().await {
            Err(SourceError::Dataset { path, .. }) => {
                assert!(path.ends_with("here.json"));
            }
            other => panic!("expected dataset error, got {other:?}"),
        }
    }

    #[tokio::test]
    /// What: File datasets are re-read on each fetch
    async fn source_file_dataset_reread() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("products.json");
        std::fs::write(&path, "[]").expect("write");
        let src = StaticSource::from_path(&path, Latency::NONE);
        assert!(src.fetch().await.expect("fetch").is_empty());

        std::fs::write(
            &path,
            r#"[{"id":1,"name":"Hub","sku":"H-1","category":"Networking","price":20,"status":"inactive"}]"#,
        )
        .expect("write");
        let items = src.fetch().await.expect("fetch");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Hub");

        std::fs::write(&path, "{not json").expect("write");
        assert!(matches!(src.fetch().await, Err(SourceError::Decode(_))));
    }
}
