//! Catalog value types and listing query state.

pub mod query;
pub mod types;

pub use query::{DEFAULT_ITEMS_PER_PAGE, Filters, QueryState};
pub use types::{
    Product, ProductCategory, ProductDraft, ProductField, ProductId, ProductStatus, SortOrder,
};
