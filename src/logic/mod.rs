//! Pure per-record predicates and comparators used by the listing pipeline.

pub mod filter;
pub mod query;
pub mod sort;

pub use filter::{field_text, matches_filters};
pub use query::matches_search;
pub use sort::compare_products;
