use crate::state::Product;

/// What: Decide whether a product matches the free-text search.
///
/// Inputs:
/// - `product`: Record to test
/// - `query`: Raw search text as typed
///
/// Output:
/// - `true` when `query` is a case-insensitive substring of the name or the SKU.
///
/// Details:
/// - An empty query matches everything; the store also skips the pass entirely in that case.
#[must_use]
pub fn matches_search(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let ql = query.to_lowercase();
    product.name.to_lowercase().contains(&ql) || product.sku.to_lowercase().contains(&ql)
}
