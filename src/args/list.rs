//! Headless listing: fetch, apply the command-line query and print one page.

use std::fmt::Write;

use crate::args::Args;
use crate::store::{CatalogSnapshot, CatalogStore, ProductSource, StoreError};
use crate::util::{format_price, truncate_to_width};

/// What: Apply search, filters and sorts from `args` to the store.
///
/// Inputs:
/// - `store`: Store to configure; may still be empty
/// - `args`: Parsed command line
///
/// Details:
/// - Sorts are applied in order, so a repeated field toggles direction.
/// - `--page` is not applied here: page bounds depend on loaded data.
pub fn apply_query<S: ProductSource>(store: &CatalogStore<S>, args: &Args) {
    if let Some(q) = &args.search {
        store.set_search(q);
    }
    for (field, value) in &args.filter {
        store.set_filter(*field, value);
    }
    for field in &args.sort {
        store.set_sort(*field);
    }
}

/// What: Render a snapshot as a plain-text table.
///
/// Output:
/// - Header row, one row per product on the page, and a summary line.
#[must_use]
pub fn render_table(snap: &CatalogSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<28}  {:<12}  {:<18}  {:>10}  {:<8}",
        "ID", "NAME", "SKU", "CATEGORY", "PRICE", "STATUS"
    );
    for p in &snap.page {
        let _ = writeln!(
            out,
            "{:>4}  {:<28}  {:<12}  {:<18}  {:>10}  {:<8}",
            p.id,
            truncate_to_width(&p.name, 28),
            truncate_to_width(&p.sku, 12),
            p.category.as_str(),
            format_price(p.price),
            p.status.as_str()
        );
    }
    let _ = writeln!(
        out,
        "page {}/{} · {} matching · {} total",
        snap.query.current_page,
        snap.total_pages.max(1),
        snap.total_items,
        snap.catalog_size
    );
    out
}

/// What: Run `--list` mode end to end.
///
/// Inputs:
/// - `store`: Fresh store over the configured source
/// - `args`: Parsed command line
///
/// Output:
/// - The rendered table.
///
/// Details:
/// - An out-of-range `--page` is ignored like any other invalid page request.
///
/// # Errors
/// - Propagates the fetch failure so the binary can exit non-zero.
pub async fn run_list<S: ProductSource>(
    store: &CatalogStore<S>,
    args: &Args,
) -> Result<String, StoreError> {
    tracing::info!("List mode requested from CLI");
    store.fetch_products().await?;
    apply_query(store, args);
    if let Some(page) = args.page
        && !store.set_page(page)
    {
        tracing::warn!(page, "requested page is out of range; showing page 1");
    }
    Ok(render_table(&store.snapshot()))
}
