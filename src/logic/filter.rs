use std::borrow::Cow;

use crate::state::{Filters, Product, ProductField};

/// What: Render a field of `product` as the text a filter value is compared against.
///
/// Inputs:
/// - `product`: Record to read
/// - `field`: Which field
///
/// Output:
/// - `Some(text)` for present fields; `None` for a missing optional field.
///
/// Details:
/// - Category uses its label, status `active`/`inactive`, numbers their plain decimal form.
#[must_use]
pub fn field_text(product: &Product, field: ProductField) -> Option<Cow<'_, str>> {
    match field {
        ProductField::Id => Some(Cow::Owned(product.id.to_string())),
        ProductField::Name => Some(Cow::Borrowed(product.name.as_str())),
        ProductField::Sku => Some(Cow::Borrowed(product.sku.as_str())),
        ProductField::Category => Some(Cow::Borrowed(product.category.as_str())),
        ProductField::Price => Some(Cow::Owned(product.price.to_string())),
        ProductField::Status => Some(Cow::Borrowed(product.status.as_str())),
        ProductField::ImageUrl => product.image_url.as_deref().map(Cow::Borrowed),
    }
}

/// What: Check a product against every active field filter.
///
/// Inputs:
/// - `product`: Record to test
/// - `filters`: Field → required value
///
/// Output:
/// - `true` when every non-empty filter value equals the field text exactly.
///
/// Details:
/// - Empty values are "no filter", so an empty or all-blank set always passes.
/// - A missing optional field never satisfies a non-empty filter.
#[must_use]
pub fn matches_filters(product: &Product, filters: &Filters) -> bool {
    filters.iter().all(|(field, value)| {
        if value.is_empty() {
            return true;
        }
        field_text(product, *field).is_some_and(|text| text == value.as_str())
    })
}
