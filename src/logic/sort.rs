use std::cmp::Ordering;

use crate::state::{Product, ProductField};

/// Borrowed view of a single sortable field value.
enum FieldValue<'a> {
    Int(u64),
    Number(f64),
    Text(&'a str),
    Missing,
}

fn field_value(product: &Product, field: ProductField) -> FieldValue<'_> {
    match field {
        ProductField::Id => FieldValue::Int(product.id),
        ProductField::Name => FieldValue::Text(&product.name),
        ProductField::Sku => FieldValue::Text(&product.sku),
        ProductField::Category => FieldValue::Text(product.category.as_str()),
        ProductField::Price => FieldValue::Number(product.price),
        ProductField::Status => FieldValue::Text(product.status.as_str()),
        ProductField::ImageUrl => product
            .image_url
            .as_deref()
            .map_or(FieldValue::Missing, FieldValue::Text),
    }
}

/// What: Three-way compare two products by one field.
///
/// Inputs:
/// - `a`, `b`: Records to compare
/// - `field`: Field to compare by
///
/// Output:
/// - `Ordering` under the field's natural order.
///
/// Details:
/// - Missing values sort after every present value; two missing values are equal.
/// - Prices use `f64::total_cmp` so the order stays total even for odd inputs.
/// - Text compares by code point, matching plain string comparison.
#[must_use]
pub fn compare_products(a: &Product, b: &Product, field: ProductField) -> Ordering {
    match (field_value(a, field), field_value(b, field)) {
        (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
        (FieldValue::Missing, _) => Ordering::Greater,
        (_, FieldValue::Missing) => Ordering::Less,
        (FieldValue::Int(x), FieldValue::Int(y)) => x.cmp(&y),
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(&y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        // Both sides always come from the same field.
        _ => Ordering::Equal,
    }
}
