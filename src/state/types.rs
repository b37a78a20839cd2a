//! Core value types for catalog records and query parameters.

use std::fmt;

/// Identifier assigned to a product by the catalog store.
pub type ProductId = u64;

/// Availability flag shown next to every product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Listed and orderable.
    Active,
    /// Kept in the catalog but hidden from ordering.
    Inactive,
}

impl ProductStatus {
    /// What: Return the wire/display key for this status.
    ///
    /// Output: `"active"` or `"inactive"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Flip between active and inactive.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of catalog categories.
///
/// Serialized as the human-readable label so datasets stay legible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ProductCategory {
    /// Phones, laptops and other consumer devices.
    Electronics,
    /// Printers, scanners, shredders.
    #[serde(rename = "Office Equipment")]
    OfficeEquipment,
    /// Desks, chairs, cabinets.
    Furniture,
    /// Cables, adapters, small add-ons.
    Accessories,
    /// Routers, switches, access points.
    Networking,
    /// Rack servers, NAS and disk arrays.
    #[serde(rename = "Server & Storage")]
    ServerStorage,
    /// UPS units and power distribution.
    #[serde(rename = "Power Equipment")]
    PowerEquipment,
    /// Paper, pens, consumables.
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    /// Drives and removable media.
    Storage,
    /// Cameras, locks, access control.
    Security,
}

impl ProductCategory {
    /// Every category in display order.
    pub const ALL: [Self; 10] = [
        Self::Electronics,
        Self::OfficeEquipment,
        Self::Furniture,
        Self::Accessories,
        Self::Networking,
        Self::ServerStorage,
        Self::PowerEquipment,
        Self::OfficeSupplies,
        Self::Storage,
        Self::Security,
    ];

    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::OfficeEquipment => "Office Equipment",
            Self::Furniture => "Furniture",
            Self::Accessories => "Accessories",
            Self::Networking => "Networking",
            Self::ServerStorage => "Server & Storage",
            Self::PowerEquipment => "Power Equipment",
            Self::OfficeSupplies => "Office Supplies",
            Self::Storage => "Storage",
            Self::Security => "Security",
        }
    }

    /// What: Parse a category from its label.
    ///
    /// Inputs: `s` label, compared case-insensitively after trimming.
    ///
    /// Output: `Some(category)` when recognized; `None` otherwise.
    #[must_use]
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
    }

    /// Next category in [`Self::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous category in [`Self::ALL`], wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier assigned by the store.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Stock keeping unit code.
    pub sku: String,
    /// Catalog category.
    pub category: ProductCategory,
    /// Unit price.
    pub price: f64,
    /// Availability.
    pub status: ProductStatus,
    /// Raw uploaded image bytes; only lives in memory.
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    /// Remote image location, when one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A product that has not been assigned an id yet (create input).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// Stock keeping unit code.
    pub sku: String,
    /// Catalog category.
    pub category: ProductCategory,
    /// Unit price.
    pub price: f64,
    /// Availability.
    pub status: ProductStatus,
    /// Raw uploaded image bytes.
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    /// Remote image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Attach an id, producing a full record.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            category: self.category,
            price: self.price,
            status: self.status,
            image: self.image,
            image_url: self.image_url,
        }
    }
}

impl From<Product> for ProductDraft {
    fn from(p: Product) -> Self {
        Self {
            name: p.name,
            sku: p.sku,
            category: p.category,
            price: p.price,
            status: p.status,
            image: p.image,
            image_url: p.image_url,
        }
    }
}

/// Fields a listing can be sorted or filtered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductField {
    /// Store-assigned id.
    Id,
    /// Display name.
    Name,
    /// SKU code.
    Sku,
    /// Category label.
    Category,
    /// Unit price.
    Price,
    /// Availability.
    Status,
    /// Remote image location (optional).
    ImageUrl,
}

impl ProductField {
    /// Return the key used in settings files and on the command line.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Sku => "sku",
            Self::Category => "category",
            Self::Price => "price",
            Self::Status => "status",
            Self::ImageUrl => "image_url",
        }
    }

    /// Parse a field from its config key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(ProductField)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "name" | "title" => Some(Self::Name),
            "sku" => Some(Self::Sku),
            "category" => Some(Self::Category),
            "price" => Some(Self::Price),
            "status" => Some(Self::Status),
            "image_url" | "imageurl" | "image-url" => Some(Self::ImageUrl),
            _ => None,
        }
    }

    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Sku => "SKU",
            Self::Category => "Category",
            Self::Price => "Price",
            Self::Status => "Status",
            Self::ImageUrl => "Image",
        }
    }
}

/// Direction applied on top of the field comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Config key (`asc` / `desc`).
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse `asc`/`desc` and their long forms.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Field config keys map back to the same field and aliases are accepted
    ///
    /// - Input: Every field key, a couple of aliases, and an unknown key
    /// - Output: Roundtrip holds; unknown yields None
    fn state_field_config_roundtrip_and_aliases() {
        for f in [
            ProductField::Id,
            ProductField::Name,
            ProductField::Sku,
            ProductField::Category,
            ProductField::Price,
            ProductField::Status,
            ProductField::ImageUrl,
        ] {
            assert_eq!(ProductField::from_config_key(f.as_config_key()), Some(f));
        }
        assert_eq!(
            ProductField::from_config_key("imageUrl"),
            Some(ProductField::ImageUrl)
        );
        assert_eq!(ProductField::from_config_key(" PRICE "), Some(ProductField::Price));
        assert_eq!(ProductField::from_config_key("weight"), None);
    }

    #[test]
    /// What: Category labels serialize as display strings and parse back
    ///
    /// - Input: Product JSON using "Server & Storage"
    /// - Output: Deserializes to `ServerStorage`; `from_label` is case-insensitive
    fn state_category_uses_display_labels() {
        let json = r#"{"id":7,"name":"NAS","sku":"NAS-1","category":"Server & Storage","price":899.0,"status":"active"}"#;
        let p: Product = serde_json::from_str(json).expect("valid product json");
        assert_eq!(p.category, ProductCategory::ServerStorage);
        assert_eq!(p.image_url, None);
        assert_eq!(
            ProductCategory::from_label("server & storage"),
            Some(ProductCategory::ServerStorage)
        );
        let out = serde_json::to_string(&p).expect("serialize");
        assert!(out.contains("\"Server & Storage\""));
        assert!(!out.contains("imageUrl"));
    }

    #[test]
    /// What: Category cycling wraps in both directions
    fn state_category_cycles() {
        assert_eq!(ProductCategory::Security.next(), ProductCategory::Electronics);
        assert_eq!(ProductCategory::Electronics.prev(), ProductCategory::Security);
        assert_eq!(
            ProductCategory::Electronics.next(),
            ProductCategory::OfficeEquipment
        );
    }
}
