//! Create/edit form state and validation.

use crate::state::{Product, ProductCategory, ProductDraft, ProductId, ProductStatus};

/// Input field of the product form, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// Name text input.
    Name,
    /// SKU text input.
    Sku,
    /// Category selector.
    Category,
    /// Price text input.
    Price,
    /// Status toggle.
    Status,
    /// Image URL text input.
    ImageUrl,
}

impl FormField {
    /// All fields in tab order.
    pub const ORDER: [Self; 6] = [
        Self::Name,
        Self::Sku,
        Self::Category,
        Self::Price,
        Self::Status,
        Self::ImageUrl,
    ];

    /// Field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Sku => "SKU",
            Self::Category => "Category",
            Self::Price => "Price",
            Self::Status => "Status",
            Self::ImageUrl => "Image URL",
        }
    }

    /// Whether the field takes free text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::Sku | Self::Price | Self::ImageUrl)
    }

    fn offset(self, delta: isize) -> Self {
        let len = Self::ORDER.len().cast_signed();
        let pos = Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or(0)
            .cast_signed();
        Self::ORDER[(pos + delta).rem_euclid(len).cast_unsigned()]
    }

    /// Next field, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        self.offset(1)
    }

    /// Previous field, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        self.offset(-1)
    }
}

/// What: Editable copy of a product shown on the create/edit screen.
///
/// Details:
/// - Price is kept as text so partial input like `12.` can be typed.
/// - The image bytes of an edited product are carried through untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    /// Id being edited; `None` on the create screen.
    pub editing: Option<ProductId>,
    /// Name input.
    pub name: String,
    /// SKU input.
    pub sku: String,
    /// Selected category.
    pub category: ProductCategory,
    /// Price input text.
    pub price: String,
    /// Selected status.
    pub status: ProductStatus,
    /// Image URL input; empty means none.
    pub image_url: String,
    /// Focused field.
    pub focus: FormField,
    image: Option<Vec<u8>>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            sku: String::new(),
            category: ProductCategory::Electronics,
            price: String::new(),
            status: ProductStatus::Active,
            image_url: String::new(),
            focus: FormField::Name,
            image: None,
        }
    }
}

impl ProductForm {
    /// Blank form for a new product.
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing product.
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            editing: Some(product.id),
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category,
            price: crate::util::format_price(product.price),
            status: product.status,
            image_url: product.image_url.clone().unwrap_or_default(),
            focus: FormField::Name,
            image: product.image.clone(),
        }
    }

    /// Text buffer behind the focused field, if it is a text field.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Sku => Some(&mut self.sku),
            FormField::Price => Some(&mut self.price),
            FormField::ImageUrl => Some(&mut self.image_url),
            FormField::Category | FormField::Status => None,
        }
    }

    /// What: Validate the inputs and build a draft.
    ///
    /// Output:
    /// - `Ok(draft)` when name and SKU are non-empty and the price is a finite, non-negative number.
    ///
    /// # Errors
    /// - A short message naming the first invalid field.
    pub fn to_draft(&self) -> Result<ProductDraft, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let sku = self.sku.trim();
        if sku.is_empty() {
            return Err("SKU is required".to_string());
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| "Price must be a non-negative number".to_string())?;
        let url = self.image_url.trim();
        Ok(ProductDraft {
            name: name.to_string(),
            sku: sku.to_string(),
            category: self.category,
            price,
            status: self.status,
            image: self.image.clone(),
            image_url: (!url.is_empty()).then(|| url.to_string()),
        })
    }
}
