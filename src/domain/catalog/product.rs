//! Product aggregate entity.
//!
//! Products are created and edited through the separate admin tooling;
//! this service reads them for browsing, chat retrieval, and order
//! line item display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::Price;
use crate::domain::foundation::{DomainError, ProductId, Timestamp, ValidationError};

/// Product aggregate - a single catalog item.
///
/// # Invariants
///
/// - `name` and `description` are non-empty
/// - `price` is strictly positive
/// - `sale_price`, when present, is strictly less than `price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for this product.
    id: ProductId,

    /// Display name.
    name: String,

    /// Free-text description.
    description: String,

    /// Regular price.
    price: Price,

    /// Discounted price, present only when a genuine discount applies.
    sale_price: Option<Price>,

    /// Category labels, e.g. "Shirts".
    categories: Vec<String>,

    /// Ordered image references.
    image_urls: Vec<String>,

    /// Available size labels.
    sizes: Vec<String>,

    /// Available color labels.
    colors: Vec<String>,

    /// Whether the product can currently be ordered.
    in_stock: bool,

    /// Whether the product is highlighted on the storefront.
    featured: bool,

    /// When the product was created.
    created_at: Timestamp,

    /// When the product was last updated.
    updated_at: Timestamp,
}

impl Product {
    /// Create a new product.
    ///
    /// The sale price candidate is normalized: values that are not
    /// strictly between zero and the regular price count as "no
    /// discount" rather than an error.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or description is blank
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProductId,
        name: String,
        description: String,
        price: Price,
        sale_price: Option<Decimal>,
        categories: Vec<String>,
        image_urls: Vec<String>,
        sizes: Vec<String>,
        colors: Vec<String>,
        in_stock: bool,
        featured: bool,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description").into());
        }

        let sale_price = Self::normalize_sale_price(&price, sale_price);
        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            description,
            price,
            sale_price,
            categories,
            image_urls,
            sizes,
            colors,
            in_stock,
            featured,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a product from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProductId,
        name: String,
        description: String,
        price: Price,
        sale_price: Option<Price>,
        categories: Vec<String>,
        image_urls: Vec<String>,
        sizes: Vec<String>,
        colors: Vec<String>,
        in_stock: bool,
        featured: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            sale_price,
            categories,
            image_urls,
            sizes,
            colors,
            in_stock,
            featured,
            created_at,
            updated_at,
        }
    }

    /// Normalizes a sale price candidate against the regular price.
    ///
    /// A candidate is kept only when it is strictly positive and
    /// strictly below the regular price.
    pub fn normalize_sale_price(price: &Price, candidate: Option<Decimal>) -> Option<Price> {
        candidate
            .filter(|c| *c > Decimal::ZERO && *c < price.amount())
            .and_then(|c| Price::new(c).ok())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the product ID.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the regular price.
    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Returns the sale price, if a discount applies.
    pub fn sale_price(&self) -> Option<&Price> {
        self.sale_price.as_ref()
    }

    /// Returns the category labels.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the image references.
    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    /// Returns the size labels.
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// Returns the color labels.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Returns whether the product is in stock.
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Returns whether the product is featured.
    pub fn featured(&self) -> bool {
        self.featured
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the last update timestamp.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true when a discount currently applies.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Returns the price a buyer would actually pay.
    pub fn effective_price(&self) -> &Price {
        self.sale_price.as_ref().unwrap_or(&self.price)
    }

    /// Returns the whole-percent discount, when one applies.
    pub fn discount_percent(&self) -> Option<u32> {
        self.sale_price
            .as_ref()
            .and_then(|sale| self.price.percent_off(sale))
    }
}
