//! Order line item value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, ValidationError};

/// One product entry within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    product_id: ProductId,
    quantity: u32,
    size: Option<String>,
    color: Option<String>,
}

impl LineItem {
    /// Creates a line item, requiring a quantity of at least one.
    pub fn new(
        product_id: ProductId,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::not_positive("quantity", quantity));
        }
        Ok(Self {
            product_id,
            quantity,
            size,
            color,
        })
    }

    /// Returns the referenced product.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the ordered quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the chosen size, if any.
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Returns the chosen color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}
