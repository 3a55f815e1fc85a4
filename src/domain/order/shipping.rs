//! Shipping address value object for Algerian delivery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ValidationError};

/// Default destination country for the storefront.
pub const DEFAULT_COUNTRY: &str = "Algeria";

/// How the parcel reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    /// Pickup at the carrier's wilaya office.
    Office,
    /// Courier delivery to the customer's address.
    Home,
}

impl DeliveryType {
    /// Returns the wire/storage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Office => "office",
            DeliveryType::Home => "home",
        }
    }

    /// Human-readable label used in notification mail.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::Office => "Office Delivery",
            DeliveryType::Home => "Home Delivery",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeliveryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "office" => Ok(DeliveryType::Office),
            "home" => Ok(DeliveryType::Home),
            other => Err(ValidationError::invalid_format(
                "delivery_type",
                format!("unknown delivery type '{}'", other),
            )),
        }
    }
}

/// Where and how an order is delivered.
///
/// # Invariants
///
/// - `wilaya`, `daira`, and `phone_number` are non-empty
/// - `home_address` is present and non-empty iff delivery is to home
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    delivery_type: DeliveryType,
    wilaya: String,
    daira: String,
    home_address: Option<String>,
    phone_number: String,
    notes: Option<String>,
    country: String,
}

impl ShippingAddress {
    /// Creates a validated shipping address.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when wilaya, daira, or phone number is blank
    /// - `ValidationFailed` when home delivery lacks a home address
    pub fn new(
        delivery_type: DeliveryType,
        wilaya: String,
        daira: String,
        home_address: Option<String>,
        phone_number: String,
        notes: Option<String>,
        country: Option<String>,
    ) -> Result<Self, DomainError> {
        if phone_number.trim().is_empty() || wilaya.trim().is_empty() || daira.trim().is_empty() {
            return Err(DomainError::validation(
                "shipping_address",
                "Complete shipping address is required",
            ));
        }

        let home_address = home_address.filter(|a| !a.trim().is_empty());
        if delivery_type == DeliveryType::Home && home_address.is_none() {
            return Err(DomainError::validation(
                "home_address",
                "Home address is required for home delivery",
            ));
        }

        Ok(Self {
            delivery_type,
            wilaya,
            daira,
            home_address,
            phone_number,
            notes: notes.filter(|n| !n.trim().is_empty()),
            country: country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        })
    }

    /// Reconstitute from persistence (no validation).
    pub fn reconstitute(
        delivery_type: DeliveryType,
        wilaya: String,
        daira: String,
        home_address: Option<String>,
        phone_number: String,
        notes: Option<String>,
        country: String,
    ) -> Self {
        Self {
            delivery_type,
            wilaya,
            daira,
            home_address,
            phone_number,
            notes,
            country,
        }
    }

    /// Returns the delivery type.
    pub fn delivery_type(&self) -> DeliveryType {
        self.delivery_type
    }

    /// Returns the wilaya (province).
    pub fn wilaya(&self) -> &str {
        &self.wilaya
    }

    /// Returns the daira (district).
    pub fn daira(&self) -> &str {
        &self.daira
    }

    /// Returns the street address for home delivery.
    pub fn home_address(&self) -> Option<&str> {
        self.home_address.as_deref()
    }

    /// Returns the contact phone number.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Returns free-form delivery notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the destination country.
    pub fn country(&self) -> &str {
        &self.country
    }
}
