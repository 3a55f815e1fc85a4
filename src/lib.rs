//! Boutiqa - Storefront back end for an Algerian vintage clothing shop.
//!
//! Product catalog, an audited order lifecycle, a bilingual
//! Arabic/English chat assistant, and best-effort SMTP order
//! notifications, behind one REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
