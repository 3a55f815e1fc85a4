//! Browse filters and pagination for the storefront catalog.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Sort orders accepted by the browse endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Most recently created first.
    Newest,
    /// Restricts results to discounted products (a filter, not an order).
    Sale,
}

impl SortKey {
    /// Parses a query-string value, returning `None` for unknown values
    /// so that unrecognized sorts are ignored rather than rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price_asc" => Some(SortKey::PriceAsc),
            "price_desc" => Some(SortKey::PriceDesc),
            "newest" => Some(SortKey::Newest),
            "sale" => Some(SortKey::Sale),
            _ => None,
        }
    }

    /// Returns the query-string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Newest => "newest",
            SortKey::Sale => "sale",
        }
    }
}

/// Structured filters for a catalog browse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Restrict to products carrying this category label.
    pub category: Option<String>,

    /// Free-text search over name and description.
    pub search: Option<String>,

    /// Requested ordering.
    pub sort: Option<SortKey>,

    /// 1-based page number.
    pub page: u32,

    /// Page size.
    pub limit: u32,
}

impl ProductFilter {
    /// Default page size when the caller does not specify one.
    pub const DEFAULT_LIMIT: u32 = 20;

    /// Creates a filter, normalizing page and limit to at least 1.
    pub fn new(
        category: Option<String>,
        search: Option<String>,
        sort: Option<SortKey>,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Self {
        Self {
            category,
            search,
            sort,
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).max(1),
        }
    }

    /// Number of rows to skip for the requested page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// One page of browse results with pagination bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,

    /// The 1-based page that was returned.
    pub current_page: u32,

    /// Total pages available at the requested page size.
    pub total_pages: u32,

    /// Total products matching the filter.
    pub total: u64,
}

impl ProductPage {
    /// Assembles a page, deriving `total_pages` as a ceiling division.
    pub fn new(products: Vec<Product>, current_page: u32, limit: u32, total: u64) -> Self {
        let limit = u64::from(limit.max(1));
        let total_pages = total.div_ceil(limit) as u32;
        Self {
            products,
            current_page,
            total_pages,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parses_known_values() {
        assert_eq!(SortKey::parse("price_asc"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::parse("price_desc"), Some(SortKey::PriceDesc));
        assert_eq!(SortKey::parse("newest"), Some(SortKey::Newest));
        assert_eq!(SortKey::parse("sale"), Some(SortKey::Sale));
    }

    #[test]
    fn sort_key_ignores_unknown_values() {
        assert_eq!(SortKey::parse("alphabetical"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn filter_defaults_page_and_limit() {
        let filter = ProductFilter::new(None, None, None, None, None);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, ProductFilter::DEFAULT_LIMIT);
        assert_eq!(filter.offset(), 0);
    }

    #[test]
    fn filter_clamps_zero_page_and_limit() {
        let filter = ProductFilter::new(None, None, None, Some(0), Some(0));
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 1);
    }

    #[test]
    fn filter_offset_skips_earlier_pages() {
        let filter = ProductFilter::new(None, None, None, Some(3), Some(20));
        assert_eq!(filter.offset(), 40);
    }

    #[test]
    fn page_computes_ceiling_of_total_pages() {
        let page = ProductPage::new(vec![], 1, 20, 45);
        assert_eq!(page.total_pages, 3);

        let exact = ProductPage::new(vec![], 1, 20, 40);
        assert_eq!(exact.total_pages, 2);

        let empty = ProductPage::new(vec![], 1, 20, 0);
        assert_eq!(empty.total_pages, 0);
    }
}
