//! Catalog
//!
//! The catalog is the read-only list of purchasable products. It is built once from the catalog
//! fixture and never changes afterwards, so every query here is a pure function of the catalog.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::products::{CategoryFilter, MAX_RATING, Product, ProductKey};

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// The catalog has no products, so its currency is unknown.
    #[error("catalog has no products")]
    Empty,

    /// Two products share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A product has a zero or negative price.
    #[error("product {0} must have a positive price")]
    NonPositivePrice(String),

    /// A product's rating is outside `[0, 5]`.
    #[error("product {0} has rating {1}, expected 0 to 5")]
    RatingOutOfRange(String, f32),

    /// A product is priced in a different currency to the rest of the catalog (id, product
    /// currency, catalog currency).
    #[error("product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// Catalog
#[derive(Debug)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    order: Vec<ProductKey>,
    keys: FxHashMap<String, ProductKey>,
    currency: &'static Currency,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the list is empty, an id repeats, a price is not positive,
    /// a rating is out of range, or currencies differ between products.
    ///
    /// An original price that is not above the current price, or is in another currency, is
    /// dropped.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalogError> {
        let mut product_map: SlotMap<ProductKey, Product> = SlotMap::with_key();
        let mut order = Vec::new();
        let mut keys = FxHashMap::default();
        let mut currency: Option<&'static Currency> = None;

        for mut product in products {
            if keys.contains_key(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }

            if product.price.to_minor_units() <= 0 {
                return Err(CatalogError::NonPositivePrice(product.id));
            }

            if !(0.0..=MAX_RATING).contains(&product.rating) {
                return Err(CatalogError::RatingOutOfRange(product.id, product.rating));
            }

            let product_currency = product.price.currency();

            match currency {
                Some(existing) if existing != product_currency => {
                    return Err(CatalogError::CurrencyMismatch(
                        product.id,
                        product_currency.iso_alpha_code,
                        existing.iso_alpha_code,
                    ));
                }
                Some(_) => {}
                None => currency = Some(product_currency),
            }

            if product.original_price.is_some() && product.was_price().is_none() {
                debug!(product_id = %product.id, "dropping original price that is not a markdown");
                product.original_price = None;
            }

            let id = product.id.clone();
            let key = product_map.insert(product);

            order.push(key);
            keys.insert(id, key);
        }

        Ok(Catalog {
            products: product_map,
            order,
            keys,
            currency: currency.ok_or(CatalogError::Empty)?,
        })
    }

    /// Look up a product by identifier.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.key(id).and_then(|key| self.products.get(key))
    }

    /// Look up the slot key for a product identifier.
    pub fn key(&self, id: &str) -> Option<ProductKey> {
        self.keys.get(id).copied()
    }

    /// Look up a product by slot key.
    pub fn by_key(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Whether the catalog has a product with this identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.keys.contains_key(id)
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Products in `category`; `all` returns the whole catalog.
    ///
    /// Matching is exact and case-sensitive. Unknown categories give an empty list.
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        match category.parse::<CategoryFilter>() {
            Ok(filter) => self.products_in(filter),
            Err(_) => Vec::new(),
        }
    }

    /// Products passing `filter`, in catalog order.
    pub fn products_in(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.iter()
            .filter(|product| filter.matches(product.category))
            .collect()
    }

    /// Products flagged as bestsellers, in catalog order.
    pub fn bestsellers(&self) -> Vec<&Product> {
        self.iter().filter(|product| product.is_bestseller).collect()
    }

    /// Products flagged as new arrivals, in catalog order.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.iter().filter(|product| product.is_new).collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// A built catalog always has at least one product.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
