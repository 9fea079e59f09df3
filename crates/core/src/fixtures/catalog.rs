//! Catalog Fixtures

use rusty_money::Money;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    catalog::Catalog,
    fixtures::{FixtureError, parse_price},
    products::{Category, Product},
};

/// Wrapper for the catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Product price (e.g., "12500 PKR")
    pub price: String,

    /// Price before markdown (e.g., "18000 PKR")
    #[serde(default)]
    pub original_price: Option<String>,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Product category
    pub category: Category,

    /// Product image URL
    #[serde(default)]
    pub image: String,

    /// Average rating
    #[serde(default)]
    pub rating: f32,

    /// Review count
    #[serde(default)]
    pub reviews: u32,

    /// New arrival flag
    #[serde(default)]
    pub is_new: bool,

    /// Bestseller flag
    #[serde(default)]
    pub is_bestseller: bool,

    /// Stock flag
    #[serde(default = "in_stock_default")]
    pub in_stock: bool,

    /// Feature bullet points
    #[serde(default)]
    pub features: Vec<String>,
}

fn in_stock_default() -> bool {
    true
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let price = Money::from_minor(minor_units, currency);

        let original_price = fixture
            .original_price
            .as_deref()
            .map(parse_price)
            .transpose()?
            .map(|(minor_units, currency)| Money::from_minor(minor_units, currency));

        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            price,
            original_price,
            description: fixture.description,
            category: fixture.category,
            image: fixture.image,
            rating: fixture.rating,
            reviews: fixture.reviews,
            is_new: fixture.is_new,
            is_bestseller: fixture.is_bestseller,
            in_stock: fixture.in_stock,
            features: SmallVec::from_vec(fixture.features),
        })
    }
}

/// Parse catalog YAML into a [`Catalog`].
///
/// # Errors
///
/// Returns an error if the YAML is malformed, a price cannot be parsed, or the products violate
/// a catalog invariant (duplicate ids, non-positive prices, mixed currencies).
pub fn parse_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let products = fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::with_products(products)?)
}
