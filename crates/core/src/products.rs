//! Products

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use slotmap::new_key_type;
use smallvec::SmallVec;
use thiserror::Error;

use crate::discounts::{discount_percent, markdown_fraction};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// Error returned when a category identifier is not one of the known categories.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Watches
    Watches,

    /// Belts
    Belts,

    /// Wallets
    Wallets,

    /// Anything else sold alongside the leather goods
    Accessories,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 4] = [
        Category::Watches,
        Category::Belts,
        Category::Wallets,
        Category::Accessories,
    ];

    /// Lowercase identifier used in fixtures and filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Watches => "watches",
            Category::Belts => "belts",
            Category::Wallets => "wallets",
            Category::Accessories => "accessories",
        }
    }

    /// Human readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Watches => "Watches",
            Category::Belts => "Belts",
            Category::Wallets => "Wallets",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Category selection used by the shop filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,

    /// Only products in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Identifier of the "no filter" selection.
    pub const ALL_ID: &'static str = "all";

    /// Whether a product in `category` passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }

    /// Identifier of this filter, `all` or the category identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_ID,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_ID {
            return Ok(CategoryFilter::All);
        }

        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique product identifier (e.g. `w1`)
    pub id: String,

    /// Product name
    pub name: String,

    /// Current selling price
    pub price: Money<'static, Currency>,

    /// Price before markdown, if the product is on sale
    pub original_price: Option<Money<'static, Currency>>,

    /// Short marketing description
    pub description: String,

    /// Product category
    pub category: Category,

    /// Product image URL
    pub image: String,

    /// Average rating between 0 and 5
    pub rating: f32,

    /// Number of reviews behind the rating
    pub reviews: u32,

    /// Shown in the new arrivals rail
    pub is_new: bool,

    /// Shown in the bestsellers rail
    pub is_bestseller: bool,

    /// Stock flag; carts do not check it
    pub in_stock: bool,

    /// Feature bullet points
    pub features: SmallVec<[String; 4]>,
}

impl Product {
    /// Original price when it is a real markdown: above the current price and in the same
    /// currency.
    pub fn was_price(&self) -> Option<&Money<'static, Currency>> {
        self.original_price
            .as_ref()
            .filter(|original| markdown_fraction(&self.price, Some(original)).is_some())
    }

    /// Display discount in whole percentage points, if the product is marked down.
    pub fn discount_percent(&self) -> Option<u32> {
        discount_percent(&self.price, self.original_price.as_ref())
    }

    /// Number of filled stars when the rating is drawn as five stars.
    pub fn filled_stars(&self) -> usize {
        let clamped = self.rating.clamp(0.0, MAX_RATING);

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "rating is clamped to [0, 5] before the cast"
        )]
        let stars = clamped.floor() as usize;

        stars
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::PKR;
    use smallvec::smallvec;

    use super::*;

    fn product(rating: f32, original_price: Option<i64>) -> Product {
        Product {
            id: "w1".to_string(),
            name: "Executive Gold Watch".to_string(),
            price: Money::from_major(12_500, PKR),
            original_price: original_price.map(|price| Money::from_major(price, PKR)),
            description: String::new(),
            category: Category::Watches,
            image: String::new(),
            rating,
            reviews: 0,
            is_new: false,
            is_bestseller: true,
            in_stock: true,
            features: smallvec!["Water Resistant".to_string()],
        }
    }

    #[test]
    fn category_round_trips_through_identifier() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn category_parse_is_case_sensitive() {
        assert_eq!(
            "Watches".parse::<Category>(),
            Err(ParseCategoryError("Watches".to_string()))
        );
    }

    #[test]
    fn category_filter_parses_all() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "belts".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Belts))
        );
        assert!("ALL".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Wallets));
        assert!(CategoryFilter::Only(Category::Belts).matches(Category::Belts));
        assert!(!CategoryFilter::Only(Category::Belts).matches(Category::Watches));
    }

    #[test]
    fn filled_stars_floors_rating() {
        assert_eq!(product(4.8, None).filled_stars(), 4);
        assert_eq!(product(5.0, None).filled_stars(), 5);
        assert_eq!(product(0.0, None).filled_stars(), 0);
    }

    #[test]
    fn filled_stars_clamps_out_of_range() {
        assert_eq!(product(7.5, None).filled_stars(), 5);
        assert_eq!(product(-1.0, None).filled_stars(), 0);
    }

    #[test]
    fn discount_percent_uses_original_price() {
        assert_eq!(product(4.8, Some(18_000)).discount_percent(), Some(31));
        assert_eq!(product(4.8, None).discount_percent(), None);
    }
}
