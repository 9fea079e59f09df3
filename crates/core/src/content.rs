//! Storefront content
//!
//! Copy and marketing blocks shown on the Home, About and Contact screens. Loaded from the
//! content fixture; see [`crate::fixtures::builtin_content`].

use serde::Deserialize;

use crate::{
    contact::{ContactAction, ContactActionKind},
    products::CategoryFilter,
};

const MAX_STARS: u8 = 5;

/// Brand copy.
#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    /// Full brand name
    pub name: String,
    /// Monogram shown in the header logo
    pub short_name: String,
    /// Tagline under the name
    pub tagline: String,
    /// Badge above the hero title
    pub hero_badge: String,
    /// Hero heading
    pub hero_title: String,
    /// Hero subheading
    pub hero_subtitle: String,
    /// About screen story paragraphs
    pub story: Vec<String>,
    /// Mission statement
    pub mission: String,
    /// Call to action heading
    pub cta_title: String,
    /// Call to action subheading
    pub cta_subtitle: String,
    /// Footer line
    pub footer: String,
    /// Copyright line
    pub copyright: String,
}

/// Service feature shown on the Home screen.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Identifier
    pub id: String,
    /// Icon name
    pub icon: String,
    /// Heading
    pub title: String,
    /// Body
    pub description: String,
}

/// Brand promise, optionally carrying a headline statistic.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandPromise {
    /// Identifier
    pub id: String,
    /// Icon name
    pub icon: String,
    /// Heading
    pub title: String,
    /// Body
    pub description: String,
    /// Headline statistic
    #[serde(default)]
    pub stat: Option<String>,
}

/// Curated collection linking to a catalog category.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    /// Identifier
    pub id: String,
    /// Heading
    pub title: String,
    /// Body
    pub description: String,
    /// Cover image URL
    pub image: String,
    /// Advertised product count. Marketing copy, not derived from the catalog.
    pub product_count: u32,
    /// Category the collection opens in the Shop screen
    pub category: CategoryFilter,
}

impl Collection {
    /// Badge text, e.g. `24 Products`.
    pub fn product_count_label(&self) -> String {
        format!("{} Products", self.product_count)
    }
}

/// Category chip shown above the product grid.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryChip {
    /// Filter selected by the chip
    pub id: CategoryFilter,
    /// Label
    pub name: String,
    /// Icon name
    pub icon: String,
}

/// Customer review.
#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    /// Identifier
    pub id: String,
    /// Reviewer name
    pub name: String,
    /// Whole stars, 0 to 5
    pub rating: u8,
    /// Review text
    pub comment: String,
    /// Relative date, e.g. `2 weeks ago`
    pub date: String,
}

impl Testimonial {
    /// First letter of the reviewer's name, used as the avatar.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Filled stars, capped at five.
    pub fn filled_stars(&self) -> usize {
        usize::from(self.rating.min(MAX_STARS))
    }
}

/// Headline figure in the Home stats strip.
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    /// Figure, e.g. `5,000+`
    pub value: String,
    /// Caption
    pub label: String,
}

/// "Why choose us" entry on the About screen.
#[derive(Debug, Clone, Deserialize)]
pub struct Reason {
    /// Icon name
    pub icon: String,
    /// Heading
    pub title: String,
    /// Body
    pub description: String,
}

/// Contact detail, some of which can be pressed.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfo {
    /// Icon name
    pub icon: String,
    /// Label
    pub title: String,
    /// Address, number or hours
    pub value: String,
    /// What pressing the detail does
    #[serde(default)]
    action: Option<ContactActionKind>,
}

impl ContactInfo {
    /// Action offered when the detail is pressed, if any.
    pub fn action(&self) -> Option<ContactAction> {
        self.action
            .map(|kind| ContactAction::new(kind, self.value.clone()))
    }
}

/// Frequently asked question.
#[derive(Debug, Clone, Deserialize)]
pub struct Faq {
    /// Question
    pub question: String,
    /// Answer
    pub answer: String,
}

/// All storefront copy.
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontContent {
    /// Brand copy
    pub brand: Brand,
    /// Home service features
    pub features: Vec<Feature>,
    /// About brand promises
    pub brand_promises: Vec<BrandPromise>,
    /// Home collections
    pub collections: Vec<Collection>,
    /// Category chips
    pub categories: Vec<CategoryChip>,
    /// Home testimonials
    pub testimonials: Vec<Testimonial>,
    /// Home stats strip
    pub stats: Vec<Stat>,
    /// About "why choose us"
    pub reasons: Vec<Reason>,
    /// Contact details
    pub contact_info: Vec<ContactInfo>,
    /// Contact FAQs
    pub faqs: Vec<Faq>,
}
