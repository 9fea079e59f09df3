//! Takaful prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    catalog::{Catalog, CatalogError},
    checkout::{CheckoutError, OrderConfirmation, checkout},
    contact::{ContactAction, ContactField, ContactForm, ContactFormError, ContactSubmission},
    content::StorefrontContent,
    discounts::discount_percent,
    fixtures::FixtureError,
    pricing::format_price,
    products::{Category, CategoryFilter, Product, ProductKey},
    receipt::{Receipt, ReceiptError},
    store::{CartError, CartEvent, CartStore, SubscriptionKey},
};
