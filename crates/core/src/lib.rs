//! Takaful
//!
//! Takaful is the storefront core behind the Takaful Market shop: the static product catalog,
//! the session cart and its store, display discounts, checkout and the contact form.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod content;
pub mod discounts;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod store;
