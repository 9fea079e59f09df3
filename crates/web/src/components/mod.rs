//! Shared UI components

pub mod button;
pub mod cards;
pub mod header;
pub mod icon;
pub mod product_card;
