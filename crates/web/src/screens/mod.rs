//! Screens

pub mod about;
pub mod cart;
pub mod contact;
pub mod home;
pub mod shop;
