//! Data models for the product form.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].

pub mod cart;
pub mod catalog;
pub mod outcome;
pub mod step;

pub use cart::CartLineItem;
pub use catalog::{Catalog, CatalogEntry};
pub use outcome::InputOutcome;
pub use step::Step;
