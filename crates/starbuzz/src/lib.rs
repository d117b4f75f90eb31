//! The Starbuzz coffee ordering system
//!
//! A drink is a chain: one leaf beverage at the bottom, wrapped by any number
//! of condiments. Every link of the chain is a [`Beverage`], so the chain can
//! be asked for its description, size and cost from the outside without
//! knowing how deep it is.
//!
//! - the description is the leaf's name followed by each condiment, in the
//!   order they were added
//! - the cost is the leaf's size-adjusted price plus every condiment surcharge
//! - the size only lives on the leaf: condiments forward both reads and writes
//!   of the size down the chain
//!
//! # Example
//!
//! ```
//! use starbuzz::{Beverage, BeverageExt, Condiment, HouseBlend, Size};
//!
//! let mut beverage = HouseBlend::new();
//! beverage.set_size(Size::Venti);
//!
//! let beverage = beverage.with(Condiment::Soy).with(Condiment::Soy);
//!
//! assert_eq!(beverage.description(), "House Blend Coffee, Soy, Soy");
//! assert_eq!(beverage.size(), Size::Venti);
//! assert!((beverage.cost() - (0.89 * 1.5 + 0.15 + 0.15)).abs() < 1e-9);
//! ```
//!
//! # Architecture
//!
//! - [`size`]: the closed set of cup sizes and their price factor
//! - [`beverage`]: the [`Beverage`] trait and the leaf drinks
//! - [`condiment`]: condiments and the [`CondimentDecorator`] that wraps a beverage
//! - [`decorator`]: reusable, composable condiment recipes
//! - [`order`]: a builder assembling a chain from a menu choice

mod error;

pub mod beverage;
pub mod condiment;
pub mod decorator;
pub mod order;
pub mod size;

pub use beverage::{Beverage, BeverageExt, DarkRoast, Decaf, Espresso, HouseBlend};
pub use condiment::{Condiment, CondimentDecorator};
pub use error::BeverageError;
pub use order::{Order, OrderBuilder, Receipt};
pub use size::Size;
