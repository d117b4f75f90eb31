//! Reusable wrapping steps.
//!
//! A [`Decorator`] turns one beverage into another. [`Condiment`](crate::Condiment)
//! is the basic one, and several can be chained into a [`Recipe`] with
//! [`DecoratorExt::and_then`], then applied to as many drinks as needed:
//!
//! ```
//! use starbuzz::decorator::{Decorator, DecoratorExt};
//! use starbuzz::{Beverage, Condiment, HouseBlend};
//!
//! let double_soy = Condiment::Soy.and_then(Condiment::Soy);
//! let beverage = double_soy.decorate(HouseBlend::new());
//!
//! assert_eq!(beverage.description(), "House Blend Coffee, Soy, Soy");
//! ```

mod recipe;

pub use recipe::Recipe;

use crate::condiment::Condiment;

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

/// Chaining for condiments and the recipes built from them.
pub trait DecoratorExt: Sized {
    /// `self` wraps first, `decorator` wraps the result
    #[must_use]
    fn and_then<D>(self, decorator: D) -> Recipe<Self, D> {
        Recipe::new(self, decorator)
    }

    /// `decorator` wraps first, `self` wraps the result
    #[must_use]
    fn compose<D>(self, decorator: D) -> Recipe<D, Self> {
        Recipe::new(decorator, self)
    }
}

impl DecoratorExt for Condiment {}
impl<D1, D2> DecoratorExt for Recipe<D1, D2> {}
