//! The [`Beverage`] capability and the leaf drinks that terminate a chain.
//!
//! A chain is a leaf beverage wrapped by zero or more
//! [`CondimentDecorator`](crate::condiment::CondimentDecorator)s. Both shapes
//! implement [`Beverage`], so callers never need to know how deep a chain is.

mod leaf;

pub use leaf::{DarkRoast, Decaf, Espresso, HouseBlend};

use crate::condiment::{Condiment, CondimentDecorator};
use crate::Size;

/// An orderable drink.
#[cfg_attr(test, mockall::automock)]
pub trait Beverage {
    /// The human readable name, followed by every condiment fragment in the
    /// order the condiments were applied.
    fn description(&self) -> String;

    /// The effective size of the chain, which is always the leaf's size.
    fn size(&self) -> Size;

    /// Overwrites the effective size. Decorators forward this to the leaf.
    fn set_size(&mut self, size: Size);

    fn cost(&self) -> f64;
}

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    #[inline]
    fn description(&self) -> String {
        (**self).description()
    }

    #[inline]
    fn size(&self) -> Size {
        (**self).size()
    }

    #[inline]
    fn set_size(&mut self, size: Size) {
        (**self).set_size(size);
    }

    #[inline]
    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

pub trait BeverageExt: Beverage {
    /// wrap `self` in one more condiment
    #[must_use]
    fn with(self, condiment: Condiment) -> CondimentDecorator<Self>
    where
        Self: Sized,
    {
        CondimentDecorator::new(condiment, self)
    }

    /// erase the chain's concrete type, so chains of different shapes can be stored together
    #[must_use]
    fn boxed<'a>(self) -> Box<dyn Beverage + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T: Beverage + ?Sized> BeverageExt for T {}
