//! The wrapping half of a beverage chain.
//!
//! A [`CondimentDecorator`] owns exactly one beverage, which may itself be a
//! decorator. It adds its condiment's fragment and surcharge on the way out,
//! and hands every size query and size change straight down to the wrapped
//! beverage, so the leaf at the bottom of the chain is the only place a size
//! is ever stored.

use crate::condiment::Condiment;
use crate::{Beverage, BeverageError, Size};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct CondimentDecorator<B> {
    condiment: Condiment,
    wrapped: B,
}

impl<B: Beverage> CondimentDecorator<B> {
    #[must_use]
    pub fn new(condiment: Condiment, wrapped: B) -> Self {
        trace!(%condiment, "wrap beverage");
        Self { condiment, wrapped }
    }

    /// Builds a decorator from a beverage that may not exist yet.
    ///
    /// # Errors
    /// Returns [`BeverageError::NullWrapped`] when there is nothing to wrap.
    pub fn try_new(condiment: Condiment, wrapped: Option<B>) -> Result<Self, BeverageError> {
        let wrapped = wrapped.ok_or(BeverageError::NullWrapped)?;
        Ok(Self::new(condiment, wrapped))
    }

    #[must_use]
    pub fn condiment(&self) -> Condiment {
        self.condiment
    }

    #[must_use]
    pub fn wrapped(&self) -> &B {
        &self.wrapped
    }

    /// peel this layer off, returning the beverage it wrapped
    #[must_use]
    pub fn into_inner(self) -> B {
        self.wrapped
    }
}

impl<B: Beverage> Beverage for CondimentDecorator<B> {
    fn description(&self) -> String {
        let mut description = self.wrapped.description();
        description.push_str(", ");
        description.push_str(self.condiment.fragment());
        description
    }

    fn size(&self) -> Size {
        self.wrapped.size()
    }

    fn set_size(&mut self, size: Size) {
        self.wrapped.set_size(size);
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + self.condiment.surcharge()
    }
}
