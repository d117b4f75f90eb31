use crate::decorator::Decorator;
use crate::Beverage;
use tracing::trace;

/// Two wrapping steps for a beverage: `first` wraps the drink, `then` wraps
/// what `first` produced.
///
/// Recipes nest, so `Milk.and_then(Soy).and_then(Mocha)` is a recipe whose
/// `first` step is itself a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe<D1, D2> {
    first: D1,
    then: D2,
}

impl<D1, D2> Recipe<D1, D2> {
    #[must_use]
    pub fn new(first: D1, then: D2) -> Self {
        Self { first, then }
    }

    #[must_use]
    pub fn first(&self) -> &D1 {
        &self.first
    }

    #[must_use]
    pub fn then(&self) -> &D2 {
        &self.then
    }
}

impl<B, D1, D2> Decorator<B> for Recipe<D1, D2>
where
    B: Beverage,
    D1: Decorator<B>,
    D1::Out: Beverage,
    D2: Decorator<D1::Out>,
    D2::Out: Beverage,
{
    type Out = D2::Out;

    fn decorate(&self, beverage: B) -> Self::Out {
        let served = self.then.decorate(self.first.decorate(beverage));
        trace!(description = %served.description(), size = %served.size(), "recipe applied");
        served
    }
}
