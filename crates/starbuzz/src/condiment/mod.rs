mod condiment_decorator;

pub use condiment_decorator::CondimentDecorator;

use crate::decorator::Decorator;
use crate::Beverage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something a customer can add on top of a drink.
///
/// Each condiment adds a fixed surcharge which does not depend on the size of
/// the drink. Only leaf beverages care about the size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condiment {
    Milk,
    Mocha,
    Soy,
    Whip,
}

impl Condiment {
    pub const ALL: [Condiment; 4] = [Condiment::Milk, Condiment::Mocha, Condiment::Soy, Condiment::Whip];

    /// The text appended to the wrapped beverage's description.
    #[must_use]
    pub fn fragment(self) -> &'static str {
        match self {
            Condiment::Milk => "Milk",
            Condiment::Mocha => "Mocha",
            Condiment::Soy => "Soy",
            Condiment::Whip => "Whip",
        }
    }

    #[must_use]
    pub fn surcharge(self) -> f64 {
        match self {
            Condiment::Milk | Condiment::Whip => 0.10,
            Condiment::Mocha => 0.20,
            Condiment::Soy => 0.15,
        }
    }
}

impl fmt::Display for Condiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

impl<B: Beverage> Decorator<B> for Condiment {
    type Out = CondimentDecorator<B>;

    fn decorate(&self, raw: B) -> Self::Out {
        CondimentDecorator::new(*self, raw)
    }
}
