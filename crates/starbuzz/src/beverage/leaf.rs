use crate::{Beverage, Size};
use tracing::debug;

/// declare a leaf beverage, which only differs from the others by its name and base cost
///
/// for example, it will generate `HouseBlend` like this:
///```ignore
/// #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// pub struct HouseBlend {
///     size: Size,
/// }
///
/// impl Beverage for HouseBlend {
///     fn description(&self) -> String {
///         Self::DESCRIPTION.to_string()
///     }
///
///     fn cost(&self) -> f64 {
///         sized_cost(Self::BASE_COST, self.size)
///     }
///     // ...
/// }
///```
macro_rules! leaf_beverage ({ $(#[$attr:meta])* $name:ident => $description:literal, $base_cost:literal } => {
    $(#[$attr])*
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct $name {
        size: Size,
    }

    impl $name {
        pub const DESCRIPTION: &'static str = $description;
        pub const BASE_COST: f64 = $base_cost;

        /// a tall one
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_size(size: Size) -> Self {
            Self { size }
        }
    }

    impl Beverage for $name {
        fn description(&self) -> String {
            Self::DESCRIPTION.to_string()
        }

        fn size(&self) -> Size {
            self.size
        }

        fn set_size(&mut self, size: Size) {
            debug!(beverage = Self::DESCRIPTION, from = %self.size, to = %size, "set size");
            self.size = size;
        }

        fn cost(&self) -> f64 {
            sized_cost(Self::BASE_COST, self.size)
        }
    }
});

/// the one size adjustment shared by every leaf
#[inline]
fn sized_cost(base_cost: f64, size: Size) -> f64 {
    base_cost * size.price_factor()
}

leaf_beverage! {
    /// The house blend, the cheapest drink on the menu.
    HouseBlend => "House Blend Coffee", 0.89
}

leaf_beverage! {
    DarkRoast => "Dark Roast Coffee", 0.99
}

leaf_beverage! {
    Espresso => "Espresso", 1.99
}

leaf_beverage! {
    Decaf => "Decaf Coffee", 1.05
}

#[cfg(test)]
mod tests {
    use super::{DarkRoast, Decaf, Espresso, HouseBlend};
    use crate::{Beverage, Size};

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_new_is_tall() {
        assert_eq!(HouseBlend::new().size(), Size::Tall);
        assert_eq!(Espresso::new().size(), Size::Tall);
    }

    #[test]
    fn test_description_is_fixed() {
        assert_eq!(HouseBlend::new().description(), "House Blend Coffee");
        assert_eq!(DarkRoast::new().description(), "Dark Roast Coffee");
        assert_eq!(Espresso::new().description(), "Espresso");
        assert_eq!(Decaf::with_size(Size::Venti).description(), "Decaf Coffee");
    }

    #[test]
    fn test_tall_costs_base_price() {
        assert_close(HouseBlend::new().cost(), 0.89);
        assert_close(DarkRoast::new().cost(), 0.99);
        assert_close(Espresso::new().cost(), 1.99);
        assert_close(Decaf::new().cost(), 1.05);
    }

    #[test]
    fn test_set_size_changes_cost() {
        let mut house_blend = HouseBlend::new();

        house_blend.set_size(Size::Venti);

        assert_eq!(house_blend.size(), Size::Venti);
        assert_close(house_blend.cost(), 0.89 * 1.5);
    }

    #[test]
    fn test_set_size_is_idempotent() {
        let mut once = Espresso::new();
        once.set_size(Size::Grande);

        let mut twice = Espresso::new();
        twice.set_size(Size::Grande);
        twice.set_size(Size::Grande);

        assert_eq!(once, twice);
        assert_close(once.cost(), twice.cost());
    }

    #[test]
    fn test_same_size_same_relative_adjustment() {
        for size in Size::ALL {
            let house_blend = HouseBlend::with_size(size);
            let espresso = Espresso::with_size(size);

            assert_close(house_blend.cost() / HouseBlend::BASE_COST, espresso.cost() / Espresso::BASE_COST);
        }
    }
}
