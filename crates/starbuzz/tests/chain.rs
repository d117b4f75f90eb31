use starbuzz::decorator::{Decorator, DecoratorExt};
use starbuzz::{
    Beverage, BeverageError, BeverageExt, Condiment, CondimentDecorator, DarkRoast, Decaf, Espresso, HouseBlend, Size,
};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

fn leaves(size: Size) -> Vec<Box<dyn Beverage>> {
    vec![
        HouseBlend::with_size(size).boxed(),
        DarkRoast::with_size(size).boxed(),
        Espresso::with_size(size).boxed(),
        Decaf::with_size(size).boxed(),
    ]
}

fn wrap_all(leaf: Box<dyn Beverage>, condiments: &[Condiment]) -> Box<dyn Beverage> {
    condiments.iter().fold(leaf, |beverage, condiment| beverage.with(*condiment).boxed())
}

#[test]
fn house_blend_venti_with_double_soy() {
    let mut beverage = HouseBlend::new();
    beverage.set_size(Size::Venti);
    let beverage = CondimentDecorator::new(Condiment::Soy, beverage);
    let beverage = CondimentDecorator::new(Condiment::Soy, beverage);

    assert_eq!(beverage.description(), "House Blend Coffee, Soy, Soy");
    assert_eq!(beverage.size(), Size::Venti);
    assert_close(beverage.cost(), 0.89 * 1.5 + 0.15 + 0.15);
}

#[test]
fn size_is_the_leaf_size_at_any_depth() {
    for size in Size::ALL {
        for depth in 0..8 {
            let condiments: Vec<Condiment> = Condiment::ALL.iter().copied().cycle().take(depth).collect();

            for leaf in leaves(size) {
                let beverage = wrap_all(leaf, &condiments);
                assert_eq!(beverage.size(), size, "depth {depth}");
            }
        }
    }
}

#[test]
fn cost_is_leaf_cost_plus_surcharges() {
    let condiments = [Condiment::Mocha, Condiment::Milk, Condiment::Whip, Condiment::Mocha];
    let surcharges: f64 = condiments.iter().map(|condiment| condiment.surcharge()).sum();

    for size in Size::ALL {
        for leaf in leaves(size) {
            let leaf_cost = leaf.cost();
            let beverage = wrap_all(leaf, &condiments);
            assert_close(beverage.cost(), leaf_cost + surcharges);
        }
    }
}

#[test]
fn cost_does_not_depend_on_wrapping_order() {
    let forward = [Condiment::Soy, Condiment::Mocha, Condiment::Whip];
    let backward = [Condiment::Whip, Condiment::Mocha, Condiment::Soy];

    let a = wrap_all(Espresso::with_size(Size::Grande).boxed(), &forward);
    let b = wrap_all(Espresso::with_size(Size::Grande).boxed(), &backward);

    assert_close(a.cost(), b.cost());
    assert_eq!(a.description(), "Espresso, Soy, Mocha, Whip");
    assert_eq!(b.description(), "Espresso, Whip, Mocha, Soy");
}

#[test]
fn condiment_surcharge_ignores_size() {
    let tall = DarkRoast::with_size(Size::Tall).with(Condiment::Mocha);
    let venti = DarkRoast::with_size(Size::Venti).with(Condiment::Mocha);

    assert_close(tall.cost() - tall.wrapped().cost(), Condiment::Mocha.surcharge());
    assert_close(venti.cost() - venti.wrapped().cost(), Condiment::Mocha.surcharge());
}

#[test]
fn zero_condiments_is_the_leaf() {
    let beverage = Decaf::with_size(Size::Grande);

    assert_eq!(beverage.description(), Decaf::DESCRIPTION);
    assert_close(beverage.cost(), Decaf::BASE_COST * Size::Grande.price_factor());
}

#[test]
fn set_size_through_any_layer_updates_the_whole_chain() {
    let mut beverage = HouseBlend::new().with(Condiment::Soy).with(Condiment::Milk).with(Condiment::Whip);

    beverage.set_size(Size::Venti);
    assert_eq!(beverage.size(), Size::Venti);
    assert_eq!(beverage.wrapped().wrapped().size(), Size::Venti);
    assert_close(beverage.cost(), 0.89 * 1.5 + 0.15 + 0.10 + 0.10);

    let mut inner = beverage.into_inner();
    inner.set_size(Size::Grande);
    assert_eq!(inner.size(), Size::Grande);
    assert_eq!(inner.into_inner().into_inner(), HouseBlend::with_size(Size::Grande));
}

#[test]
fn set_size_twice_is_set_size_once() {
    let mut once = Espresso::new().with(Condiment::Soy);
    once.set_size(Size::Grande);

    let mut twice = Espresso::new().with(Condiment::Soy);
    twice.set_size(Size::Grande);
    twice.set_size(Size::Grande);

    assert_eq!(once, twice);
    assert_eq!(twice.size(), Size::Grande);
}

#[test]
fn decorator_without_beverage_is_rejected() {
    let missing: Option<Box<dyn Beverage>> = None;

    let result = CondimentDecorator::try_new(Condiment::Soy, missing);

    assert!(matches!(result, Err(BeverageError::NullWrapped)));
}

#[test]
fn recipe_builds_the_same_chain_as_wrapping_by_hand() {
    let recipe = Condiment::Soy.and_then(Condiment::Soy);

    let by_recipe = recipe.decorate(HouseBlend::with_size(Size::Venti));
    let by_hand = HouseBlend::with_size(Size::Venti).with(Condiment::Soy).with(Condiment::Soy);

    assert_eq!(by_recipe, by_hand);
}
