//! cargo run --example starbuzz_coffee -- [tall|grande|venti]

use starbuzz::{Beverage, BeverageExt, Condiment, DarkRoast, Espresso, HouseBlend, Order, Receipt, Size};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let size = match std::env::args().nth(1).map(|arg| arg.parse::<Size>()).transpose() {
        Ok(size) => size.unwrap_or(Size::Venti),
        Err(e) => {
            error!(cause = %e, "bad size argument");
            std::process::exit(2);
        }
    };
    info!(%size, "taking orders");

    let espresso = Espresso::new();
    println!("{}", Receipt::of(&espresso));

    let dark_roast = DarkRoast::new().with(Condiment::Mocha).with(Condiment::Mocha).with(Condiment::Whip);
    println!("{}", Receipt::of(&dark_roast));

    let mut house_blend = HouseBlend::new();
    house_blend.set_size(size);
    let house_blend = house_blend.with(Condiment::Soy).with(Condiment::Soy);
    println!(
        "{}; Size : {}; Price : ${:.2}",
        house_blend.description(),
        house_blend.size(),
        house_blend.cost()
    );

    let order = Order::builder()
        .beverage(HouseBlend::new())
        .size(size)
        .condiments([Condiment::Soy, Condiment::Soy])
        .build();

    match order {
        Ok(order) => match serde_json::to_string_pretty(&order.receipt()) {
            Ok(json) => println!("{json}"),
            Err(e) => error!(cause = %e, "failed to render receipt"),
        },
        Err(e) => error!(cause = %e, "failed to build order"),
    }
}
