use duck::{Duck, DuckKind, FlyRocketPowered};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let all_my_ducks_in_a_row: Vec<Duck> =
        [DuckKind::Mallard, DuckKind::RedHead, DuckKind::Rubber, DuckKind::Decoy].into_iter().map(Duck::new).collect();

    for duck in &all_my_ducks_in_a_row {
        println!("{}", duck.display());
        println!("{}", duck.swim());
        println!("{}", duck.perform_fly());
        println!("{}", duck.perform_quack());
    }

    let mut model_duck = Duck::new(DuckKind::Model);
    println!("{}", model_duck.perform_fly());

    info!("strapping a rocket to the model duck");
    model_duck.set_fly_behavior(FlyRocketPowered);
    println!("{}", model_duck.perform_fly());
}
