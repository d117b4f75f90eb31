//! A duck simulator
//!
//! Every [`Duck`] swims the same way, but how it flies and quacks is handed
//! to a [`FlyBehavior`] and a [`QuackBehavior`] which can be swapped at any
//! time.
//!
//! ```
//! use duck::{Duck, DuckKind, FlyRocketPowered};
//!
//! let mut model_duck = Duck::new(DuckKind::Model);
//! assert_eq!(model_duck.perform_fly(), "I can't fly");
//!
//! model_duck.set_fly_behavior(FlyRocketPowered);
//! assert_eq!(model_duck.perform_fly(), "I'm flying with a rocket !");
//! ```

mod duck;

pub mod behavior;

pub use behavior::{FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, QuackBehavior, Squeak};
pub use duck::{Duck, DuckKind};
