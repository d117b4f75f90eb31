//! The interchangeable parts of a duck.

mod fly;
mod quack;

pub use fly::{FlyNoWay, FlyRocketPowered, FlyWithWings};
pub use quack::{MuteQuack, Quack, Squeak};

#[cfg_attr(test, mockall::automock)]
pub trait FlyBehavior {
    /// what the duck does when asked to fly
    fn fly(&self) -> &'static str;
}

#[cfg_attr(test, mockall::automock)]
pub trait QuackBehavior {
    /// what the duck says when asked to quack
    fn quack(&self) -> &'static str;
}
