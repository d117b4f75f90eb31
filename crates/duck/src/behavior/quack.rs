use crate::behavior::QuackBehavior;

#[derive(Default, Clone, Copy, Debug)]
pub struct Quack;

/// rubber ducks squeak
#[derive(Default, Clone, Copy, Debug)]
pub struct Squeak;

#[derive(Default, Clone, Copy, Debug)]
pub struct MuteQuack;

impl QuackBehavior for Quack {
    fn quack(&self) -> &'static str {
        "Quack"
    }
}

impl QuackBehavior for Squeak {
    fn quack(&self) -> &'static str {
        "Squeak"
    }
}

impl QuackBehavior for MuteQuack {
    fn quack(&self) -> &'static str {
        "<< Silence >>"
    }
}
