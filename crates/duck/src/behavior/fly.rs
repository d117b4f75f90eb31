use crate::behavior::FlyBehavior;

#[derive(Default, Clone, Copy, Debug)]
pub struct FlyWithWings;

#[derive(Default, Clone, Copy, Debug)]
pub struct FlyNoWay;

#[derive(Default, Clone, Copy, Debug)]
pub struct FlyRocketPowered;

impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> &'static str {
        "I'm flying !"
    }
}

impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> &'static str {
        "I can't fly"
    }
}

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> &'static str {
        "I'm flying with a rocket !"
    }
}
