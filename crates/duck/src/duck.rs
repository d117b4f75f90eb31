use crate::behavior::{FlyBehavior, FlyNoWay, FlyWithWings, MuteQuack, Quack, QuackBehavior, Squeak};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuckKind {
    Mallard,
    RedHead,
    Rubber,
    Decoy,
    Model,
}

impl DuckKind {
    pub const ALL: [DuckKind; 5] =
        [DuckKind::Mallard, DuckKind::RedHead, DuckKind::Rubber, DuckKind::Decoy, DuckKind::Model];

    fn default_fly_behavior(self) -> Box<dyn FlyBehavior> {
        match self {
            DuckKind::Mallard | DuckKind::RedHead => Box::new(FlyWithWings),
            DuckKind::Rubber | DuckKind::Decoy | DuckKind::Model => Box::new(FlyNoWay),
        }
    }

    fn default_quack_behavior(self) -> Box<dyn QuackBehavior> {
        match self {
            DuckKind::Mallard | DuckKind::RedHead | DuckKind::Model => Box::new(Quack),
            DuckKind::Rubber => Box::new(Squeak),
            DuckKind::Decoy => Box::new(MuteQuack),
        }
    }
}

/// A duck whose flying and quacking are delegated to swappable behaviors.
pub struct Duck {
    kind: DuckKind,
    fly_behavior: Box<dyn FlyBehavior>,
    quack_behavior: Box<dyn QuackBehavior>,
}

impl Duck {
    /// a duck of `kind`, with the behaviors that kind starts with
    #[must_use]
    pub fn new(kind: DuckKind) -> Self {
        Self { kind, fly_behavior: kind.default_fly_behavior(), quack_behavior: kind.default_quack_behavior() }
    }

    #[must_use]
    pub fn with_behaviors(
        kind: DuckKind,
        fly_behavior: impl FlyBehavior + 'static,
        quack_behavior: impl QuackBehavior + 'static,
    ) -> Self {
        Self { kind, fly_behavior: Box::new(fly_behavior), quack_behavior: Box::new(quack_behavior) }
    }

    #[must_use]
    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    #[must_use]
    pub fn display(&self) -> &'static str {
        match self.kind {
            DuckKind::Mallard => "I am a Mallard !",
            DuckKind::RedHead => "I am a RedHead !",
            DuckKind::Rubber => "I am a Rubber Duck !",
            DuckKind::Decoy => "I am a Decoy Duck !",
            DuckKind::Model => "I am a Model Duck !",
        }
    }

    #[must_use]
    pub fn swim(&self) -> &'static str {
        "All ducks float, even the decoys !"
    }

    #[must_use]
    pub fn perform_fly(&self) -> &'static str {
        self.fly_behavior.fly()
    }

    #[must_use]
    pub fn perform_quack(&self) -> &'static str {
        self.quack_behavior.quack()
    }

    pub fn set_fly_behavior(&mut self, fly_behavior: impl FlyBehavior + 'static) {
        debug!(kind = ?self.kind, "replace fly behavior");
        self.fly_behavior = Box::new(fly_behavior);
    }

    pub fn set_quack_behavior(&mut self, quack_behavior: impl QuackBehavior + 'static) {
        debug!(kind = ?self.kind, "replace quack behavior");
        self.quack_behavior = Box::new(quack_behavior);
    }
}

impl fmt::Debug for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("kind", &self.kind)
            .field("fly", &self.perform_fly())
            .field("quack", &self.perform_quack())
            .finish()
    }
}
