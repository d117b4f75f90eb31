//! Assembling a drink from a menu choice.
//!
//! [`OrderBuilder`] collects a leaf beverage, an optional size and the
//! condiments to add, then builds the chain in the order the condiments were
//! given. The result is an [`Order`], which is itself a [`Beverage`].

use crate::condiment::{Condiment, CondimentDecorator};
use crate::decorator::Decorator;
use crate::{Beverage, BeverageError, BeverageExt, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub struct OrderBuilder {
    beverage: Option<Box<dyn Beverage>>,
    size: Option<Size>,
    condiments: Vec<Condiment>,
}

impl OrderBuilder {
    fn new() -> Self {
        Self { beverage: None, size: None, condiments: Vec::new() }
    }

    #[must_use]
    pub fn beverage(mut self, beverage: impl Beverage + 'static) -> Self {
        self.beverage = Some(beverage.boxed());
        self
    }

    /// the size is applied once the chain is built, through the outermost condiment
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn condiment(mut self, condiment: Condiment) -> Self {
        self.condiments.push(condiment);
        self
    }

    #[must_use]
    pub fn condiments<I: IntoIterator<Item = Condiment>>(mut self, condiments: I) -> Self {
        self.condiments.extend(condiments);
        self
    }

    /// # Errors
    /// [`BeverageError::NullWrapped`] if condiments were requested without a
    /// beverage to put them on, [`BeverageError::MissingBeverage`] if nothing
    /// was ordered at all.
    pub fn build(self) -> Result<Order, BeverageError> {
        let mut condiments = self.condiments.into_iter();

        let mut beverage = match condiments.next() {
            Some(first) => CondimentDecorator::try_new(first, self.beverage)?.boxed(),
            None => self.beverage.ok_or(BeverageError::MissingBeverage)?,
        };

        for condiment in condiments {
            beverage = condiment.decorate(beverage).boxed();
        }

        if let Some(size) = self.size {
            beverage.set_size(size);
        }

        let order = Order { beverage };
        debug!(?order, "order built");
        Ok(order)
    }
}

impl fmt::Debug for OrderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBuilder")
            .field("beverage", &self.beverage.as_ref().map(|beverage| beverage.description()))
            .field("size", &self.size)
            .field("condiments", &self.condiments)
            .finish()
    }
}

/// A fully assembled drink.
pub struct Order {
    beverage: Box<dyn Beverage>,
}

impl Order {
    #[must_use]
    pub fn builder() -> OrderBuilder {
        OrderBuilder::new()
    }

    /// What the customer sees at the till.
    #[must_use]
    pub fn receipt(&self) -> Receipt {
        Receipt::of(self)
    }

    #[must_use]
    pub fn into_beverage(self) -> Box<dyn Beverage> {
        self.beverage
    }
}

impl Beverage for Order {
    fn description(&self) -> String {
        self.beverage.description()
    }

    fn size(&self) -> Size {
        self.beverage.size()
    }

    fn set_size(&mut self, size: Size) {
        self.beverage.set_size(size);
    }

    fn cost(&self) -> f64 {
        self.beverage.cost()
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("description", &self.description())
            .field("size", &self.size())
            .field("cost", &self.cost())
            .finish()
    }
}

/// A snapshot of a beverage, with the cost rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub description: String,
    pub size: Size,
    pub cost: f64,
}

impl Receipt {
    #[must_use]
    pub fn of<B: Beverage + ?Sized>(beverage: &B) -> Self {
        Self { description: beverage.description(), size: beverage.size(), cost: round_to_cents(beverage.cost()) }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Size : {}; Price : ${:.2}", self.description, self.size, self.cost)
    }
}

fn round_to_cents(cost: f64) -> f64 {
    (cost * 100.0).round() / 100.0
}
