//! Cup sizes and their price adjustment.
//!
//! A [`Size`] only ever lives on the leaf beverage of a chain. Condiments read
//! it through the chain and never keep a copy of their own.

use crate::BeverageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sizes a beverage can be served in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Size {
    #[default]
    Tall,
    Grande,
    Venti,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 3] = [Size::Tall, Size::Grande, Size::Venti];

    /// The multiplier applied to a leaf beverage's base cost.
    ///
    /// Every leaf uses this same factor, so a given size always adds the same
    /// relative amount whatever the drink is.
    #[must_use]
    pub fn price_factor(self) -> f64 {
        match self {
            Size::Tall => 1.0,
            Size::Grande => 1.25,
            Size::Venti => 1.5,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Tall => "TALL",
            Size::Grande => "GRANDE",
            Size::Venti => "VENTI",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = BeverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BeverageError::invalid_size(s))
    }
}

impl TryFrom<String> for Size {
    type Error = BeverageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u8> for Size {
    type Error = BeverageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Size::ALL.get(usize::from(value)).copied().ok_or_else(|| BeverageError::invalid_size(value))
    }
}
