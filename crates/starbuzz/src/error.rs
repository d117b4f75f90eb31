use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeverageError {
    #[error("invalid size: {value}, expected one of TALL, GRANDE, VENTI")]
    InvalidSize { value: String },

    #[error("condiment decorator must wrap a beverage")]
    NullWrapped,

    #[error("order has no beverage to serve")]
    MissingBeverage,
}

impl BeverageError {
    #[must_use]
    pub fn invalid_size<S: ToString>(value: S) -> Self {
        Self::InvalidSize { value: value.to_string() }
    }
}
