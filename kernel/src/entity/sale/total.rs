use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct SaleTotal(Decimal);

impl SaleTotal {
    pub fn new(total: impl Into<Decimal>) -> Self {
        Self(total.into())
    }
}
