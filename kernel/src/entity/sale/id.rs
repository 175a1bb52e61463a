use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct SaleId(i64);

impl SaleId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
