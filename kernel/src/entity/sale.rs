mod id;
mod quantity;
mod total;

pub use self::{id::*, quantity::*, total::*};
use crate::entity::book::{BookId, BookTitle};
use crate::entity::common::CreatedAt;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Sale {
    id: SaleId,
    book_id: BookId,
    quantity: SaleQuantity,
    total: SaleTotal,
    created_at: CreatedAt<Sale>,
}

impl Sale {
    pub fn new(
        id: SaleId,
        book_id: BookId,
        quantity: SaleQuantity,
        total: SaleTotal,
        created_at: CreatedAt<Sale>,
    ) -> Self {
        Self {
            id,
            book_id,
            quantity,
            total,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct NewSale {
    book_id: BookId,
    quantity: SaleQuantity,
    total: SaleTotal,
}

impl NewSale {
    pub fn new(book_id: BookId, quantity: SaleQuantity, total: SaleTotal) -> Self {
        Self {
            book_id,
            quantity,
            total,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct SaleRecord {
    sale: Sale,
    book_title: BookTitle,
}

impl SaleRecord {
    pub fn new(sale: Sale, book_title: BookTitle) -> Self {
        Self { sale, book_title }
    }
}
