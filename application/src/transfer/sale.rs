use rust_decimal::Decimal;
use time::OffsetDateTime;

use kernel::prelude::entity::{DestructSale, DestructSaleRecord, SaleRecord};

#[derive(Debug, Clone)]
pub struct SaleRecordDto {
    pub id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub quantity: i32,
    pub total: Decimal,
    pub sold_at: OffsetDateTime,
}

impl From<SaleRecord> for SaleRecordDto {
    fn from(value: SaleRecord) -> Self {
        let DestructSaleRecord { sale, book_title } = value.into_destruct();
        let DestructSale {
            id,
            book_id,
            quantity,
            total,
            created_at,
        } = sale.into_destruct();
        Self {
            id: id.into(),
            book_id: book_id.into(),
            book_title: book_title.into(),
            quantity: quantity.into(),
            total: total.into(),
            sold_at: *created_at.as_ref(),
        }
    }
}

pub struct PurchaseDto {
    pub book_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct PurchaseReceiptDto {
    pub sale_id: i64,
    pub total: Decimal,
}
