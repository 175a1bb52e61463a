use application::transfer::PurchaseDto;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    libro_id: i64,
    cantidad: i32,
}

impl From<PurchaseRequest> for PurchaseDto {
    fn from(value: PurchaseRequest) -> Self {
        Self {
            book_id: value.libro_id,
            quantity: value.cantidad,
        }
    }
}
