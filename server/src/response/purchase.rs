use application::transfer::PurchaseReceiptDto;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    mensaje: &'static str,
    total: Decimal,
    venta_id: i64,
}

impl From<PurchaseReceiptDto> for PurchaseResponse {
    fn from(value: PurchaseReceiptDto) -> Self {
        Self {
            mensaje: "Compra exitosa",
            total: value.total,
            venta_id: value.sale_id,
        }
    }
}

impl IntoResponse for PurchaseResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod test {
    use application::transfer::PurchaseReceiptDto;
    use rust_decimal::Decimal;

    use crate::response::PurchaseResponse;

    #[test]
    fn totals_serialize_as_decimal_strings() {
        let response = PurchaseResponse::from(PurchaseReceiptDto {
            sale_id: 7,
            total: Decimal::new(3750, 2),
        });
        let value = serde_json::to_value(response).expect("response must serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "mensaje": "Compra exitosa",
                "total": "37.50",
                "venta_id": 7,
            })
        );
    }
}
