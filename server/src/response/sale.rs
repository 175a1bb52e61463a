use application::transfer::SaleRecordDto;
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct SaleResponse {
    id: i64,
    libro_id: i64,
    titulo: String,
    cantidad: i32,
    total: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    fecha_venta: OffsetDateTime,
}

impl From<SaleRecordDto> for SaleResponse {
    fn from(value: SaleRecordDto) -> Self {
        Self {
            id: value.id,
            libro_id: value.book_id,
            titulo: value.book_title,
            cantidad: value.quantity,
            total: value.total,
            fecha_venta: value.sold_at,
        }
    }
}

#[cfg(test)]
mod test {
    use application::transfer::SaleRecordDto;
    use rust_decimal::Decimal;
    use time::OffsetDateTime;

    use crate::response::SaleResponse;

    #[test]
    fn sale_times_serialize_as_rfc3339() {
        let sold_at = OffsetDateTime::from_unix_timestamp(1_707_579_910)
            .expect("timestamp must be in range");
        let response = SaleResponse::from(SaleRecordDto {
            id: 7,
            book_id: 1,
            book_title: "El Quijote".to_string(),
            quantity: 3,
            total: Decimal::new(3750, 2),
            sold_at,
        });
        let value = serde_json::to_value(response).expect("response must serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "libro_id": 1,
                "titulo": "El Quijote",
                "cantidad": 3,
                "total": "37.50",
                "fecha_venta": "2024-02-10T15:45:10Z",
            })
        );
    }
}
