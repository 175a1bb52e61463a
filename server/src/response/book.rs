use application::transfer::{BookDto, CreateBookDto};
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: i64,
    titulo: String,
    autor: String,
    precio: Decimal,
    stock: i32,
    descripcion: String,
    #[serde(with = "time::serde::rfc3339")]
    fecha_creacion: OffsetDateTime,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            titulo: value.title,
            autor: value.author,
            precio: value.price,
            stock: value.stock,
            descripcion: value.description,
            fecha_creacion: value.created_at,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    id: i64,
    titulo: String,
    autor: String,
    precio: Decimal,
    stock: i32,
    descripcion: String,
}

impl From<(i64, CreateBookDto)> for CreatedBookResponse {
    fn from(value: (i64, CreateBookDto)) -> Self {
        let (id, value) = value;
        Self {
            id,
            titulo: value.title,
            autor: value.author,
            precio: value.price,
            stock: value.stock,
            descripcion: value.description.unwrap_or_default(),
        }
    }
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookMutationResponse {
    mensaje: &'static str,
    id: i64,
}

impl BookMutationResponse {
    pub fn updated(id: i64) -> Self {
        Self {
            mensaje: "Actualizado",
            id,
        }
    }

    pub fn deleted(id: i64) -> Self {
        Self {
            mensaje: "Eliminado",
            id,
        }
    }
}

impl IntoResponse for BookMutationResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod test {
    use application::transfer::BookDto;
    use rust_decimal::Decimal;
    use time::OffsetDateTime;

    use crate::response::BookResponse;

    #[test]
    fn creation_times_serialize_as_rfc3339() {
        let created_at = OffsetDateTime::from_unix_timestamp(1_707_568_200)
            .expect("timestamp must be in range");
        let response = BookResponse::from(BookDto {
            id: 1,
            title: "El Quijote".to_string(),
            author: "Cervantes".to_string(),
            price: Decimal::new(1250, 2),
            stock: 5,
            description: String::new(),
            created_at,
        });
        let value = serde_json::to_value(response).expect("response must serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "titulo": "El Quijote",
                "autor": "Cervantes",
                "precio": "12.50",
                "stock": 5,
                "descripcion": "",
                "fecha_creacion": "2024-02-10T12:30:00Z",
            })
        );
    }
}
