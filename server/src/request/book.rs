use application::transfer::{CreateBookDto, UpdateBookDto};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    titulo: String,
    autor: String,
    precio: Decimal,
    stock: i32,
    #[serde(default)]
    descripcion: Option<String>,
}

impl From<CreateBookRequest> for CreateBookDto {
    fn from(value: CreateBookRequest) -> Self {
        Self {
            title: value.titulo,
            author: value.autor,
            price: value.precio,
            stock: value.stock,
            description: value.descripcion,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    titulo: String,
    autor: String,
    precio: Decimal,
    stock: i32,
    #[serde(default)]
    descripcion: Option<String>,
}

impl UpdateBookRequest {
    pub fn into_dto(self, id: i64) -> UpdateBookDto {
        UpdateBookDto {
            id,
            title: self.titulo,
            author: self.autor,
            price: self.precio,
            stock: self.stock,
            description: self.descripcion,
        }
    }
}
