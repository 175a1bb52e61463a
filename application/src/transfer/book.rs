use rust_decimal::Decimal;
use time::OffsetDateTime;

use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub stock: i32,
    pub description: String,
    pub created_at: OffsetDateTime,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            price,
            stock,
            description,
            created_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            price: price.into(),
            stock: stock.into(),
            description: description.into(),
            created_at: *created_at.as_ref(),
        }
    }
}

pub struct GetBookDto {
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub stock: i32,
    pub description: Option<String>,
}

pub struct UpdateBookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub stock: i32,
    pub description: Option<String>,
}

pub struct DeleteBookDto {
    pub id: i64,
}
