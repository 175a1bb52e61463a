mod author;
mod description;
mod id;
mod price;
mod stock;
mod title;

pub use self::{author::*, description::*, id::*, price::*, stock::*, title::*};
use crate::entity::common::CreatedAt;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    price: BookPrice,
    stock: BookStock,
    description: BookDescription,
    created_at: CreatedAt<Book>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        price: BookPrice,
        stock: BookStock,
        description: BookDescription,
        created_at: CreatedAt<Book>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            price,
            stock,
            description,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct NewBook {
    title: BookTitle,
    author: BookAuthor,
    price: BookPrice,
    stock: BookStock,
    description: BookDescription,
}

impl NewBook {
    pub fn new(
        title: BookTitle,
        author: BookAuthor,
        price: BookPrice,
        stock: BookStock,
        description: BookDescription,
    ) -> Self {
        Self {
            title,
            author,
            price,
            stock,
            description,
        }
    }
}
