use error_stack::Report;
use rust_decimal::Decimal;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    BookAuthor, BookDescription, BookId, BookPrice, BookStock, BookTitle, NewBook,
};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

#[async_trait::async_trait]
pub trait GetBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery
{
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self.book_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<i64, KernelError> {
        if dto.price < Decimal::ZERO {
            return Err(Report::new(KernelError::InvalidRequest)
                .attach_printable(format!("price must not be negative, got {}", dto.price)));
        }
        if dto.stock < 0 {
            return Err(Report::new(KernelError::InvalidRequest)
                .attach_printable(format!("stock must not be negative, got {}", dto.stock)));
        }

        let mut connection = self.database_connection().transact().await?;

        let book = NewBook::new(
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
            BookPrice::new(dto.price),
            BookStock::new(dto.stock),
            BookDescription::new(dto.description.unwrap_or_default()),
        );
        let id = self.book_modifier().create(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(id.into())
    }
}

impl<T> CreateBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<(), KernelError> {
        if dto.price < Decimal::ZERO {
            return Err(Report::new(KernelError::InvalidRequest)
                .attach_printable(format!("price must not be negative, got {}", dto.price)));
        }
        if dto.stock < 0 {
            return Err(Report::new(KernelError::InvalidRequest)
                .attach_printable(format!("stock must not be negative, got {}", dto.stock)));
        }

        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        // Locking the row keeps this write from racing a purchase on the same book.
        let book = match self
            .book_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
        {
            Some(book) => book,
            None => {
                connection.roll_back().await?;
                return Err(Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {} does not exist", dto.id)));
            }
        };

        let book = book.reconstruct(|b| {
            b.title = BookTitle::new(dto.title);
            b.author = BookAuthor::new(dto.author);
            b.price = BookPrice::new(dto.price);
            b.stock = BookStock::new(dto.stock);
            b.description = BookDescription::new(dto.description.unwrap_or_default());
        });
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> UpdateBookService for T where
    T: DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier
{
}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}
