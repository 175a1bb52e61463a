use rust_decimal::Decimal;
use sqlx::PgConnection;
use time::OffsetDateTime;

use error_stack::Report;
use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    Book, BookAuthor, BookDescription, BookId, BookPrice, BookStock, BookTitle, CreatedAt, NewBook,
    SaleQuantity,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con).await.convert_error()
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await.convert_error()
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id_for_update(con, id)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        book: &NewBook,
    ) -> error_stack::Result<BookId, KernelError> {
        PgBookInternal::create(con, book).await.convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::update(con, book).await.convert_error()
    }

    async fn decrement_stock(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
        quantity: &SaleQuantity,
    ) -> error_stack::Result<(), KernelError> {
        let affected = PgBookInternal::decrement_stock(con, book_id, quantity)
            .await
            .convert_error()?;
        if affected == 0 {
            return Err(Report::new(KernelError::Internal)
                .attach_printable("stock decrement rejected, row missing or stock too low"));
        }
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    titulo: String,
    autor: String,
    precio: Decimal,
    stock: i32,
    descripcion: String,
    fecha_creacion: OffsetDateTime,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.titulo),
            BookAuthor::new(value.autor),
            BookPrice::new(value.precio),
            BookStock::new(value.stock),
            BookDescription::new(value.descripcion),
            CreatedAt::new(value.fecha_creacion),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_all(con: &mut PgConnection) -> Result<Vec<Book>, DriverError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, titulo, autor, precio, stock, descripcion, fecha_creacion
            FROM libros
            ORDER BY id DESC
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(con: &mut PgConnection, id: &BookId) -> Result<Option<Book>, DriverError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, titulo, autor, precio, stock, descripcion, fecha_creacion
            FROM libros
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Book::from))
    }

    async fn find_by_id_for_update(
        con: &mut PgConnection,
        id: &BookId,
    ) -> Result<Option<Book>, DriverError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, titulo, autor, precio, stock, descripcion, fecha_creacion
            FROM libros
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Book::from))
    }

    async fn create(con: &mut PgConnection, book: &NewBook) -> Result<BookId, DriverError> {
        let id = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            INSERT INTO libros (titulo, autor, precio, stock, descripcion)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.price().as_ref())
        .bind(book.stock().as_ref())
        .bind(book.description().as_ref())
        .fetch_one(con)
        .await?;
        Ok(BookId::new(id))
    }

    async fn update(con: &mut PgConnection, book: &Book) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE libros
            SET titulo = $2, autor = $3, precio = $4, stock = $5, descripcion = $6
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.price().as_ref())
        .bind(book.stock().as_ref())
        .bind(book.description().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn decrement_stock(
        con: &mut PgConnection,
        book_id: &BookId,
        quantity: &SaleQuantity,
    ) -> Result<u64, DriverError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE libros
            SET stock = stock - $2
            WHERE id = $1 AND stock >= $2
            "#,
        )
        .bind(book_id.as_ref())
        .bind(quantity.as_ref())
        .execute(con)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(con: &mut PgConnection, book_id: &BookId) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM libros
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        BookAuthor, BookDescription, BookPrice, BookStock, BookTitle, NewBook, SaleQuantity,
    };
    use kernel::KernelError;

    use crate::database::postgres::book::PostgresBookRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let book = NewBook::new(
            BookTitle::new(format!("test {}", rand::random::<u32>())),
            BookAuthor::new("test author".to_string()),
            BookPrice::new(Decimal::new(1250, 2)),
            BookStock::new(5),
            BookDescription::new(String::new()),
        );
        let id = PostgresBookRepository.create(&mut con, &book).await?;

        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        let found = found.expect("created book must be readable");
        assert_eq!(found.title(), book.title());
        assert_eq!(found.price(), book.price());
        assert_eq!(found.stock().as_ref(), &5);

        let locked = PostgresBookRepository
            .find_by_id_for_update(&mut con, &id)
            .await?;
        assert_eq!(locked, Some(found.clone()));

        let renamed = found.reconstruct(|b| b.title = BookTitle::new("renamed".to_string()));
        PostgresBookRepository.update(&mut con, &renamed).await?;
        let found = PostgresBookRepository
            .find_by_id(&mut con, &id)
            .await?
            .expect("updated book must be readable");
        assert_eq!(found.title().as_ref(), "renamed");

        PostgresBookRepository
            .decrement_stock(&mut con, &id, &SaleQuantity::new(3))
            .await?;
        let found = PostgresBookRepository
            .find_by_id(&mut con, &id)
            .await?
            .expect("decremented book must be readable");
        assert_eq!(found.stock().as_ref(), &2);

        let over = PostgresBookRepository
            .decrement_stock(&mut con, &id, &SaleQuantity::new(5))
            .await;
        assert!(over.is_err());
        let found = PostgresBookRepository
            .find_by_id(&mut con, &id)
            .await?
            .expect("rejected decrement must not change the row");
        assert_eq!(found.stock().as_ref(), &2);

        PostgresBookRepository.delete(&mut con, &id).await?;
        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }
}
