use rust_decimal::Decimal;
use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::query::SaleQuery;
use kernel::interface::update::SaleModifier;
use kernel::prelude::entity::{
    BookId, BookTitle, CreatedAt, NewSale, Sale, SaleId, SaleQuantity, SaleRecord, SaleTotal,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresSaleRepository;

#[async_trait::async_trait]
impl SaleQuery for PostgresSaleRepository {
    type Transaction = PostgresTransaction;

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<SaleRecord>, KernelError> {
        PgSaleInternal::find_all(con).await.convert_error()
    }
}

#[async_trait::async_trait]
impl SaleModifier for PostgresSaleRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        sale: &NewSale,
    ) -> error_stack::Result<SaleId, KernelError> {
        PgSaleInternal::create(con, sale).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct SaleRecordRow {
    id: i64,
    libro_id: i64,
    titulo: String,
    cantidad: i32,
    total: Decimal,
    fecha_venta: OffsetDateTime,
}

impl From<SaleRecordRow> for SaleRecord {
    fn from(value: SaleRecordRow) -> Self {
        SaleRecord::new(
            Sale::new(
                SaleId::new(value.id),
                BookId::new(value.libro_id),
                SaleQuantity::new(value.cantidad),
                SaleTotal::new(value.total),
                CreatedAt::new(value.fecha_venta),
            ),
            BookTitle::new(value.titulo),
        )
    }
}

pub(in crate::database) struct PgSaleInternal;

impl PgSaleInternal {
    async fn find_all(con: &mut PgConnection) -> Result<Vec<SaleRecord>, DriverError> {
        let rows = sqlx::query_as::<_, SaleRecordRow>(
            // language=postgresql
            r#"
            SELECT v.id, v.libro_id, l.titulo, v.cantidad, v.total, v.fecha_venta
            FROM ventas v
            JOIN libros l ON v.libro_id = l.id
            ORDER BY v.fecha_venta DESC
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(SaleRecord::from).collect())
    }

    async fn create(con: &mut PgConnection, sale: &NewSale) -> Result<SaleId, DriverError> {
        let id = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            INSERT INTO ventas (libro_id, cantidad, total)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(sale.book_id().as_ref())
        .bind(sale.quantity().as_ref())
        .bind(sale.total().as_ref())
        .fetch_one(con)
        .await?;
        Ok(SaleId::new(id))
    }
}
