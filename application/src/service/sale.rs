use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnSaleQuery, SaleQuery};
use kernel::KernelError;

use crate::transfer::SaleRecordDto;

#[async_trait::async_trait]
pub trait GetSaleService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnSaleQuery
{
    async fn get_all_sales(&self) -> error_stack::Result<Vec<SaleRecordDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let records = self.sale_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(records.into_iter().map(SaleRecordDto::from).collect())
    }
}

impl<T> GetSaleService for T where T: DependOnDatabaseConnection + DependOnSaleQuery {}
