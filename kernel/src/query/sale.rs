use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::SaleRecord;
use crate::KernelError;

#[async_trait::async_trait]
pub trait SaleQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<SaleRecord>, KernelError>;
}

pub trait DependOnSaleQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type SaleQuery: SaleQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn sale_query(&self) -> &Self::SaleQuery;
}
