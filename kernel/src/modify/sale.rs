use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{NewSale, SaleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait SaleModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        sale: &NewSale,
    ) -> error_stack::Result<SaleId, KernelError>;
}

pub trait DependOnSaleModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type SaleModifier: SaleModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn sale_modifier(&self) -> &Self::SaleModifier;
}
