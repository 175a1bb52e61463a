use error_stack::Report;
use rust_decimal::Decimal;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnSaleModifier, SaleModifier,
};
use kernel::prelude::entity::{BookId, NewSale, SaleQuantity, SaleTotal};
use kernel::KernelError;

use crate::transfer::{PurchaseDto, PurchaseReceiptDto};

#[async_trait::async_trait]
pub trait PurchaseBookService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnSaleModifier
{
    async fn purchase_book(
        &self,
        dto: PurchaseDto,
    ) -> error_stack::Result<PurchaseReceiptDto, KernelError> {
        if dto.quantity <= 0 {
            return Err(Report::new(KernelError::InvalidRequest).attach_printable(format!(
                "purchase quantity must be positive, got {}",
                dto.quantity
            )));
        }

        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.book_id);
        let book = match self
            .book_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
        {
            Some(book) => book,
            None => {
                connection.roll_back().await?;
                return Err(Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {} does not exist", dto.book_id)));
            }
        };

        let available = *book.stock().as_ref();
        if available < dto.quantity {
            connection.roll_back().await?;
            return Err(Report::new(KernelError::InsufficientStock { available }));
        }

        let quantity = SaleQuantity::new(dto.quantity);
        let total = SaleTotal::new(*book.price().as_ref() * Decimal::from(dto.quantity));

        let sale = NewSale::new(id.clone(), quantity.clone(), total.clone());
        let sale_id = self.sale_modifier().create(&mut connection, &sale).await?;
        self.book_modifier()
            .decrement_stock(&mut connection, &id, &quantity)
            .await?;

        connection.commit().await?;

        Ok(PurchaseReceiptDto {
            sale_id: sale_id.into(),
            total: total.into(),
        })
    }
}

impl<T> PurchaseBookService for T where
    T: DependOnDatabaseConnection + DependOnBookQuery + DependOnBookModifier + DependOnSaleModifier
{
}
