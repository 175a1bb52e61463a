use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use application::service::{CreateBookService, GetBookService, GetSaleService, PurchaseBookService};
use application::transfer::{CreateBookDto, GetBookDto, PurchaseDto};
use driver::database::PostgresDatabase;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookId, BookStock};
use kernel::KernelError;

async fn seed_book(
    db: &PostgresDatabase,
    price: Decimal,
    stock: i32,
) -> error_stack::Result<i64, KernelError> {
    db.create_book(CreateBookDto {
        title: format!("purchase test {}", rand::random::<u32>()),
        author: "test author".to_string(),
        price,
        stock,
        description: None,
    })
    .await
}

async fn stock_of(db: &PostgresDatabase, id: i64) -> error_stack::Result<i32, KernelError> {
    let book = db.get_book(GetBookDto { id }).await?;
    Ok(book.expect("seeded book must exist").stock)
}

#[test_with::env(POSTGRES_TEST)]
#[tokio::test]
async fn purchase_decrements_stock_and_records_sale() -> error_stack::Result<(), KernelError> {
    let db = PostgresDatabase::new().await?;
    let book_id = seed_book(&db, Decimal::new(1250, 2), 5).await?;

    let receipt = db
        .purchase_book(PurchaseDto {
            book_id,
            quantity: 3,
        })
        .await?;
    assert_eq!(receipt.total, Decimal::new(3750, 2));
    assert_eq!(stock_of(&db, book_id).await?, 2);

    let sales = db.get_all_sales().await?;
    let sale = sales
        .iter()
        .find(|sale| sale.id == receipt.sale_id)
        .expect("purchase must leave a ledger line");
    assert_eq!(sale.book_id, book_id);
    assert_eq!(sale.quantity, 3);
    assert_eq!(sale.total, Decimal::new(3750, 2));

    Ok(())
}

#[test_with::env(POSTGRES_TEST)]
#[tokio::test]
async fn purchase_rejects_insufficient_stock() -> error_stack::Result<(), KernelError> {
    let db = PostgresDatabase::new().await?;
    let book_id = seed_book(&db, Decimal::new(999, 2), 2).await?;

    let failed = db
        .purchase_book(PurchaseDto {
            book_id,
            quantity: 3,
        })
        .await;
    match failed {
        Err(report) => match report.current_context() {
            KernelError::InsufficientStock { available } => assert_eq!(*available, 2),
            other => panic!("unexpected error: {other}"),
        },
        Ok(_) => panic!("purchase beyond stock must fail"),
    }

    assert_eq!(stock_of(&db, book_id).await?, 2);
    let sales = db.get_all_sales().await?;
    assert!(sales.iter().all(|sale| sale.book_id != book_id));

    Ok(())
}

#[test_with::env(POSTGRES_TEST)]
#[tokio::test]
async fn purchase_rejects_nonpositive_quantity() -> error_stack::Result<(), KernelError> {
    let db = PostgresDatabase::new().await?;
    let book_id = seed_book(&db, Decimal::new(500, 2), 4).await?;

    for quantity in [0, -2] {
        let failed = db.purchase_book(PurchaseDto { book_id, quantity }).await;
        match failed {
            Err(report) => match report.current_context() {
                KernelError::InvalidRequest => {}
                other => panic!("unexpected error: {other}"),
            },
            Ok(_) => panic!("quantity {quantity} must be rejected"),
        }
    }

    assert_eq!(stock_of(&db, book_id).await?, 4);

    Ok(())
}

#[test_with::env(POSTGRES_TEST)]
#[tokio::test]
async fn purchase_of_unknown_book_is_not_found() -> error_stack::Result<(), KernelError> {
    let db = PostgresDatabase::new().await?;

    let failed = db
        .purchase_book(PurchaseDto {
            book_id: i64::MAX,
            quantity: 1,
        })
        .await;
    match failed {
        Err(report) => match report.current_context() {
            KernelError::NotFound => {}
            other => panic!("unexpected error: {other}"),
        },
        Ok(_) => panic!("purchase of an unknown book must fail"),
    }

    Ok(())
}

#[test_with::env(POSTGRES_TEST)]
#[tokio::test]
async fn purchase_can_retry_after_failure() -> error_stack::Result<(), KernelError> {
    let db = PostgresDatabase::new().await?;
    let book_id = seed_book(&db, Decimal::new(2000, 2), 2).await?;

    let failed = db
        .purchase_book(PurchaseDto {
            book_id,
            quantity: 10,
        })
        .await;
    assert!(failed.is_err());

    let receipt = db
        .purchase_book(PurchaseDto {
            book_id,
            quantity: 2,
        })
        .await?;
    assert_eq!(receipt.total, Decimal::new(4000, 2));
    assert_eq!(stock_of(&db, book_id).await?, 0);

    let sales = db.get_all_sales().await?;
    assert_eq!(sales.iter().filter(|sale| sale.book_id == book_id).count(), 1);

    Ok(())
}

#[test_with::env(POSTGRES_TEST)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn purchase_blocks_until_stock_edit_commits() -> error_stack::Result<(), KernelError> {
    let db = Arc::new(PostgresDatabase::new().await?);
    let book_id = seed_book(&db, Decimal::new(1000, 2), 3).await?;

    // Hold the row lock the way a catalog write does while it rewrites the book.
    let mut held = db.transact().await?;
    let id = BookId::new(book_id);
    let book = db
        .book_query()
        .find_by_id_for_update(&mut held, &id)
        .await?
        .expect("seeded book must exist");
    let edited = book.reconstruct(|b| b.stock = BookStock::new(1));
    db.book_modifier().update(&mut held, &edited).await?;

    let buyer = {
        let db = Arc::clone(&db);
        tokio::spawn(async move {
            db.purchase_book(PurchaseDto {
                book_id,
                quantity: 2,
            })
            .await
        })
    };

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!buyer.is_finished(), "purchase must wait for the row lock");

    held.commit().await?;

    let failed = buyer.await.expect("purchase task must not panic");
    match failed {
        Err(report) => match report.current_context() {
            KernelError::InsufficientStock { available } => assert_eq!(*available, 1),
            other => panic!("unexpected error: {other}"),
        },
        Ok(_) => panic!("purchase must observe the committed stock, not the stale value"),
    }

    assert_eq!(stock_of(&db, book_id).await?, 1);
    let sales = db.get_all_sales().await?;
    assert!(sales.iter().all(|sale| sale.book_id != book_id));

    Ok(())
}

#[test_with::env(POSTGRES_TEST)]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_purchases_never_oversell() -> error_stack::Result<(), KernelError> {
    let db = Arc::new(PostgresDatabase::new().await?);
    let book_id = seed_book(&db, Decimal::new(1000, 2), 4).await?;

    let mut handles = Vec::new();
    for _ in 0..6 {
        let db = Arc::clone(&db);
        handles.push(tokio::spawn(async move {
            db.purchase_book(PurchaseDto {
                book_id,
                quantity: 1,
            })
            .await
        }));
    }

    let mut sold = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.expect("purchase task must not panic") {
            Ok(_) => sold += 1,
            Err(report) => match report.current_context() {
                KernelError::InsufficientStock { .. } => rejected += 1,
                other => panic!("unexpected error: {other}"),
            },
        }
    }

    assert_eq!(sold, 4);
    assert_eq!(rejected, 2);
    assert_eq!(stock_of(&db, book_id).await?, 0);

    let sales = db.get_all_sales().await?;
    assert_eq!(sales.iter().filter(|sale| sale.book_id == book_id).count(), 4);

    Ok(())
}
