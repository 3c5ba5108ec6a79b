//! Business-rule tests against the service layer
//!
//! These exercise the repositories and services directly on in-memory
//! databases, asserting on stored state where the HTTP surface cannot.

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use libris_server::{
    models::{book::CreateBook, borrow::CreateBorrow, member::CreateMember},
    repository::Repository,
    services::Services,
    AppError,
};

async fn test_services() -> (Services, Pool<Sqlite>) {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid database URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    (Services::new(Repository::new(pool.clone())), pool)
}

fn book(title: &str, year: i64) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        author: "Author".to_string(),
        published_year: year,
        available: true,
    }
}

fn member(name: &str, email: &str) -> CreateMember {
    CreateMember {
        full_name: name.to_string(),
        email: email.to_string(),
        joined_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("Valid date"),
    }
}

fn borrow(book_id: i64, member_id: i64) -> CreateBorrow {
    CreateBorrow {
        book_id,
        member_id,
        borrow_date: NaiveDate::from_ymd_opt(2024, 2, 1).expect("Valid date"),
        return_date: NaiveDate::from_ymd_opt(2024, 2, 22).expect("Valid date"),
    }
}

async fn borrow_count(pool: &Pool<Sqlite>) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM borrowed_books")
        .fetch_one(pool)
        .await
        .expect("Count query failed")
}

#[tokio::test]
async fn availability_follows_borrow_history_not_the_flag() {
    let (services, _pool) = test_services().await;

    services
        .catalog
        .create_book(&book("Flagged Off", 2010))
        .await
        .expect("create failed");
    // inserted with available = false but never borrowed
    services
        .catalog
        .create_book(&CreateBook {
            available: false,
            ..book("Never Circulated", 2012)
        })
        .await
        .expect("create failed");

    let available = services
        .catalog
        .list_available_books()
        .await
        .expect("list failed");

    // zero borrow records means available, whatever the flag says
    let titles: Vec<&str> = available.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Flagged Off", "Never Circulated"]);
}

#[tokio::test]
async fn failed_borrow_inserts_no_record() {
    let (services, pool) = test_services().await;

    services
        .catalog
        .create_book(&book("Dune", 1965))
        .await
        .expect("create failed");
    services
        .members
        .create_member(&member("Ada", "ada@example.org"))
        .await
        .expect("create failed");

    services
        .circulation
        .borrow_book(&borrow(1, 1))
        .await
        .expect("first borrow failed");

    let err = services
        .circulation
        .borrow_book(&borrow(1, 1))
        .await
        .expect_err("second borrow must fail");
    assert!(matches!(err, AppError::NotFound(_)));

    assert_eq!(borrow_count(&pool).await, 1);
}

#[tokio::test]
async fn borrow_with_dangling_member_inserts_no_record() {
    let (services, pool) = test_services().await;

    services
        .catalog
        .create_book(&book("Dune", 1965))
        .await
        .expect("create failed");

    let err = services
        .circulation
        .borrow_book(&borrow(1, 99))
        .await
        .expect_err("borrow with unknown member must fail");
    assert!(matches!(err, AppError::Database(_)));

    assert_eq!(borrow_count(&pool).await, 0);
    // the availability flip rolled back with the transaction
    let available = services
        .catalog
        .list_available_books()
        .await
        .expect("list failed");
    assert!(available[0].available);
}

#[tokio::test]
async fn most_borrowed_tie_resolves_to_lowest_id() {
    let (services, _pool) = test_services().await;

    services
        .catalog
        .create_book(&book("Hyperion", 1989))
        .await
        .expect("create failed");
    services
        .catalog
        .create_book(&book("Dune", 1965))
        .await
        .expect("create failed");
    services
        .members
        .create_member(&member("Ada", "ada@example.org"))
        .await
        .expect("create failed");

    // one borrow each: a tie between the two titles
    services
        .circulation
        .borrow_book(&borrow(1, 1))
        .await
        .expect("borrow failed");
    services
        .circulation
        .borrow_book(&borrow(2, 1))
        .await
        .expect("borrow failed");

    let top = services
        .catalog
        .most_borrowed_book()
        .await
        .expect("query failed")
        .expect("expected a book");
    assert_eq!(top.id, 1);
    assert_eq!(top.title, "Hyperion");
}

#[tokio::test]
async fn frequent_borrowers_tie_orders_by_member_id() {
    let (services, _pool) = test_services().await;

    for i in 0..4 {
        services
            .catalog
            .create_book(&book(&format!("Book {}", i), 2010))
            .await
            .expect("create failed");
    }
    services
        .members
        .create_member(&member("Ada", "ada@example.org"))
        .await
        .expect("create failed");
    services
        .members
        .create_member(&member("Grace", "grace@example.org"))
        .await
        .expect("create failed");

    // two borrows each
    services.circulation.borrow_book(&borrow(1, 1)).await.expect("borrow failed");
    services.circulation.borrow_book(&borrow(2, 1)).await.expect("borrow failed");
    services.circulation.borrow_book(&borrow(3, 2)).await.expect("borrow failed");
    services.circulation.borrow_book(&borrow(4, 2)).await.expect("borrow failed");

    let members = services
        .members
        .list_frequent_borrowers()
        .await
        .expect("query failed");

    let ids: Vec<i64> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn purge_returns_exactly_the_deleted_rows() {
    let (services, pool) = test_services().await;

    services
        .catalog
        .create_book(&book("Old Unread", 1999))
        .await
        .expect("create failed");
    services
        .catalog
        .create_book(&book("Old Loved", 1998))
        .await
        .expect("create failed");
    services
        .catalog
        .create_book(&book("Recent", 2005))
        .await
        .expect("create failed");
    services
        .members
        .create_member(&member("Ada", "ada@example.org"))
        .await
        .expect("create failed");
    services
        .circulation
        .borrow_book(&borrow(2, 1))
        .await
        .expect("borrow failed");

    let purged = services
        .catalog
        .purge_stale_books()
        .await
        .expect("purge failed");

    let titles: Vec<&str> = purged.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Old Unread"]);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(&pool)
        .await
        .expect("Count query failed");
    assert_eq!(remaining, 2);
}

#[tokio::test]
async fn delete_member_removes_all_borrow_records() {
    let (services, pool) = test_services().await;

    services
        .catalog
        .create_book(&book("Dune", 1965))
        .await
        .expect("create failed");
    services
        .catalog
        .create_book(&book("Hyperion", 1989))
        .await
        .expect("create failed");
    services
        .members
        .create_member(&member("Ada", "ada@example.org"))
        .await
        .expect("create failed");

    services.circulation.borrow_book(&borrow(1, 1)).await.expect("borrow failed");
    services.circulation.borrow_book(&borrow(2, 1)).await.expect("borrow failed");
    assert_eq!(borrow_count(&pool).await, 2);

    let deleted = services
        .members
        .delete_member(1)
        .await
        .expect("delete failed");
    assert_eq!(deleted.full_name, "Ada");

    assert_eq!(borrow_count(&pool).await, 0);

    let err = services
        .members
        .delete_member(1)
        .await
        .expect_err("second delete must fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_member_with_no_borrows_is_not_an_error() {
    let (services, _pool) = test_services().await;

    services
        .members
        .create_member(&member("Grace", "grace@example.org"))
        .await
        .expect("create failed");

    services
        .members
        .delete_member(1)
        .await
        .expect("delete of borrowless member must succeed");
}
