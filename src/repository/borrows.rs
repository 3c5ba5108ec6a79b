//! Borrow records repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::borrow::CreateBorrow,
};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Sqlite>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Borrow a book: flip its availability and record the borrow, atomically.
    ///
    /// Two racing borrows of the same book resolve at the conditional
    /// UPDATE: the loser sees zero rows affected and gets `NotFound`.
    /// A missing book and an already-borrowed book are indistinguishable
    /// to the caller ("Book not found" either way). A nonexistent member
    /// is rejected by the foreign key on `borrowed_books.member_id`.
    pub async fn create(&self, borrow: &CreateBorrow) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE books SET available = FALSE WHERE id = ? AND available = TRUE",
        )
        .bind(borrow.book_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO borrowed_books (book_id, member_id, borrow_date, return_date)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(borrow.book_id)
        .bind(borrow.member_id)
        .bind(borrow.borrow_date)
        .bind(borrow.return_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(id)
    }
}
