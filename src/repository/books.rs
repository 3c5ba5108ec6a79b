//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{error::AppResult, models::book::{Book, CreateBook}};

/// Books published before this year with no borrow history are purge candidates.
const STALE_YEAR_CUTOFF: i64 = 2000;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Insert a new book row, returning its id
    pub async fn create(&self, book: &CreateBook) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO books (title, author, published_year, available)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.published_year)
        .bind(book.available)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Books available for borrowing.
    ///
    /// A book counts as available iff it has no borrow record at all; the
    /// `available` column is not consulted here, as it can drift when rows
    /// are inserted with `available = false` and never circulate.
    pub async fn list_available(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE id NOT IN (SELECT book_id FROM borrowed_books)
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// The single most borrowed book, grouped by title.
    ///
    /// Copies of a work share a title, so circulation counts aggregate over
    /// the title rather than the row id. Ties resolve to the title holding
    /// the lowest book id; `None` when nothing was ever borrowed.
    pub async fn most_borrowed(&self) -> AppResult<Option<Book>> {
        let title: Option<String> = sqlx::query_scalar(
            r#"
            SELECT b.title
            FROM borrowed_books br
            JOIN books b ON b.id = br.book_id
            GROUP BY b.title
            ORDER BY COUNT(*) DESC, MIN(b.id) ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        let Some(title) = title else {
            return Ok(None);
        };

        let book = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE title = ? ORDER BY id ASC LIMIT 1",
        )
        .bind(&title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Delete stale books: published before 2000 and never borrowed.
    ///
    /// Runs in one transaction; returns the rows that were deleted.
    pub async fn purge_stale(&self) -> AppResult<Vec<Book>> {
        let mut tx = self.pool.begin().await?;

        let stale = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE published_year < ?
              AND id NOT IN (SELECT book_id FROM borrowed_books)
            ORDER BY id
            "#,
        )
        .bind(STALE_YEAR_CUTOFF)
        .fetch_all(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM books
            WHERE published_year < ?
              AND id NOT IN (SELECT book_id FROM borrowed_books)
            "#,
        )
        .bind(STALE_YEAR_CUTOFF)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(stale)
    }
}
