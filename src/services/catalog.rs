//! Catalog service: book registration and catalog-wide queries

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new book in the catalog
    pub async fn create_book(&self, book: &CreateBook) -> AppResult<i64> {
        self.repository.books.create(book).await
    }

    /// All books currently available for borrowing
    pub async fn list_available_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_available().await
    }

    /// The most borrowed book, or `None` when nothing was ever borrowed
    pub async fn most_borrowed_book(&self) -> AppResult<Option<Book>> {
        self.repository.books.most_borrowed().await
    }

    /// Delete never-borrowed books published before 2000; returns the deleted rows
    pub async fn purge_stale_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.purge_stale().await
    }
}
