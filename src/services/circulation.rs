//! Circulation service: borrow handling

use crate::{error::AppResult, models::borrow::CreateBorrow, repository::Repository};

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book for a member, returning the new borrow record id
    pub async fn borrow_book(&self, borrow: &CreateBorrow) -> AppResult<i64> {
        self.repository.borrows.create(borrow).await
    }
}
