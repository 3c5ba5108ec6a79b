//! Members service: registration, deletion, borrower queries

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member},
    repository::Repository,
};

/// Minimum borrow count for the frequent-borrowers listing
const FREQUENT_BORROWS_THRESHOLD: i64 = 2;

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new member
    pub async fn create_member(&self, member: &CreateMember) -> AppResult<i64> {
        self.repository.members.create(member).await
    }

    /// Members with at least two borrow records, busiest first
    pub async fn list_frequent_borrowers(&self) -> AppResult<Vec<Member>> {
        self.repository
            .members
            .with_min_borrows(FREQUENT_BORROWS_THRESHOLD)
            .await
    }

    /// Delete a member and all of their borrow records
    pub async fn delete_member(&self, id: i64) -> AppResult<Member> {
        self.repository.members.delete(id).await
    }
}
