//! Borrow record model and related types
//!
//! `return_date` is the due date supplied at borrow time. There is no
//! exposed operation that sets an actual return event; the record stays
//! in place until the owning member is deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Borrow record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// Borrow request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBorrow {
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
}
