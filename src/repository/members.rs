//! Members repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{is_unique_violation, AppError, AppResult},
    models::member::{CreateMember, Member},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Sqlite>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Insert a new member row, returning its id.
    /// A duplicate email surfaces as a conflict.
    pub async fn create(&self, member: &CreateMember) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO members (full_name, email, joined_date)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&member.full_name)
        .bind(&member.email)
        .bind(member.joined_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!(
                    "A member with email '{}' already exists",
                    member.email
                ))
            } else {
                e.into()
            }
        })?;

        Ok(id)
    }

    /// Members holding at least `threshold` borrow records, busiest first.
    /// Ties order by member id ascending.
    pub async fn with_min_borrows(&self, threshold: i64) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT m.*
            FROM members m
            JOIN (
                SELECT member_id, COUNT(*) AS borrow_count
                FROM borrowed_books
                GROUP BY member_id
                HAVING COUNT(*) >= ?
            ) b ON b.member_id = m.id
            ORDER BY b.borrow_count DESC, m.id ASC
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Delete a member together with all of their borrow records.
    ///
    /// Borrow records go first so the foreign key on `member_id` never
    /// dangles; a member with zero records deletes cleanly (the record
    /// delete is a no-op, not an error). Returns the deleted member row.
    pub async fn delete(&self, id: i64) -> AppResult<Member> {
        let mut tx = self.pool.begin().await?;

        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        sqlx::query("DELETE FROM borrowed_books WHERE member_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(member)
    }
}
