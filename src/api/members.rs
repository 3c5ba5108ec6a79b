//! Member endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member},
};

use super::MessageResponse;

/// Create a new member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = MessageResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.services.members.create_member(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Member '{}' was added", request.full_name),
        }),
    ))
}

/// List members who have borrowed at least two books
#[utoipa::path(
    get,
    path = "/membersborrowed",
    tag = "members",
    responses(
        (status = 200, description = "Frequent borrowers, busiest first", body = Vec<Member>)
    )
)]
pub async fn list_frequent_borrowers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.members.list_frequent_borrowers().await?;
    Ok(Json(members))
}

/// Delete a member and all of their borrow records
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member deleted", body = MessageResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    let member = state.services.members.delete_member(id).await?;

    Ok(Json(MessageResponse {
        message: format!("Member '{}' has been deleted", member.full_name),
    }))
}
