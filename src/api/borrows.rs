//! Borrow endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{error::AppResult, models::borrow::CreateBorrow};

use super::MessageResponse;

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrowbook",
    tag = "borrows",
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Book borrowed", body = MessageResponse),
        (status = 404, description = "Book missing or already borrowed"),
        (status = 409, description = "Member does not exist")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBorrow>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.circulation.borrow_book(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Book {} has been borrowed", request.book_id),
        }),
    ))
}
