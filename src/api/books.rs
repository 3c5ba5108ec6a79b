//! Book (catalog) endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

use super::MessageResponse;

/// Either the most borrowed book or an empty-catalog notice
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum MostBorrowedResponse {
    Found(Book),
    Empty { message: String },
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = MessageResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.services.catalog.create_book(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Book '{}' by {} was added", request.title, request.author),
        }),
    ))
}

/// List all books currently available for borrowing
#[utoipa::path(
    get,
    path = "/availablebooks",
    tag = "books",
    responses(
        (status = 200, description = "Available books", body = Vec<Book>)
    )
)]
pub async fn list_available_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_available_books().await?;
    Ok(Json(books))
}

/// Get the most borrowed book
#[utoipa::path(
    get,
    path = "/borrowedbooks",
    tag = "books",
    responses(
        (status = 200, description = "Most borrowed book, or a notice when no borrow exists", body = MostBorrowedResponse)
    )
)]
pub async fn most_borrowed_book(
    State(state): State<crate::AppState>,
) -> AppResult<Json<MostBorrowedResponse>> {
    let response = match state.services.catalog.most_borrowed_book().await? {
        Some(book) => MostBorrowedResponse::Found(book),
        None => MostBorrowedResponse::Empty {
            message: "No items found".to_string(),
        },
    };

    Ok(Json(response))
}

/// Delete stale books (published before 2000, never borrowed)
#[utoipa::path(
    delete,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Deleted books", body = Vec<Book>)
    )
)]
pub async fn purge_stale_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Book>>> {
    let purged = state.services.catalog.purge_stale_books().await?;
    Ok(Json(purged))
}
