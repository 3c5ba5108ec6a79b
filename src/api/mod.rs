//! API handlers for the Libris REST endpoints

pub mod books;
pub mod borrows;
pub mod health;
pub mod members;
pub mod openapi;

use axum::{
    routing::{delete, get, post},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

/// Confirmation body returned by mutating endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books (catalog)
        .route("/books", post(books::create_book))
        .route("/books", delete(books::purge_stale_books))
        .route("/availablebooks", get(books::list_available_books))
        .route("/borrowedbooks", get(books::most_borrowed_book))
        // Members
        .route("/members", post(members::create_member))
        .route("/members/:id", delete(members::delete_member))
        .route("/membersborrowed", get(members::list_frequent_borrowers))
        // Borrowing
        .route("/borrowbook", post(borrows::borrow_book))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
}
