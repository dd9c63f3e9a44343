//! Book (catalog) endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{BookDraft, BookId, CatalogView},
    AppState,
};

use super::{ApiJson, ApiPath};

/// Get the catalog as seen by the current role
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Catalog view", body = CatalogView)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<CatalogView> {
    Json(state.services.catalog.view().await)
}

/// Add a book (admin)
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookDraft,
    responses(
        (status = 201, description = "Book added", body = CatalogView),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse),
        (status = 401, description = "No active session", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<BookDraft>,
) -> AppResult<(StatusCode, Json<CatalogView>)> {
    let view = state.services.catalog.add_book(draft).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Update a book's title and author (admin)
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (UUID)")
    ),
    request_body = BookDraft,
    responses(
        (status = 200, description = "Book updated", body = CatalogView),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Another book has this title and author", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BookId>,
    ApiJson(draft): ApiJson<BookDraft>,
) -> AppResult<Json<CatalogView>> {
    let view = state.services.catalog.update_book(id, draft).await?;
    Ok(Json(view))
}

/// Delete a book (admin)
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (UUID)")
    ),
    responses(
        (status = 200, description = "Book deleted", body = CatalogView),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BookId>,
) -> AppResult<Json<CatalogView>> {
    let view = state.services.catalog.delete_book(id).await?;
    Ok(Json(view))
}

/// Load a book into the update form (admin)
#[utoipa::path(
    post,
    path = "/books/{id}/edit",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (UUID)")
    ),
    responses(
        (status = 200, description = "Form switched to update mode", body = CatalogView),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn edit_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BookId>,
) -> AppResult<Json<CatalogView>> {
    let view = state.services.catalog.begin_edit(id).await?;
    Ok(Json(view))
}

/// Leave update mode without saving (admin)
#[utoipa::path(
    delete,
    path = "/edit",
    tag = "books",
    responses(
        (status = 200, description = "Form switched back to add mode", body = CatalogView)
    )
)]
pub async fn cancel_edit(State(state): State<AppState>) -> AppResult<Json<CatalogView>> {
    let view = state.services.catalog.cancel_edit().await?;
    Ok(Json(view))
}

/// Borrow a book (user)
#[utoipa::path(
    post,
    path = "/books/{id}/borrow",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (UUID)")
    ),
    responses(
        (status = 200, description = "Book borrowed", body = CatalogView),
        (status = 403, description = "Not a user", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already borrowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BookId>,
) -> AppResult<Json<CatalogView>> {
    let view = state.services.catalog.borrow_book(id).await?;
    Ok(Json(view))
}

/// Return a book (user)
#[utoipa::path(
    post,
    path = "/books/{id}/return",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (UUID)")
    ),
    responses(
        (status = 200, description = "Book returned", body = CatalogView),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BookId>,
) -> AppResult<Json<CatalogView>> {
    let view = state.services.catalog.return_book(id).await?;
    Ok(Json(view))
}
