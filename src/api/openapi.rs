//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, session};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "In-memory library catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Session
        session::get_session,
        session::login,
        session::logout,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::edit_book,
        books::cancel_edit,
        books::borrow_book,
        books::return_book,
    ),
    components(
        schemas(
            // Session
            session::LoginRequest,
            crate::models::session::Role,
            crate::models::session::SessionInfo,
            // Books
            crate::models::book::Book,
            crate::models::book::BookId,
            crate::models::book::BookDraft,
            crate::models::book::BookStatus,
            crate::models::view::CatalogView,
            crate::models::view::BookRow,
            crate::models::view::BookForm,
            crate::models::view::BookAction,
            crate::models::view::FormMode,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "session", description = "Role login and logout"),
        (name = "books", description = "Catalog management and circulation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
